//! Presentation Layer
//!
//! HTTP handlers, DTOs and routers for `/admin` and `/vendor`.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::MarketplaceState;
pub use router::{admin_router, vendor_router};
