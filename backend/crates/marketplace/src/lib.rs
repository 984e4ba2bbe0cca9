//! Marketplace Backend Module
//!
//! Vendors, their menus and orders, offers, and the admin views over
//! vendors, transactions and delivery users.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits, offer eligibility
//! - `application/` - Use cases
//! - `infra/` - In-memory and PostgreSQL repositories
//! - `presentation/` - HTTP handlers, DTOs, routers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::MarketplaceRepository;
pub use error::{MarketplaceError, MarketplaceResult};
pub use infra::{InMemoryMarketplaceRepository, PgMarketplaceRepository};
pub use presentation::{MarketplaceState, admin_router, vendor_router};
