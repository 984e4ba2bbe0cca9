//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL for deployments, in-memory for
//! tests and database-less runs.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryMarketplaceRepository;
pub use postgres::PgMarketplaceRepository;
