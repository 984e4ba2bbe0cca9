//! Application Layer
//!
//! Configuration plus the session and credential services built from it.

pub mod config;
pub mod credentials;
pub mod session;

// Re-exports
pub use config::AuthConfig;
pub use credentials::CredentialService;
pub use session::SessionService;
