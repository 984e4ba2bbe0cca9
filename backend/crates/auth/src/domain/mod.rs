//! Domain Layer
//!
//! Session identity, stored credentials and value objects.

pub mod credential;
pub mod session;
pub mod value_object;

// Re-exports
pub use credential::Credential;
pub use session::{AuthenticatedContext, SessionPayload};
pub use value_object::email::Email;
