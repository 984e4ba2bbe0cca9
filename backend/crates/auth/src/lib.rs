//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session payload, authenticated context, credentials, email
//! - `application/` - Configuration, session signing, credential hashing
//! - `presentation/` - Authentication gate middleware and context extractor
//!
//! ## Security Model
//! - Passwords hashed with Argon2id and a per-credential salt
//! - Hash comparison in constant time
//! - Stateless sessions: an HS256-signed token in the `jwt_token` cookie,
//!   valid for one day, carrying `{ _id, email, name }`
//! - No server-side revocation; rotating the secret invalidates every token

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::credentials::CredentialService;
pub use application::session::SessionService;
pub use domain::credential::Credential;
pub use domain::session::{AuthenticatedContext, SessionPayload};
pub use domain::value_object::email::Email;
pub use error::{AuthError, AuthResult};
pub use presentation::middleware::{GateDecision, SessionGate, require_session};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
