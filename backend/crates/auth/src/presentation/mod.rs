//! Presentation Layer
//!
//! Authentication gate for protected routes.

pub mod middleware;

pub use middleware::{GateDecision, SessionGate, require_session};
