//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Login credential is not valid")]
    InvalidCredentials,

    /// Session cookie missing, forged or expired
    #[error("User not authorised")]
    SessionInvalid,

    /// Password rejected by the registration policy
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Malformed email address
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Stored credential could not be used (bad salt/hash) or hashing failed
    #[error("Credential error: {0}")]
    Credential(#[from] PasswordHashError),

    /// Session token could not be produced
    #[error("Session token error: {0}")]
    Token(#[from] TokenError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::PasswordValidation(_) | AuthError::InvalidEmail(_) => ErrorKind::BadRequest,
            AuthError::Credential(_) | AuthError::Token(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message so secrets or storage
    /// details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Authentication failed"),
            ErrorKind::Unauthorized if matches!(self, AuthError::SessionInvalid) => {
                AppError::unauthorized(self.to_string()).with_action("Please log in again")
            }
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Credential(e) => {
                tracing::error!(error = %e, "Stored credential unusable");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Session token generation failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
