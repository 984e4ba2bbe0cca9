//! Marketplace Error Types
//!
//! Marketplace-specific error variants, rendered through
//! `kernel::error::AppError`.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Marketplace-specific result type alias
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("A vendor already exists with this email")]
    VendorEmailTaken,

    #[error("Vendor not found")]
    VendorNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Offer not found")]
    OfferNotFound,

    #[error("Transaction not found")]
    TransactionNotFound,

    #[error("Delivery user not found")]
    DeliveryUserNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data that no longer maps onto the domain
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl MarketplaceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VendorEmailTaken => ErrorKind::Conflict,
            Self::VendorNotFound
            | Self::OrderNotFound
            | Self::OfferNotFound
            | Self::TransactionNotFound
            | Self::DeliveryUserNotFound => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::BadRequest,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Auth(e) => e.kind(),
            Self::Database(_) | Self::Corrupt(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            Self::Auth(e) => e.to_app_error(),
            Self::Database(e) => AppError::from(e),
            Self::Corrupt(_) => AppError::internal("Stored data could not be read"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            Self::Database(e) => tracing::error!(error = %e, "Database error"),
            Self::Corrupt(detail) => tracing::error!(detail = %detail, "Corrupt record"),
            Self::Forbidden(message) => tracing::warn!(message = %message, "Forbidden"),
            _ => tracing::debug!(error = %self, "Request failed"),
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.into_app_error().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (MarketplaceError::VendorEmailTaken, StatusCode::CONFLICT),
            (MarketplaceError::VendorNotFound, StatusCode::NOT_FOUND),
            (MarketplaceError::OrderNotFound, StatusCode::NOT_FOUND),
            (
                MarketplaceError::validation("price must not be negative"),
                StatusCode::BAD_REQUEST,
            ),
            (
                MarketplaceError::Forbidden("not yours".into()),
                StatusCode::FORBIDDEN,
            ),
            (
                MarketplaceError::Auth(AuthError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                MarketplaceError::Corrupt("bad status".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_corrupt_detail_not_exposed() {
        let app = MarketplaceError::Corrupt("orders.order_status = 'LOST'".into()).into_app_error();
        assert_eq!(app.message(), "Stored data could not be read");
    }
}
