//! Error Conversions
//!
//! Database errors into [`AppError`], and [`AppError`] into an HTTP
//! response.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                AppError::new(ErrorKind::NotFound, "Record not found").with_source(err)
            }
            sqlx::Error::PoolTimedOut => {
                AppError::new(ErrorKind::ServiceUnavailable, "Database connection pool exhausted")
                    .with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23505") => AppError::new(ErrorKind::Conflict, "Duplicate key value"),
                    Some("23503") => AppError::new(ErrorKind::Conflict, "Foreign key violation"),
                    Some("23502" | "23514") => {
                        AppError::new(ErrorKind::BadRequest, "Constraint violation")
                    }
                    Some("53000" | "53100" | "53200" | "53300" | "57P01" | "57P03") => {
                        AppError::new(ErrorKind::ServiceUnavailable, "Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::new(ErrorKind::ServiceUnavailable, "Database connection error")
                    .with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 shape, with `message` kept for clients of the old API
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "message": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_errors_hide_details() {
        let app_err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(app_err.message(), "Database connection pool exhausted");

        let app_err = AppError::from(sqlx::Error::Protocol("unexpected packet".into()));
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(app_err.message(), "Database error");
    }
}
