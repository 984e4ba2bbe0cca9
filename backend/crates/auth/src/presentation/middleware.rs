//! Auth Middleware
//!
//! Middleware for requiring a valid session on protected routes. On
//! success the verified identity is stored in the request extensions,
//! where handlers pick it up through the `AuthenticatedContext` extractor.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::session::SessionService;
use crate::domain::session::AuthenticatedContext;
use crate::error::AuthError;

/// Outcome of inspecting a request's session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Authenticated(AuthenticatedContext),
    Unauthenticated,
}

/// Middleware state
#[derive(Debug, Clone)]
pub struct SessionGate {
    sessions: Arc<SessionService>,
}

impl SessionGate {
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self { sessions }
    }

    /// Missing, forged and expired cookies all land on `Unauthenticated`
    pub fn evaluate(&self, headers: &HeaderMap) -> GateDecision {
        self.sessions
            .token_from_headers(headers)
            .and_then(|token| self.sessions.validate_signature(&token))
            .map_or(GateDecision::Unauthenticated, |payload| {
                GateDecision::Authenticated(AuthenticatedContext::new(payload))
            })
    }
}

/// Middleware that requires a valid session
pub async fn require_session(
    State(gate): State<SessionGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    match gate.evaluate(req.headers()) {
        GateDecision::Authenticated(context) => {
            tracing::debug!(subject_id = %context.subject_id(), "Session accepted");
            req.extensions_mut().insert(context);
            Ok(next.run(req).await)
        }
        GateDecision::Unauthenticated => {
            tracing::warn!(path = %req.uri().path(), "Rejected request without a valid session");
            Err(AuthError::SessionInvalid)
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedContext>()
            .cloned()
            .ok_or(AuthError::SessionInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::domain::session::SessionPayload;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use chrono::{TimeDelta, Utc};
    use tower::ServiceExt;

    async fn whoami(context: AuthenticatedContext) -> String {
        format!("{}|{}", context.subject_id(), context.display_name())
    }

    fn sessions() -> Arc<SessionService> {
        Arc::new(SessionService::new(&AuthConfig::new(b"gate-test-secret".to_vec())))
    }

    fn app(sessions: Arc<SessionService>) -> Router {
        Router::new()
            .route("/me", get(whoami))
            .route_layer(from_fn_with_state(SessionGate::new(sessions), require_session))
            .route("/open", get(|| async { "open" }))
    }

    fn payload() -> SessionPayload {
        SessionPayload::new("vendor-7", "chef@example.com", "Curry House")
    }

    fn request(path: &str, cookie: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_no_cookie_is_rejected() {
        let response = app(sessions()).oneshot(request("/me", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "User not authorised");
    }

    #[tokio::test]
    async fn test_valid_session_reaches_handler() {
        let sessions = sessions();
        let token = sessions.generate_signature(&payload()).unwrap();

        let response = app(sessions)
            .oneshot(request("/me", Some(&format!("jwt_token={token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"vendor-7|Curry House");
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected() {
        let sessions = sessions();
        let token = sessions
            .generate_signature_at(&payload(), Utc::now() - TimeDelta::days(2))
            .unwrap();

        let response = app(sessions)
            .oneshot(request("/me", Some(&format!("jwt_token={token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tampered_session_is_rejected() {
        let sessions = sessions();
        let token = sessions.generate_signature(&payload()).unwrap();
        let tampered = format!("{}x", token);

        let response = app(sessions)
            .oneshot(request("/me", Some(&format!("jwt_token={tampered}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unprotected_route_is_untouched() {
        let response = app(sessions()).oneshot(request("/open", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_evaluate_reads_named_cookie_only() {
        let sessions = sessions();
        let gate = SessionGate::new(sessions.clone());
        let token = sessions.generate_signature(&payload()).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("session={token}").parse().unwrap(),
        );
        assert_eq!(gate.evaluate(&headers), GateDecision::Unauthenticated);

        headers.insert(
            header::COOKIE,
            format!("theme=dark; jwt_token={token}").parse().unwrap(),
        );
        assert!(matches!(
            gate.evaluate(&headers),
            GateDecision::Authenticated(ref ctx) if ctx.email() == "chef@example.com"
        ));
    }
}
