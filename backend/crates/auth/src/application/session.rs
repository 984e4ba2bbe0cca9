//! Session Service
//!
//! Issues and validates the signed session token and builds the cookie
//! headers that carry it.

use axum::http::{HeaderMap, HeaderValue};
use chrono::{DateTime, Utc};
use platform::cookie::{CookieConfig, extract_cookie, set_cookie_header};
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::domain::session::SessionPayload;
use crate::error::AuthResult;

#[derive(Debug, Clone)]
pub struct SessionService {
    signer: TokenSigner,
    cookie: CookieConfig,
}

impl SessionService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            signer: TokenSigner::new(&config.session_secret, config.session_ttl),
            cookie: config.cookie_config(),
        }
    }

    /// Sign `payload` into a token that expires one session lifetime from now
    pub fn generate_signature(&self, payload: &SessionPayload) -> AuthResult<String> {
        self.generate_signature_at(payload, Utc::now())
    }

    pub fn generate_signature_at(
        &self,
        payload: &SessionPayload,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        Ok(self.signer.sign_at(payload, issued_at)?)
    }

    /// Verify a token; `None` for anything forged, malformed or expired
    pub fn validate_signature(&self, token: &str) -> Option<SessionPayload> {
        self.signer.verify(token)
    }

    pub fn validate_signature_at(&self, token: &str, now: DateTime<Utc>) -> Option<SessionPayload> {
        self.signer.verify_at(token, now)
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Session token from the request cookies, if present
    pub fn token_from_headers(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.cookie.name)
    }

    /// `Set-Cookie` value carrying `token`
    pub fn session_cookie(&self, token: &str) -> HeaderValue {
        set_cookie_header(&self.cookie, token)
    }

    /// `Set-Cookie` value that clears the session cookie
    pub fn clear_cookie(&self) -> HeaderValue {
        HeaderValue::from_str(&self.cookie.build_delete_cookie())
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}
