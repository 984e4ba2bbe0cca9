//! Signed, Expiring Tokens
//!
//! HS256 JSON Web Tokens. The claims are the caller's payload with `iat`
//! and `exp` (Unix seconds) flattened next to it. Signing and verification
//! go through `jsonwebtoken`; only the HS256 algorithm is accepted and
//! expiry has no leeway.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind as JwtErrorKind,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Why a token was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Unsupported token algorithm")]
    UnsupportedAlgorithm,

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token claims are invalid: {0}")]
    InvalidClaims(String),

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenError::BadSignature,
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                TokenError::UnsupportedAlgorithm
            }
            JwtErrorKind::InvalidToken | JwtErrorKind::Base64(_) | JwtErrorKind::Utf8(_) => {
                TokenError::Malformed
            }
            JwtErrorKind::Json(_) | JwtErrorKind::MissingRequiredClaim(_) => {
                TokenError::InvalidClaims(err.to_string())
            }
            _ => TokenError::Malformed,
        }
    }
}

#[derive(Serialize)]
struct OutgoingClaims<'a, T> {
    #[serde(flatten)]
    payload: &'a T,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct IncomingClaims<T> {
    #[serde(flatten)]
    payload: T,
    exp: i64,
}

/// Issues and verifies signed tokens with a fixed lifetime
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        let secret = secret.as_ref();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Sign `payload`, expiring one lifetime from now
    pub fn sign<T: Serialize>(&self, payload: &T) -> Result<String, TokenError> {
        self.sign_at(payload, Utc::now())
    }

    pub fn sign_at<T: Serialize>(
        &self,
        payload: &T,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = issued_at.timestamp();
        let claims = OutgoingClaims {
            payload,
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify `token` against the current time.
    ///
    /// Every failure collapses into `None`; the reason is only logged.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Option<T> {
        log_rejection(self.decode(token))
    }

    pub fn verify_at<T: DeserializeOwned>(&self, token: &str, now: DateTime<Utc>) -> Option<T> {
        log_rejection(self.decode_at(token, now))
    }

    /// Full verification with the failure reason
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let claims: IncomingClaims<T> = self.decode_claims(token, true)?;
        Ok(claims.payload)
    }

    /// Like [`TokenSigner::decode`], with expiry judged at `now`
    pub fn decode_at<T: DeserializeOwned>(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<T, TokenError> {
        let claims: IncomingClaims<T> = self.decode_claims(token, false)?;
        if claims.exp < now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims.payload)
    }

    fn decode_claims<T: DeserializeOwned>(
        &self,
        token: &str,
        validate_exp: bool,
    ) -> Result<IncomingClaims<T>, TokenError> {
        // An unparseable header (including `alg: none`) is malformed, not bad claims
        jsonwebtoken::decode_header(token).map_err(|e| match TokenError::from(e) {
            TokenError::InvalidClaims(_) => TokenError::Malformed,
            other => other,
        })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = validate_exp;

        let data = jsonwebtoken::decode::<IncomingClaims<T>>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

fn log_rejection<T>(result: Result<T, TokenError>) -> Option<T> {
    match result {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!(reason = %e, "Token rejected");
            None
        }
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
