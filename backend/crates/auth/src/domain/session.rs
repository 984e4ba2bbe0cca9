//! Session Identity
//!
//! `SessionPayload` is what gets signed into the session token;
//! `AuthenticatedContext` is what a protected handler receives once the
//! gate has verified it.

use serde::{Deserialize, Serialize};

/// Identity claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Subject (vendor) id
    #[serde(rename = "_id")]
    pub subject_id: String,
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

impl SessionPayload {
    pub fn new(
        subject_id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}

/// Verified identity attached to a request
///
/// Only the authentication gate constructs this, and only after the
/// session signature and expiry have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedContext(SessionPayload);

impl AuthenticatedContext {
    pub(crate) fn new(payload: SessionPayload) -> Self {
        Self(payload)
    }

    pub fn subject_id(&self) -> &str {
        &self.0.subject_id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn display_name(&self) -> &str {
        &self.0.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_names() {
        let payload = SessionPayload::new("v-1", "chef@example.com", "Curry House");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "_id": "v-1", "email": "chef@example.com", "name": "Curry House" })
        );
    }
}
