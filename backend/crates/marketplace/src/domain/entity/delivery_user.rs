//! Delivery User Entity

use chrono::{DateTime, Utc};
use kernel::id::DeliveryUserId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryUser {
    #[serde(rename = "_id")]
    pub id: DeliveryUserId,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub pincode: String,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryUser {
    /// Unverified and unavailable until an admin approves them
    pub fn new(
        email: impl Into<String>,
        phone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: DeliveryUserId::new(),
            email: email.into(),
            phone: phone.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: String::new(),
            pincode: String::new(),
            verified: false,
            lat: None,
            lng: None,
            is_available: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
        self.updated_at = Utc::now();
    }
}
