//! Transaction Entity
//!
//! Written by the customer checkout flow; read-only from the admin side.

use chrono::{DateTime, Utc};
use kernel::id::{OrderId, TransactionId, VendorId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: TransactionId,
    pub customer: String,
    pub vendor_id: VendorId,
    pub order_id: OrderId,
    pub order_value: f64,
    pub offer_used: String,
    pub status: String,
    pub payment_mode: String,
    pub payment_response: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        customer: impl Into<String>,
        vendor_id: VendorId,
        order_id: OrderId,
        order_value: f64,
        payment_mode: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            customer: customer.into(),
            vendor_id,
            order_id,
            order_value,
            offer_used: String::new(),
            status: "OPEN".to_string(),
            payment_mode: payment_mode.into(),
            payment_response: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
