//! Food Entity

use chrono::{DateTime, Utc};
use kernel::id::{FoodId, VendorId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: FoodId,
    pub vendor_id: VendorId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub food_type: String,
    /// Preparation time in minutes
    pub ready_time: i32,
    pub price: f64,
    pub rating: f64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Food {
    pub fn new(
        vendor_id: VendorId,
        name: String,
        description: String,
        category: String,
        food_type: String,
        ready_time: i32,
        price: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: FoodId::new(),
            vendor_id,
            name,
            description,
            category,
            food_type,
            ready_time,
            price,
            rating: 0.0,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
