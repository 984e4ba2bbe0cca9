//! Vendor Entity

use auth::{Credential, Email};
use chrono::{DateTime, Utc};
use kernel::id::{FoodId, VendorId};
use serde::Serialize;

/// Descriptive fields supplied at onboarding
#[derive(Debug, Clone, PartialEq)]
pub struct VendorDetails {
    pub name: String,
    pub owner_name: String,
    pub food_type: Vec<String>,
    pub pincode: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: VendorId,
    pub name: String,
    pub owner_name: String,
    pub food_type: Vec<String>,
    pub pincode: String,
    pub address: String,
    pub phone: String,
    pub email: Email,
    #[serde(skip)]
    pub credential: Credential,
    pub service_available: bool,
    pub cover_images: Vec<String>,
    pub rating: f64,
    pub foods: Vec<FoodId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    /// New vendor: unrated, not yet serving, no images or foods
    pub fn register(details: VendorDetails, email: Email, credential: Credential) -> Self {
        let now = Utc::now();
        Self {
            id: VendorId::new(),
            name: details.name,
            owner_name: details.owner_name,
            food_type: details.food_type,
            pincode: details.pincode,
            address: details.address,
            phone: details.phone,
            email,
            credential,
            service_available: false,
            cover_images: Vec::new(),
            rating: 0.0,
            foods: Vec::new(),
            lat: None,
            lng: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_profile(
        &mut self,
        name: String,
        address: String,
        phone: String,
        food_type: Vec<String>,
    ) {
        self.name = name;
        self.address = address;
        self.phone = phone;
        self.food_type = food_type;
        self.touch();
    }

    /// Flip availability; coordinates are only replaced when both are given
    pub fn toggle_service(&mut self, lat: Option<f64>, lng: Option<f64>) {
        self.service_available = !self.service_available;
        if let (Some(lat), Some(lng)) = (lat, lng) {
            self.lat = Some(lat);
            self.lng = Some(lng);
        }
        self.touch();
    }

    pub fn add_food(&mut self, food_id: FoodId) {
        self.foods.push(food_id);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::CredentialService;

    fn vendor() -> Vendor {
        let credential = CredentialService::default()
            .create("correct-horse".to_string())
            .unwrap();
        Vendor::register(
            VendorDetails {
                name: "Curry House".into(),
                owner_name: "Asha".into(),
                food_type: vec!["veg".into()],
                pincode: "560001".into(),
                address: "12 MG Road".into(),
                phone: "9876543210".into(),
            },
            Email::parse("chef@example.com").unwrap(),
            credential,
        )
    }

    #[test]
    fn test_register_defaults() {
        let vendor = vendor();
        assert!(!vendor.service_available);
        assert_eq!(vendor.rating, 0.0);
        assert!(vendor.cover_images.is_empty());
        assert!(vendor.foods.is_empty());
        assert_eq!(vendor.lat, None);
    }

    #[test]
    fn test_serialization_hides_credential() {
        let json = serde_json::to_value(vendor()).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["ownerName"], "Asha");
        assert_eq!(json["serviceAvailable"], false);
        assert_eq!(json["email"], "chef@example.com");
        assert!(json.get("credential").is_none());
        assert!(json.get("password").is_none());
        assert!(json.get("salt").is_none());
        assert!(json.get("lat").is_none());
    }

    #[test]
    fn test_toggle_service_needs_both_coordinates() {
        let mut vendor = vendor();

        vendor.toggle_service(Some(12.97), None);
        assert!(vendor.service_available);
        assert_eq!(vendor.lat, None);

        vendor.toggle_service(Some(12.97), Some(77.59));
        assert!(!vendor.service_available);
        assert_eq!(vendor.lat, Some(12.97));
        assert_eq!(vendor.lng, Some(77.59));
    }
}
