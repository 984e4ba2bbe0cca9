//! Vendor Profile Use Case
//!
//! Read and edit the logged-in vendor's own record.

use std::sync::Arc;

use kernel::id::VendorId;

use crate::domain::entity::vendor::Vendor;
use crate::domain::repository::VendorRepository;
use crate::domain::validation::{required_text, text_list};
use crate::error::{MarketplaceError, MarketplaceResult};

/// Edit vendor profile input
pub struct EditVendorInput {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub food_type: Vec<String>,
}

pub struct VendorProfileUseCase<V>
where
    V: VendorRepository,
{
    vendor_repo: Arc<V>,
}

impl<V> VendorProfileUseCase<V>
where
    V: VendorRepository,
{
    pub fn new(vendor_repo: Arc<V>) -> Self {
        Self { vendor_repo }
    }

    pub async fn get(&self, vendor_id: &VendorId) -> MarketplaceResult<Vendor> {
        self.vendor_repo
            .find_by_id(vendor_id)
            .await?
            .ok_or(MarketplaceError::VendorNotFound)
    }

    pub async fn update(
        &self,
        vendor_id: &VendorId,
        input: EditVendorInput,
    ) -> MarketplaceResult<Vendor> {
        let name = required_text("name", &input.name)?;
        let address = required_text("address", &input.address)?;
        let phone = required_text("phone", &input.phone)?;
        let food_type = text_list("foodType", &input.food_type)?;

        let mut vendor = self.get(vendor_id).await?;
        vendor.update_profile(name, address, phone, food_type);
        self.vendor_repo.update(&vendor).await?;

        tracing::info!(vendor_id = %vendor.id, "Vendor profile updated");

        Ok(vendor)
    }

    /// Flip `serviceAvailable`, storing the location when both
    /// coordinates are supplied
    pub async fn toggle_service(
        &self,
        vendor_id: &VendorId,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> MarketplaceResult<Vendor> {
        let mut vendor = self.get(vendor_id).await?;
        vendor.toggle_service(lat, lng);
        self.vendor_repo.update(&vendor).await?;

        tracing::info!(
            vendor_id = %vendor.id,
            service_available = vendor.service_available,
            "Vendor service toggled"
        );

        Ok(vendor)
    }
}
