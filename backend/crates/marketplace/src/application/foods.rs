//! Food Use Case
//!
//! Menu management for the logged-in vendor.

use std::sync::Arc;

use kernel::id::VendorId;

use crate::domain::entity::{food::Food, vendor::Vendor};
use crate::domain::repository::{FoodRepository, VendorRepository};
use crate::domain::validation::{non_negative, required_text};
use crate::error::{MarketplaceError, MarketplaceResult};

/// Create food input
pub struct CreateFoodInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub food_type: String,
    pub ready_time: i32,
    pub price: f64,
}

pub struct FoodUseCase<V, F>
where
    V: VendorRepository,
    F: FoodRepository,
{
    vendor_repo: Arc<V>,
    food_repo: Arc<F>,
}

impl<V, F> FoodUseCase<V, F>
where
    V: VendorRepository,
    F: FoodRepository,
{
    pub fn new(vendor_repo: Arc<V>, food_repo: Arc<F>) -> Self {
        Self {
            vendor_repo,
            food_repo,
        }
    }

    /// Create the food and append it to the vendor's menu; returns the
    /// updated vendor
    pub async fn add_food(
        &self,
        vendor_id: &VendorId,
        input: CreateFoodInput,
    ) -> MarketplaceResult<Vendor> {
        let name = required_text("name", &input.name)?;
        let category = required_text("category", &input.category)?;
        let food_type = required_text("foodType", &input.food_type)?;
        let price = non_negative("price", input.price)?;
        if input.ready_time < 0 {
            return Err(MarketplaceError::validation("readyTime must not be negative"));
        }

        let mut vendor = self
            .vendor_repo
            .find_by_id(vendor_id)
            .await?
            .ok_or(MarketplaceError::VendorNotFound)?;

        let food = Food::new(
            vendor.id,
            name,
            input.description.trim().to_string(),
            category,
            food_type,
            input.ready_time,
            price,
        );
        self.food_repo.create(&food).await?;

        vendor.add_food(food.id);
        self.vendor_repo.update(&vendor).await?;

        tracing::info!(vendor_id = %vendor.id, food_id = %food.id, "Food added");

        Ok(vendor)
    }

    pub async fn list_foods(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Food>> {
        self.food_repo.find_by_vendor(vendor_id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::create_vendor::{CreateVendorUseCase, tests::input};
    use crate::infra::InMemoryMarketplaceRepository;
    use auth::CredentialService;

    pub(crate) fn dal() -> CreateFoodInput {
        CreateFoodInput {
            name: "Dal Makhani".into(),
            description: "Slow-cooked black lentils".into(),
            category: "mains".into(),
            food_type: "veg".into(),
            ready_time: 20,
            price: 180.0,
        }
    }

    async fn setup() -> (
        FoodUseCase<InMemoryMarketplaceRepository, InMemoryMarketplaceRepository>,
        VendorId,
    ) {
        let repo = Arc::new(InMemoryMarketplaceRepository::new());
        let vendor = CreateVendorUseCase::new(repo.clone(), Arc::new(CredentialService::default()))
            .execute(input("chef@example.com"))
            .await
            .unwrap();
        (FoodUseCase::new(repo.clone(), repo), vendor.id)
    }

    #[tokio::test]
    async fn test_add_food_links_vendor() {
        let (foods, vendor_id) = setup().await;

        let vendor = foods.add_food(&vendor_id, dal()).await.unwrap();
        assert_eq!(vendor.foods.len(), 1);

        let listed = foods.list_foods(&vendor_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, vendor.foods[0]);
        assert_eq!(listed[0].rating, 0.0);
        assert!(listed[0].images.is_empty());
    }

    #[tokio::test]
    async fn test_foods_scoped_to_vendor() {
        let (foods, vendor_id) = setup().await;
        foods.add_food(&vendor_id, dal()).await.unwrap();

        assert!(foods.list_foods(&VendorId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let (foods, vendor_id) = setup().await;
        let mut bad = dal();
        bad.price = -5.0;

        assert!(matches!(
            foods.add_food(&vendor_id, bad).await,
            Err(MarketplaceError::Validation(_))
        ));
        assert!(foods.list_foods(&vendor_id).await.unwrap().is_empty());
    }
}
