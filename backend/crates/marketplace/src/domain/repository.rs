//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Collections return records in insertion order.

use auth::Email;
use kernel::id::{DeliveryUserId, FoodId, OfferId, OrderId, TransactionId, VendorId};

use crate::domain::entity::{
    delivery_user::DeliveryUser, food::Food, offer::Offer, order::Order,
    transaction::Transaction, vendor::Vendor,
};
use crate::error::MarketplaceResult;

/// Vendor repository trait
#[trait_variant::make(VendorRepository: Send)]
pub trait LocalVendorRepository {
    /// Create a vendor; fails with `VendorEmailTaken` if the email is in use
    async fn create(&self, vendor: &Vendor) -> MarketplaceResult<()>;

    async fn find_by_id(&self, vendor_id: &VendorId) -> MarketplaceResult<Option<Vendor>>;

    async fn find_by_email(&self, email: &Email) -> MarketplaceResult<Option<Vendor>>;

    async fn find_all(&self) -> MarketplaceResult<Vec<Vendor>>;

    /// Save every mutable field of an existing vendor
    async fn update(&self, vendor: &Vendor) -> MarketplaceResult<()>;
}

/// Food repository trait
#[trait_variant::make(FoodRepository: Send)]
pub trait LocalFoodRepository {
    async fn create(&self, food: &Food) -> MarketplaceResult<()>;

    async fn find_by_vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Food>>;

    /// Foods among `food_ids` that exist; unknown ids are skipped
    async fn find_by_ids(&self, food_ids: &[FoodId]) -> MarketplaceResult<Vec<Food>>;
}

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    async fn create(&self, order: &Order) -> MarketplaceResult<()>;

    async fn find_by_id(&self, order_id: &OrderId) -> MarketplaceResult<Option<Order>>;

    async fn find_by_vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Order>>;

    async fn update(&self, order: &Order) -> MarketplaceResult<()>;
}

/// Offer repository trait
#[trait_variant::make(OfferRepository: Send)]
pub trait LocalOfferRepository {
    async fn create(&self, offer: &Offer) -> MarketplaceResult<()>;

    async fn find_by_id(&self, offer_id: &OfferId) -> MarketplaceResult<Option<Offer>>;

    async fn find_all(&self) -> MarketplaceResult<Vec<Offer>>;

    async fn update(&self, offer: &Offer) -> MarketplaceResult<()>;
}

/// Transaction repository trait
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> MarketplaceResult<()>;

    async fn find_by_id(
        &self,
        transaction_id: &TransactionId,
    ) -> MarketplaceResult<Option<Transaction>>;

    async fn find_all(&self) -> MarketplaceResult<Vec<Transaction>>;
}

/// Delivery user repository trait
#[trait_variant::make(DeliveryUserRepository: Send)]
pub trait LocalDeliveryUserRepository {
    async fn create(&self, user: &DeliveryUser) -> MarketplaceResult<()>;

    async fn find_by_id(
        &self,
        user_id: &DeliveryUserId,
    ) -> MarketplaceResult<Option<DeliveryUser>>;

    async fn find_all(&self) -> MarketplaceResult<Vec<DeliveryUser>>;

    async fn update(&self, user: &DeliveryUser) -> MarketplaceResult<()>;
}

/// Everything the HTTP layer needs from one storage backend
pub trait MarketplaceRepository:
    VendorRepository
    + FoodRepository
    + OrderRepository
    + OfferRepository
    + TransactionRepository
    + DeliveryUserRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> MarketplaceRepository for T where
    T: VendorRepository
        + FoodRepository
        + OrderRepository
        + OfferRepository
        + TransactionRepository
        + DeliveryUserRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
