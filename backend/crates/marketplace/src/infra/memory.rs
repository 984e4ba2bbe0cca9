//! In-Memory Repository
//!
//! One lock around all collections. Each collection is a `Vec`, so reads
//! come back in insertion order.

use std::sync::Arc;

use auth::Email;
use kernel::id::{DeliveryUserId, FoodId, OfferId, OrderId, TransactionId, VendorId};
use tokio::sync::RwLock;

use crate::domain::entity::{
    delivery_user::DeliveryUser, food::Food, offer::Offer, order::Order,
    transaction::Transaction, vendor::Vendor,
};
use crate::domain::repository::{
    DeliveryUserRepository, FoodRepository, OfferRepository, OrderRepository,
    TransactionRepository, VendorRepository,
};
use crate::error::{MarketplaceError, MarketplaceResult};

#[derive(Default)]
struct Tables {
    vendors: Vec<Vendor>,
    foods: Vec<Food>,
    orders: Vec<Order>,
    offers: Vec<Offer>,
    transactions: Vec<Transaction>,
    delivery_users: Vec<DeliveryUser>,
}

#[derive(Clone, Default)]
pub struct InMemoryMarketplaceRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryMarketplaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Overwrite the record with a matching id, or report `missing`
fn replace<T: Clone>(
    rows: &mut [T],
    row: &T,
    same: impl Fn(&T) -> bool,
    missing: MarketplaceError,
) -> MarketplaceResult<()> {
    let slot = rows.iter_mut().find(|r| same(r)).ok_or(missing)?;
    *slot = row.clone();
    Ok(())
}

impl VendorRepository for InMemoryMarketplaceRepository {
    async fn create(&self, vendor: &Vendor) -> MarketplaceResult<()> {
        let mut tables = self.tables.write().await;
        if tables.vendors.iter().any(|v| v.email == vendor.email) {
            return Err(MarketplaceError::VendorEmailTaken);
        }
        tables.vendors.push(vendor.clone());
        Ok(())
    }

    async fn find_by_id(&self, vendor_id: &VendorId) -> MarketplaceResult<Option<Vendor>> {
        let tables = self.tables.read().await;
        Ok(tables.vendors.iter().find(|v| &v.id == vendor_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> MarketplaceResult<Option<Vendor>> {
        let tables = self.tables.read().await;
        Ok(tables.vendors.iter().find(|v| &v.email == email).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Vendor>> {
        Ok(self.tables.read().await.vendors.clone())
    }

    async fn update(&self, vendor: &Vendor) -> MarketplaceResult<()> {
        let mut tables = self.tables.write().await;
        replace(
            &mut tables.vendors,
            vendor,
            |v| v.id == vendor.id,
            MarketplaceError::VendorNotFound,
        )
    }
}

impl FoodRepository for InMemoryMarketplaceRepository {
    async fn create(&self, food: &Food) -> MarketplaceResult<()> {
        self.tables.write().await.foods.push(food.clone());
        Ok(())
    }

    async fn find_by_vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Food>> {
        let tables = self.tables.read().await;
        Ok(tables
            .foods
            .iter()
            .filter(|f| &f.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, food_ids: &[FoodId]) -> MarketplaceResult<Vec<Food>> {
        let tables = self.tables.read().await;
        Ok(tables
            .foods
            .iter()
            .filter(|f| food_ids.contains(&f.id))
            .cloned()
            .collect())
    }
}

impl OrderRepository for InMemoryMarketplaceRepository {
    async fn create(&self, order: &Order) -> MarketplaceResult<()> {
        self.tables.write().await.orders.push(order.clone());
        Ok(())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> MarketplaceResult<Option<Order>> {
        let tables = self.tables.read().await;
        Ok(tables.orders.iter().find(|o| &o.id == order_id).cloned())
    }

    async fn find_by_vendor(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<Order>> {
        let tables = self.tables.read().await;
        Ok(tables
            .orders
            .iter()
            .filter(|o| &o.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn update(&self, order: &Order) -> MarketplaceResult<()> {
        let mut tables = self.tables.write().await;
        replace(
            &mut tables.orders,
            order,
            |o| o.id == order.id,
            MarketplaceError::OrderNotFound,
        )
    }
}

impl OfferRepository for InMemoryMarketplaceRepository {
    async fn create(&self, offer: &Offer) -> MarketplaceResult<()> {
        self.tables.write().await.offers.push(offer.clone());
        Ok(())
    }

    async fn find_by_id(&self, offer_id: &OfferId) -> MarketplaceResult<Option<Offer>> {
        let tables = self.tables.read().await;
        Ok(tables.offers.iter().find(|o| &o.id == offer_id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Offer>> {
        Ok(self.tables.read().await.offers.clone())
    }

    async fn update(&self, offer: &Offer) -> MarketplaceResult<()> {
        let mut tables = self.tables.write().await;
        replace(
            &mut tables.offers,
            offer,
            |o| o.id == offer.id,
            MarketplaceError::OfferNotFound,
        )
    }
}

impl TransactionRepository for InMemoryMarketplaceRepository {
    async fn create(&self, transaction: &Transaction) -> MarketplaceResult<()> {
        self.tables.write().await.transactions.push(transaction.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        transaction_id: &TransactionId,
    ) -> MarketplaceResult<Option<Transaction>> {
        let tables = self.tables.read().await;
        Ok(tables
            .transactions
            .iter()
            .find(|t| &t.id == transaction_id)
            .cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<Transaction>> {
        Ok(self.tables.read().await.transactions.clone())
    }
}

impl DeliveryUserRepository for InMemoryMarketplaceRepository {
    async fn create(&self, user: &DeliveryUser) -> MarketplaceResult<()> {
        self.tables.write().await.delivery_users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &DeliveryUserId,
    ) -> MarketplaceResult<Option<DeliveryUser>> {
        let tables = self.tables.read().await;
        Ok(tables.delivery_users.iter().find(|u| &u.id == user_id).cloned())
    }

    async fn find_all(&self) -> MarketplaceResult<Vec<DeliveryUser>> {
        Ok(self.tables.read().await.delivery_users.clone())
    }

    async fn update(&self, user: &DeliveryUser) -> MarketplaceResult<()> {
        let mut tables = self.tables.write().await;
        replace(
            &mut tables.delivery_users,
            user,
            |u| u.id == user.id,
            MarketplaceError::DeliveryUserNotFound,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::order::OrderItem;
    use crate::domain::entity::vendor::VendorDetails;
    use auth::CredentialService;

    fn vendor(email: &str) -> Vendor {
        let credential = CredentialService::default()
            .create("vendor-password".to_string())
            .unwrap();
        Vendor::register(
            VendorDetails {
                name: "Dosa Corner".into(),
                owner_name: "Ravi".into(),
                food_type: vec!["veg".into()],
                pincode: "600001".into(),
                address: "4 Beach Road".into(),
                phone: "9000000000".into(),
            },
            Email::parse(email).unwrap(),
            credential,
        )
    }

    #[tokio::test]
    async fn test_vendor_email_is_unique() {
        let repo = InMemoryMarketplaceRepository::new();
        VendorRepository::create(&repo, &vendor("dosa@example.com"))
            .await
            .unwrap();

        let duplicate = VendorRepository::create(&repo, &vendor("dosa@example.com")).await;
        assert!(matches!(duplicate, Err(MarketplaceError::VendorEmailTaken)));
    }

    #[tokio::test]
    async fn test_vendor_lookup_and_update() {
        let repo = InMemoryMarketplaceRepository::new();
        let mut v = vendor("dosa@example.com");
        VendorRepository::create(&repo, &v).await.unwrap();

        let by_email = repo
            .find_by_email(&Email::parse("DOSA@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(by_email.map(|found| found.id), Some(v.id));

        v.toggle_service(None, None);
        VendorRepository::update(&repo, &v).await.unwrap();
        let stored = VendorRepository::find_by_id(&repo, &v.id).await.unwrap().unwrap();
        assert!(stored.service_available);
    }

    #[tokio::test]
    async fn test_update_unknown_vendor_fails() {
        let repo = InMemoryMarketplaceRepository::new();
        let result = VendorRepository::update(&repo, &vendor("ghost@example.com")).await;
        assert!(matches!(result, Err(MarketplaceError::VendorNotFound)));
    }

    #[tokio::test]
    async fn test_orders_filtered_by_vendor_in_insertion_order() {
        let repo = InMemoryMarketplaceRepository::new();
        let mine = VendorId::new();
        let theirs = VendorId::new();
        let item = vec![OrderItem { food: FoodId::new(), unit: 1 }];

        for (number, vendor_id) in [("A", mine), ("B", theirs), ("C", mine)] {
            OrderRepository::create(&repo, &Order::new(number, vendor_id, item.clone(), 10.0, 10.0))
                .await
                .unwrap();
        }

        let orders = OrderRepository::find_by_vendor(&repo, &mine).await.unwrap();
        let numbers: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(numbers, vec!["A", "C"]);
    }
}
