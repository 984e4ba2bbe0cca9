//! Vendor Orders Use Case
//!
//! Orders belong to one vendor; another vendor's order reads as absent.

use std::sync::Arc;

use kernel::id::{OrderId, VendorId};

use crate::domain::entity::order::{Order, OrderStatus, PopulatedOrder};
use crate::domain::repository::{FoodRepository, OrderRepository};
use crate::error::{MarketplaceError, MarketplaceResult};

/// Process order input
pub struct ProcessOrderInput {
    pub status: String,
    pub remarks: Option<String>,
    /// Minutes until ready; keeps the current value when absent
    pub time: Option<i32>,
}

pub struct VendorOrdersUseCase<O, F>
where
    O: OrderRepository,
    F: FoodRepository,
{
    order_repo: Arc<O>,
    food_repo: Arc<F>,
}

impl<O, F> VendorOrdersUseCase<O, F>
where
    O: OrderRepository,
    F: FoodRepository,
{
    pub fn new(order_repo: Arc<O>, food_repo: Arc<F>) -> Self {
        Self {
            order_repo,
            food_repo,
        }
    }

    pub async fn list(&self, vendor_id: &VendorId) -> MarketplaceResult<Vec<PopulatedOrder>> {
        let orders = self.order_repo.find_by_vendor(vendor_id).await?;

        let mut food_ids: Vec<_> = orders.iter().flat_map(|o| o.food_ids()).collect();
        food_ids.sort_by_key(|id| *id.as_uuid());
        food_ids.dedup();
        let foods = self.food_repo.find_by_ids(&food_ids).await?;

        Ok(orders.into_iter().map(|o| o.populate(&foods)).collect())
    }

    pub async fn details(
        &self,
        vendor_id: &VendorId,
        order_id: &OrderId,
    ) -> MarketplaceResult<PopulatedOrder> {
        let order = self.owned_order(vendor_id, order_id).await?;
        let foods = self.food_repo.find_by_ids(&order.food_ids()).await?;
        Ok(order.populate(&foods))
    }

    pub async fn process(
        &self,
        vendor_id: &VendorId,
        order_id: &OrderId,
        input: ProcessOrderInput,
    ) -> MarketplaceResult<Order> {
        let status = input
            .status
            .parse::<OrderStatus>()
            .map_err(MarketplaceError::Validation)?;
        if input.time.is_some_and(|minutes| minutes < 0) {
            return Err(MarketplaceError::validation("time must not be negative"));
        }

        let mut order = self.owned_order(vendor_id, order_id).await?;
        order.process(status, input.remarks.unwrap_or_default(), input.time);
        self.order_repo.update(&order).await?;

        tracing::info!(
            vendor_id = %vendor_id,
            order_id = %order.id,
            status = %order.order_status,
            "Order processed"
        );

        Ok(order)
    }

    async fn owned_order(
        &self,
        vendor_id: &VendorId,
        order_id: &OrderId,
    ) -> MarketplaceResult<Order> {
        self.order_repo
            .find_by_id(order_id)
            .await?
            .filter(|order| &order.vendor_id == vendor_id)
            .ok_or(MarketplaceError::OrderNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::food::Food;
    use crate::domain::entity::order::OrderItem;
    use crate::infra::InMemoryMarketplaceRepository;

    struct Fixture {
        orders: VendorOrdersUseCase<InMemoryMarketplaceRepository, InMemoryMarketplaceRepository>,
        vendor_id: VendorId,
        order_id: OrderId,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryMarketplaceRepository::new());
        let vendor_id = VendorId::new();
        let food = Food::new(
            vendor_id,
            "Idli".into(),
            "Steamed rice cakes".into(),
            "breakfast".into(),
            "veg".into(),
            10,
            60.0,
        );
        FoodRepository::create(repo.as_ref(), &food).await.unwrap();

        let order = Order::new(
            "ORD-100",
            vendor_id,
            vec![OrderItem { food: food.id, unit: 3 }],
            180.0,
            180.0,
        );
        OrderRepository::create(repo.as_ref(), &order).await.unwrap();

        Fixture {
            orders: VendorOrdersUseCase::new(repo.clone(), repo),
            vendor_id,
            order_id: order.id,
        }
    }

    fn process(status: &str, time: Option<i32>) -> ProcessOrderInput {
        ProcessOrderInput {
            status: status.into(),
            remarks: Some("noted".into()),
            time,
        }
    }

    #[tokio::test]
    async fn test_list_populates_foods() {
        let fx = fixture().await;
        let orders = fx.orders.list(&fx.vendor_id).await.unwrap();

        assert_eq!(orders.len(), 1);
        let food = orders[0].items[0].food.as_ref().unwrap();
        assert_eq!(food.name, "Idli");
        assert_eq!(orders[0].items[0].unit, 3);
    }

    #[tokio::test]
    async fn test_other_vendor_cannot_see_order() {
        let fx = fixture().await;
        let result = fx.orders.details(&VendorId::new(), &fx.order_id).await;
        assert!(matches!(result, Err(MarketplaceError::OrderNotFound)));

        let result = fx
            .orders
            .process(&VendorId::new(), &fx.order_id, process("ACCEPT", None))
            .await;
        assert!(matches!(result, Err(MarketplaceError::OrderNotFound)));
    }

    #[tokio::test]
    async fn test_process_updates_status() {
        let fx = fixture().await;
        let order = fx
            .orders
            .process(&fx.vendor_id, &fx.order_id, process("UNDER-PROCESS", Some(15)))
            .await
            .unwrap();
        assert_eq!(order.order_status, OrderStatus::UnderProcess);
        assert_eq!(order.ready_time, 15);

        let details = fx.orders.details(&fx.vendor_id, &fx.order_id).await.unwrap();
        assert_eq!(details.order_status, OrderStatus::UnderProcess);
        assert_eq!(details.remarks, "noted");
    }

    #[tokio::test]
    async fn test_unknown_status_rejected() {
        let fx = fixture().await;
        let result = fx
            .orders
            .process(&fx.vendor_id, &fx.order_id, process("DELIVERED", None))
            .await;
        assert!(matches!(result, Err(MarketplaceError::Validation(_))));

        let details = fx.orders.details(&fx.vendor_id, &fx.order_id).await.unwrap();
        assert_eq!(details.order_status, OrderStatus::Waiting);
    }
}
