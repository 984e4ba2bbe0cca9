//! Order Entity
//!
//! Orders reference foods by id. `Order::populate` swaps the ids for the
//! food records, giving the shape vendors see.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::id::{FoodId, OrderId, VendorId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::food::Food;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "WAITING")]
    Waiting,
    #[serde(rename = "ACCEPT")]
    Accept,
    #[serde(rename = "REJECT")]
    Reject,
    #[serde(rename = "UNDER-PROCESS")]
    UnderProcess,
    #[serde(rename = "READY")]
    Ready,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "WAITING",
            OrderStatus::Accept => "ACCEPT",
            OrderStatus::Reject => "REJECT",
            OrderStatus::UnderProcess => "UNDER-PROCESS",
            OrderStatus::Ready => "READY",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(OrderStatus::Waiting),
            "ACCEPT" => Ok(OrderStatus::Accept),
            "REJECT" => Ok(OrderStatus::Reject),
            "UNDER-PROCESS" => Ok(OrderStatus::UnderProcess),
            "READY" => Ok(OrderStatus::Ready),
            other => Err(format!("Unknown order status: {other}")),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem<F = FoodId> {
    pub food: F,
    pub unit: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order<F = FoodId> {
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Customer-facing order number
    pub order_id: String,
    pub vendor_id: VendorId,
    pub items: Vec<OrderItem<F>>,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatus,
    pub remarks: String,
    pub delivery_id: String,
    /// Minutes until ready
    pub ready_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order with each item's food record in place of its id.
/// Items whose food no longer exists carry `null`.
pub type PopulatedOrder = Order<Option<Food>>;

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        vendor_id: VendorId,
        items: Vec<OrderItem>,
        total_amount: f64,
        paid_amount: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            order_id: order_id.into(),
            vendor_id,
            items,
            total_amount,
            paid_amount,
            order_date: now,
            order_status: OrderStatus::Waiting,
            remarks: String::new(),
            delivery_id: String::new(),
            ready_time: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn food_ids(&self) -> Vec<FoodId> {
        self.items.iter().map(|item| item.food).collect()
    }

    pub fn process(&mut self, status: OrderStatus, remarks: String, ready_time: Option<i32>) {
        self.order_status = status;
        self.remarks = remarks;
        if let Some(minutes) = ready_time {
            self.ready_time = minutes;
        }
        self.updated_at = Utc::now();
    }

    pub fn populate(self, foods: &[Food]) -> PopulatedOrder {
        let items = self
            .items
            .into_iter()
            .map(|item| OrderItem {
                food: foods.iter().find(|food| food.id == item.food).cloned(),
                unit: item.unit,
            })
            .collect();

        Order {
            id: self.id,
            order_id: self.order_id,
            vendor_id: self.vendor_id,
            items,
            total_amount: self.total_amount,
            paid_amount: self.paid_amount,
            order_date: self.order_date,
            order_status: self.order_status,
            remarks: self.remarks,
            delivery_id: self.delivery_id,
            ready_time: self.ready_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::UnderProcess).unwrap(),
            "UNDER-PROCESS"
        );
        for status in [
            OrderStatus::Waiting,
            OrderStatus::Accept,
            OrderStatus::Reject,
            OrderStatus::UnderProcess,
            OrderStatus::Ready,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("DELIVERED".parse::<OrderStatus>().is_err());
        assert!("ready".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_process_keeps_ready_time_when_absent() {
        let mut order = Order::new("ORD-1", VendorId::new(), Vec::new(), 200.0, 200.0);
        order.process(OrderStatus::Accept, "on it".into(), Some(25));
        assert_eq!(order.ready_time, 25);

        order.process(OrderStatus::Ready, "packed".into(), None);
        assert_eq!(order.order_status, OrderStatus::Ready);
        assert_eq!(order.remarks, "packed");
        assert_eq!(order.ready_time, 25);
    }

    #[test]
    fn test_populate_replaces_ids() {
        let vendor_id = VendorId::new();
        let food = Food::new(
            vendor_id,
            "Dal".into(),
            "Yellow lentils".into(),
            "mains".into(),
            "veg".into(),
            15,
            120.0,
        );
        let missing = FoodId::new();
        let order = Order::new(
            "ORD-2",
            vendor_id,
            vec![
                OrderItem { food: food.id, unit: 2 },
                OrderItem { food: missing, unit: 1 },
            ],
            240.0,
            240.0,
        );

        let populated = order.populate(std::slice::from_ref(&food));
        assert_eq!(populated.items[0].food.as_ref(), Some(&food));
        assert_eq!(populated.items[0].unit, 2);
        assert_eq!(populated.items[1].food, None);

        let json = serde_json::to_value(&populated).unwrap();
        assert_eq!(json["items"][0]["food"]["name"], "Dal");
        assert_eq!(json["orderStatus"], "WAITING");
    }
}
