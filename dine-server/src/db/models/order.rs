//! Order Record

use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderLine, OrderStatus, OrderType};

use super::{format_timestamp, parse_key, parse_timestamp};
use crate::db::repository::RepoError;

/// Order document (orders 表)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub table_id: i64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub guest_name: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    pub created_at: String,
    #[serde(default)]
    pub order_type: OrderType,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.to_string(),
            table_id: order.table_id,
            items: order.items.clone(),
            guest_name: order.guest_name.clone(),
            status: order.status,
            total_amount: order.total_amount,
            created_at: format_timestamp(&order.created_at),
            order_type: order.order_type,
        }
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = RepoError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Ok(Order {
            id: parse_key(&record.order_id)?,
            table_id: record.table_id,
            items: record.items,
            guest_name: record.guest_name,
            status: record.status,
            total_amount: record.total_amount,
            created_at: parse_timestamp(&record.created_at)?,
            order_type: record.order_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_record_conversion_keeps_order() {
        let order = Order {
            id: Uuid::new_v4(),
            table_id: 3,
            items: vec![OrderLine::new("Appam", 25.0, 4)],
            guest_name: None,
            status: OrderStatus::Ready,
            total_amount: 107.5,
            created_at: Utc::now(),
            order_type: OrderType::Request,
        };
        let record = OrderRecord::from(&order);
        assert_eq!(record.order_id, order.id.to_string());
        let back = Order::try_from(record).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_legacy_record_defaults() {
        let record: OrderRecord = serde_json::from_value(serde_json::json!({
            "order_id": Uuid::nil().to_string(),
            "table_id": 1,
            "items": [{"name": "Tea", "price": 20.0, "quantity": 1}],
            "status": "placed",
            "created_at": "2024-05-01T10:00:00.000000Z",
        }))
        .unwrap();
        assert_eq!(record.order_type, OrderType::Food);
        assert_eq!(record.total_amount, 0.0);
        let order = Order::try_from(record).unwrap();
        assert_eq!(order.items[0].notes, "");
    }
}
