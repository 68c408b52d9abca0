//! Request / response payloads for the order and table endpoints

use serde::{Deserialize, Serialize};

use super::snapshot::OrderLine;
use super::types::{OrderStatus, OrderType};

/// POST /api/orders body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub table_id: i64,
    #[serde(default)]
    pub guest_name: Option<String>,
    pub items: Vec<OrderLine>,
    /// Client-side total, only honoured when a new order is created
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
}

/// GET /api/orders query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
}

/// PATCH /api/orders/{id}/status query
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// GET /api/tables/{id}/session response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSession {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl TableSession {
    /// Table is free
    pub fn inactive() -> Self {
        Self {
            active: false,
            guest_name: None,
            table_id: None,
            order_id: None,
            status: None,
        }
    }
}

/// POST /api/tables/{id}/settle response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettleResult {
    pub status: String,
    pub count: u64,
}

impl SettleResult {
    pub fn cleared(count: u64) -> Self {
        Self {
            status: "cleared".to_string(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_request_minimal() {
        let req: PlaceOrderRequest = serde_json::from_str(
            r#"{"tableId": 4, "items": [{"name": "Fresh Lime Soda", "price": 80, "quantity": 2}]}"#,
        )
        .unwrap();
        assert_eq!(req.table_id, 4);
        assert_eq!(req.guest_name, None);
        assert_eq!(req.total_amount, None);
        assert_eq!(req.order_type, None);
        assert_eq!(req.items.len(), 1);
    }

    #[test]
    fn test_place_order_request_requires_table() {
        let res = serde_json::from_str::<PlaceOrderRequest>(r#"{"items": []}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_inactive_session_serializes_flag_only() {
        let json = serde_json::to_value(TableSession::inactive()).unwrap();
        assert_eq!(json, serde_json::json!({"active": false}));
    }
}
