//! Order document as stored and returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{LineStatus, OrderStatus, OrderType};
use crate::serde_helpers::null_as_default;

/// One item entry within an order
///
/// `price` is the unit price captured when the guest ordered, not the live
/// menu price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item reference (rows created before it existed lack it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: LineStatus,
}

impl OrderLine {
    /// Create a pending line with no notes and no menu reference
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            menu_item_id: None,
            name: name.into(),
            price,
            quantity,
            notes: String::new(),
            status: LineStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: LineStatus) -> Self {
        self.status = status;
        self
    }
}

/// A table's order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub table_id: i64,
    pub items: Vec<OrderLine>,
    pub guest_name: Option<String>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub order_type: OrderType,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
