//! Order data contracts
//!
//! - **types**: aggregate / line status enums, order type, status targets
//! - **snapshot**: the `Order` document and its `OrderLine`s
//! - **request**: HTTP payloads for orders, sessions and settlement

pub mod request;
pub mod snapshot;
pub mod types;

// Re-exports
pub use request::{OrderListQuery, PlaceOrderRequest, SettleResult, StatusQuery, TableSession};
pub use snapshot::{Order, OrderLine};
pub use types::{LineStatus, OrderStatus, OrderType, StatusTarget};
