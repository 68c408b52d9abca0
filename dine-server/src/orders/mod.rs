//! Order Module
//!
//! - **consolidator**: merge-or-create placement, one active order per table
//! - **status**: line / aggregate status state machine
//! - **session**: table session view
//! - **money**: totals with GST and service charge (rust_decimal)
//! - **manager**: `OrdersManager` tying the above to an [`OrderStore`](crate::db::OrderStore)

pub mod consolidator;
pub mod error;
pub mod manager;
pub mod money;
pub mod session;
pub mod status;

// Re-exports
pub use error::{OrderError, OrderResult};
pub use manager::OrdersManager;
pub use money::{OrderTotals, compute_totals};

pub use shared::order::{Order, OrderLine, OrderStatus, StatusTarget, TableSession};
