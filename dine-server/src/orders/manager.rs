//! OrdersManager - order service over an injected [`OrderStore`]

use chrono::Utc;
use shared::order::{LineStatus, Order, PlaceOrderRequest, StatusTarget, TableSession};
use std::sync::Arc;
use uuid::Uuid;

use super::consolidator;
use super::error::{OrderError, OrderResult};
use super::session::session_for;
use super::status::{apply_target, derive_aggregate};
use crate::db::store::OrderStore;

#[derive(Clone)]
pub struct OrdersManager {
    store: Arc<dyn OrderStore>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager").finish_non_exhaustive()
    }
}

impl OrdersManager {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Merge into the table's active order or open a new one
    pub async fn place_order(&self, req: PlaceOrderRequest) -> OrderResult<Order> {
        consolidator::validate_request(&req)?;
        let table_id = req.table_id;
        let added = req.items.len();

        match self.store.find_active_for_table(table_id).await? {
            Some(existing) => {
                let merged = consolidator::merge_into(existing, req);
                let order = self.store.replace(merged).await?;
                tracing::info!(
                    table_id,
                    order_id = %order.id,
                    added,
                    lines = order.items.len(),
                    total = order.total_amount,
                    "Merged items into active order"
                );
                Ok(order)
            }
            None => {
                let order = self
                    .store
                    .insert(consolidator::new_order(req, Utc::now()))
                    .await?;
                tracing::info!(
                    table_id,
                    order_id = %order.id,
                    lines = added,
                    total = order.total_amount,
                    "Created order"
                );
                Ok(order)
            }
        }
    }

    pub async fn get_order(&self, id: Uuid) -> OrderResult<Order> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// All orders, optionally filtered by exact status string
    ///
    /// 空白的 status 视为未过滤 (`?status=`)
    pub async fn list_orders(&self, status: Option<&str>) -> OrderResult<Vec<Order>> {
        let status = status.map(str::trim).filter(|s| !s.is_empty());
        Ok(self.store.find_all(status).await?)
    }

    /// Move lines toward `target` and recompute the aggregate status
    pub async fn advance_status(&self, id: Uuid, target: StatusTarget) -> OrderResult<Order> {
        let mut order = self.get_order(id).await?;
        let from = order.status;
        let changed = apply_target(&mut order.items, &target);
        order.status = derive_aggregate(&order.items);

        if matches!(target, StatusTarget::Served)
            && order
                .items
                .iter()
                .any(|l| l.status == LineStatus::Pending)
        {
            tracing::debug!(
                order_id = %id,
                "Serve requested while lines are still pending, pending lines left as-is"
            );
        }

        let order = self.store.replace(order).await?;
        tracing::debug!(
            order_id = %id,
            target = %target,
            changed,
            from = %from,
            to = %order.status,
            "Order status advanced"
        );
        Ok(order)
    }

    /// Close out a table: every non-paid order becomes paid
    pub async fn settle_table(&self, table_id: i64) -> OrderResult<u64> {
        let count = self.store.settle_table(table_id).await?;
        tracing::info!(table_id, count, "Table settled");
        Ok(count)
    }

    /// Most recent active order of the table, if any
    pub async fn get_session(&self, table_id: i64) -> OrderResult<TableSession> {
        let active = self.store.find_active_for_table(table_id).await?;
        Ok(session_for(active.as_ref()))
    }
}
