//! Order Repository

use async_trait::async_trait;
use shared::order::Order;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::OrderRecord;
use crate::db::store::OrderStore;

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn record_id(id: Uuid) -> RecordId {
        RecordId::from_table_key(TABLE, id.to_string())
    }

    fn into_orders(records: Vec<OrderRecord>) -> RepoResult<Vec<Order>> {
        records.into_iter().map(Order::try_from).collect()
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_active_for_table(&self, table_id: i64) -> RepoResult<Option<Order>> {
        let records: Vec<OrderRecord> = self
            .base
            .db()
            .query(
                "SELECT * FROM orders WHERE table_id = $table_id \
                 AND status != 'paid' AND status != 'cancelled' \
                 ORDER BY created_at DESC LIMIT 1",
            )
            .bind(("table_id", table_id))
            .await?
            .take(0)?;
        records.into_iter().next().map(Order::try_from).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
        let record: Option<OrderRecord> = self.base.db().select(Self::record_id(id)).await?;
        record.map(Order::try_from).transpose()
    }

    async fn find_all(&self, status: Option<&str>) -> RepoResult<Vec<Order>> {
        let records: Vec<OrderRecord> = match status {
            Some(status) => self
                .base
                .db()
                .query("SELECT * FROM orders WHERE status = $status ORDER BY created_at ASC")
                .bind(("status", status.to_string()))
                .await?
                .take(0)?,
            None => self
                .base
                .db()
                .query("SELECT * FROM orders ORDER BY created_at ASC")
                .await?
                .take(0)?,
        };
        Self::into_orders(records)
    }

    async fn insert(&self, order: Order) -> RepoResult<Order> {
        let created: Option<OrderRecord> = self
            .base
            .db()
            .create(Self::record_id(order.id))
            .content(OrderRecord::from(&order))
            .await?;
        created
            .ok_or_else(|| RepoError::Database(format!("Failed to create order {}", order.id)))?;
        Ok(order)
    }

    async fn replace(&self, order: Order) -> RepoResult<Order> {
        if self.find_by_id(order.id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", order.id)));
        }
        let updated: Option<OrderRecord> = self
            .base
            .db()
            .update(Self::record_id(order.id))
            .content(OrderRecord::from(&order))
            .await?;
        updated.ok_or_else(|| RepoError::Database(format!("Failed to update order {}", order.id)))?;
        Ok(order)
    }

    async fn settle_table(&self, table_id: i64) -> RepoResult<u64> {
        let settled: Vec<OrderRecord> = self
            .base
            .db()
            .query(
                "UPDATE orders SET status = 'paid' \
                 WHERE table_id = $table_id AND status != 'paid' RETURN AFTER",
            )
            .bind(("table_id", table_id))
            .await?
            .take(0)?;
        Ok(settled.len() as u64)
    }
}
