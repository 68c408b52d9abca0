//! Database Module
//!
//! 嵌入式 SurrealDB (RocksDB 持久化 / 内存引擎) 以及各 store 的实现

pub mod memory;
pub mod models;
pub mod repository;
pub mod seed;
pub mod store;

pub use store::{MenuStore, OrderStore, UserStore};

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "dine";
const DATABASE: &str = "dine";

/// `DATABASE_PATH` value selecting the in-memory engine
pub const MEMORY_PATH: &str = "memory";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database at `db_path` (`"memory"` for an ephemeral engine)
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = if db_path == MEMORY_PATH {
            Surreal::new::<Mem>(())
                .await
                .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?
        } else {
            if let Some(parent) = Path::new(db_path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!("Failed to create database directory: {e}"))
                })?;
            }
            Surreal::new::<RocksDb>(db_path)
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
        };

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB embedded)");

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::OrderRepository;
    use shared::order::{Order, OrderLine, OrderStatus, OrderType};

    #[tokio::test]
    async fn test_rocksdb_creates_parent_dir_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dine.db");
        let path = path.to_str().unwrap().to_string();

        let service = DbService::new(&path).await.unwrap();
        let repo = OrderRepository::new(service.db.clone());
        let order = Order {
            id: uuid::Uuid::new_v4(),
            table_id: 12,
            items: vec![OrderLine::new("Beef Fry", 380.0, 1)],
            guest_name: Some("Joseph".to_string()),
            status: OrderStatus::Placed,
            total_amount: 408.5,
            created_at: chrono::Utc::now(),
            order_type: OrderType::Food,
        };
        repo.insert(order.clone()).await.unwrap();

        let active = repo.find_active_for_table(12).await.unwrap().unwrap();
        assert_eq!(active.id, order.id);
        assert_eq!(active.items, order.items);
        assert!(dir.path().join("nested").exists());

        assert_eq!(repo.settle_table(12).await.unwrap(), 1);
        assert!(repo.find_active_for_table(12).await.unwrap().is_none());
    }
}
