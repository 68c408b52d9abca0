//! Store traits
//!
//! `ServerState` 只持有 `Arc<dyn ...Store>`，生产环境注入 SurrealDB 仓储，
//! 测试注入 [`crate::db::memory`] 中的内存实现。

use async_trait::async_trait;
use shared::models::{MenuItem, User};
use shared::order::Order;
use uuid::Uuid;

use super::repository::RepoResult;

/// Order persistence
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Most recently created order of the table that is neither paid nor cancelled
    async fn find_active_for_table(&self, table_id: i64) -> RepoResult<Option<Order>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>>;

    /// All orders in creation order, optionally filtered by exact status string
    async fn find_all(&self, status: Option<&str>) -> RepoResult<Vec<Order>>;

    async fn insert(&self, order: Order) -> RepoResult<Order>;

    /// Replace an existing order document (`NotFound` if absent)
    async fn replace(&self, order: Order) -> RepoResult<Order>;

    /// Mark every non-paid order of the table as paid, returns the number changed
    async fn settle_table(&self, table_id: i64) -> RepoResult<u64>;
}

/// Menu catalog persistence
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn count(&self) -> RepoResult<u64>;

    async fn find_all(&self) -> RepoResult<Vec<MenuItem>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MenuItem>>;

    async fn insert(&self, item: MenuItem) -> RepoResult<MenuItem>;

    async fn insert_many(&self, items: Vec<MenuItem>) -> RepoResult<usize>;

    /// Replace an existing item (`NotFound` if absent)
    async fn replace(&self, item: MenuItem) -> RepoResult<MenuItem>;

    /// Returns whether an item was removed
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

/// Guest profile persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>>;

    async fn insert(&self, user: User) -> RepoResult<User>;

    /// Replace an existing profile (`NotFound` if absent)
    async fn replace(&self, user: User) -> RepoResult<User>;
}
