//! In-memory store implementations
//!
//! Same semantics as the SurrealDB repositories, nothing persists across
//! restarts. Used by the test suites and for throwaway runs.

use async_trait::async_trait;
use shared::models::{MenuItem, User};
use shared::order::{Order, OrderStatus};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repository::{RepoError, RepoResult};
use super::store::{MenuStore, OrderStore, UserStore};

/// Orders kept in insertion order
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_active_for_table(&self, table_id: i64) -> RepoResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.table_id == table_id && o.is_active())
            .max_by_key(|o| o.created_at)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_all(&self, status: Option<&str>) -> RepoResult<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut found: Vec<Order> = orders
            .iter()
            .filter(|o| status.is_none_or(|s| o.status.as_str() == s))
            .cloned()
            .collect();
        found.sort_by_key(|o| o.created_at);
        Ok(found)
    }

    async fn insert(&self, order: Order) -> RepoResult<Order> {
        let mut orders = self.orders.write().await;
        if orders.iter().any(|o| o.id == order.id) {
            return Err(RepoError::Database(format!("Order {} already exists", order.id)));
        }
        orders.push(order.clone());
        Ok(order)
    }

    async fn replace(&self, order: Order) -> RepoResult<Order> {
        let mut orders = self.orders.write().await;
        let slot = orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order.id)))?;
        *slot = order.clone();
        Ok(order)
    }

    async fn settle_table(&self, table_id: i64) -> RepoResult<u64> {
        let mut orders = self.orders.write().await;
        let mut count = 0;
        for order in orders
            .iter_mut()
            .filter(|o| o.table_id == table_id && o.status != OrderStatus::Paid)
        {
            order.status = OrderStatus::Paid;
            count += 1;
        }
        Ok(count)
    }
}

/// Menu items
#[derive(Default)]
pub struct MemoryMenuStore {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuStore for MemoryMenuStore {
    async fn count(&self) -> RepoResult<u64> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MenuItem>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.id == item.id) {
            return Err(RepoError::Database(format!("Menu item {} already exists", item.id)));
        }
        items.push(item.clone());
        Ok(item)
    }

    async fn insert_many(&self, new_items: Vec<MenuItem>) -> RepoResult<usize> {
        let mut inserted = 0;
        for item in new_items {
            self.insert(item).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn replace(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", item.id)))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() != before)
    }
}

/// Guest profiles
#[derive(Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.phone == phone).cloned())
    }

    async fn insert(&self, user: User) -> RepoResult<User> {
        let mut users = self.users.write().await;
        users.push(user.clone());
        Ok(user)
    }

    async fn replace(&self, user: User) -> RepoResult<User> {
        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", user.id)))?;
        *slot = user.clone();
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use shared::order::{OrderLine, OrderType};

    fn order(table_id: i64, status: OrderStatus, age_secs: i64) -> Order {
        Order {
            id: Uuid::new_v4(),
            table_id,
            items: vec![OrderLine::new("Chai", 30.0, 1)],
            guest_name: None,
            status,
            total_amount: 30.0,
            created_at: Utc::now() - Duration::seconds(age_secs),
            order_type: OrderType::Food,
        }
    }

    #[tokio::test]
    async fn test_active_lookup_prefers_most_recent() {
        let store = MemoryOrderStore::new();
        let old = store.insert(order(5, OrderStatus::Placed, 60)).await.unwrap();
        let new = store.insert(order(5, OrderStatus::Served, 5)).await.unwrap();
        store.insert(order(5, OrderStatus::Paid, 0)).await.unwrap();
        store.insert(order(6, OrderStatus::Placed, 0)).await.unwrap();

        let active = store.find_active_for_table(5).await.unwrap().unwrap();
        assert_eq!(active.id, new.id);
        assert_ne!(active.id, old.id);
        assert!(store.find_active_for_table(9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_settle_counts_every_non_paid_order() {
        let store = MemoryOrderStore::new();
        store.insert(order(2, OrderStatus::Placed, 30)).await.unwrap();
        store.insert(order(2, OrderStatus::Cancelled, 20)).await.unwrap();
        store.insert(order(2, OrderStatus::Paid, 10)).await.unwrap();
        store.insert(order(3, OrderStatus::Ready, 10)).await.unwrap();

        assert_eq!(store.settle_table(2).await.unwrap(), 2);
        assert_eq!(store.settle_table(2).await.unwrap(), 0);
        assert_eq!(store.find_all(Some("paid")).await.unwrap().len(), 3);
        assert_eq!(store.find_all(Some("ready")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_filters_exact_status() {
        let store = MemoryOrderStore::new();
        store.insert(order(1, OrderStatus::Placed, 10)).await.unwrap();
        store.insert(order(1, OrderStatus::Ready, 5)).await.unwrap();

        assert_eq!(store.find_all(None).await.unwrap().len(), 2);
        assert_eq!(store.find_all(Some("placed")).await.unwrap().len(), 1);
        assert!(store.find_all(Some("Placed")).await.unwrap().is_empty());
        assert!(store.find_all(Some("bogus")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let store = MemoryOrderStore::new();
        let res = store.replace(order(1, OrderStatus::Placed, 0)).await;
        assert!(matches!(res, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_menu_delete_reports_removal() {
        let store = MemoryMenuStore::new();
        let item: MenuItem = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "Kerala Parotta",
            "price": 40.0,
            "category": "Breads",
        }))
        .unwrap();
        let id = item.id;
        store.insert(item).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
