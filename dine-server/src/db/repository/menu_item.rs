//! Menu Item Repository

use async_trait::async_trait;
use serde::Deserialize;
use shared::models::MenuItem;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::MenuItemRecord;
use crate::db::store::MenuStore;

const TABLE: &str = "menu";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn record_id(id: Uuid) -> RecordId {
        RecordId::from_table_key(TABLE, id.to_string())
    }
}

#[async_trait]
impl MenuStore for MenuItemRepository {
    async fn count(&self) -> RepoResult<u64> {
        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM menu GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let records: Vec<MenuItemRecord> = self
            .base
            .db()
            .query("SELECT * FROM menu ORDER BY name")
            .await?
            .take(0)?;
        records.into_iter().map(MenuItem::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MenuItem>> {
        let record: Option<MenuItemRecord> = self.base.db().select(Self::record_id(id)).await?;
        record.map(MenuItem::try_from).transpose()
    }

    async fn insert(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let created: Option<MenuItemRecord> = self
            .base
            .db()
            .create(Self::record_id(item.id))
            .content(MenuItemRecord::from(&item))
            .await?;
        created.ok_or_else(|| {
            RepoError::Database(format!("Failed to create menu item '{}'", item.name))
        })?;
        Ok(item)
    }

    async fn insert_many(&self, items: Vec<MenuItem>) -> RepoResult<usize> {
        let mut inserted = 0;
        for item in items {
            self.insert(item).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn replace(&self, item: MenuItem) -> RepoResult<MenuItem> {
        if self.find_by_id(item.id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", item.id)));
        }
        let updated: Option<MenuItemRecord> = self
            .base
            .db()
            .update(Self::record_id(item.id))
            .content(MenuItemRecord::from(&item))
            .await?;
        updated.ok_or_else(|| {
            RepoError::Database(format!("Failed to update menu item {}", item.id))
        })?;
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let deleted: Option<MenuItemRecord> = self.base.db().delete(Self::record_id(id)).await?;
        Ok(deleted.is_some())
    }
}
