//! Guest Profile Repository

use async_trait::async_trait;
use shared::models::User;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::UserRecord;
use crate::db::store::UserStore;

const TABLE: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
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
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let record: Option<UserRecord> = self.base.db().select(Self::record_id(id)).await?;
        record.map(User::try_from).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>> {
        let records: Vec<UserRecord> = self
            .base
            .db()
            .query("SELECT * FROM users WHERE phone = $phone LIMIT 1")
            .bind(("phone", phone.to_string()))
            .await?
            .take(0)?;
        records.into_iter().next().map(User::try_from).transpose()
    }

    async fn insert(&self, user: User) -> RepoResult<User> {
        let created: Option<UserRecord> = self
            .base
            .db()
            .create(Self::record_id(user.id))
            .content(UserRecord::from(&user))
            .await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create user {}", user.id)))?;
        Ok(user)
    }

    async fn replace(&self, user: User) -> RepoResult<User> {
        if self.find_by_id(user.id).await?.is_none() {
            return Err(RepoError::NotFound(format!("User {} not found", user.id)));
        }
        let updated: Option<UserRecord> = self
            .base
            .db()
            .update(Self::record_id(user.id))
            .content(UserRecord::from(&user))
            .await?;
        updated.ok_or_else(|| RepoError::Database(format!("Failed to update user {}", user.id)))?;
        Ok(user)
    }
}
