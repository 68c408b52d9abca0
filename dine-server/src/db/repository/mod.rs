//! Repository Module
//!
//! SurrealDB implementations of the store traits in [`crate::db::store`].

pub mod menu_item;
pub mod order;
pub mod user;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use user::UserRepository;

use shared::error::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 记录 id = RecordId::from_table_key(TABLE, uuid.to_string())
// 文档内另存同一 UUID 的字符串字段，读取时从该字段还原业务 id，
// 不解析 RecordId 的 key (带 '-' 的 key 会被转义为 ⟨...⟩)。
// 写入的文档从不携带 `id` 字段。

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
