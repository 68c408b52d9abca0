//! Guest Profile Record

use serde::{Deserialize, Serialize};
use shared::models::{User, UserPreferences};

use super::{format_timestamp, parse_key, parse_timestamp};
use crate::db::repository::RepoError;

/// Guest profile document (users 表)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub visit_count: i64,
    #[serde(default)]
    pub last_visit: Option<String>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            preferences: user.preferences.clone(),
            visit_count: user.visit_count,
            last_visit: user.last_visit.as_ref().map(format_timestamp),
        }
    }
}

impl TryFrom<UserRecord> for User {
    type Error = RepoError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let last_visit = record
            .last_visit
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        Ok(User {
            id: parse_key(&record.user_id)?,
            name: record.name,
            phone: record.phone,
            preferences: record.preferences,
            visit_count: record.visit_count,
            last_visit,
        })
    }
}
