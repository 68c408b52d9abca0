//! Guest Profile Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_diet_type() -> String {
    "non-veg".to_string()
}

/// Preferences captured by the concierge wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Free-text preferences ("No Sugar", "Less oil"), kept as a set
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            moods: Vec::new(),
            goals: Vec::new(),
            diet_type: default_diet_type(),
            allergies: Vec::new(),
            notes: Vec::new(),
        }
    }
}

impl UserPreferences {
    /// Add a free-text note unless already present; returns whether it was added
    pub fn add_note(&mut self, note: &str) -> bool {
        if self.notes.iter().any(|n| n == note) {
            return false;
        }
        self.notes.push(note.to_string());
        true
    }
}

/// Guest profile entity, keyed by phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default = "default_visit_count")]
    pub visit_count: i64,
    pub last_visit: Option<DateTime<Utc>>,
}

fn default_visit_count() -> i64 {
    1
}

/// POST /api/users/check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCheck {
    pub phone: String,
}

/// POST /api/users/check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCheckResult {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// POST /api/users/login body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLogin {
    #[serde(default)]
    pub name: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

/// PUT /api/users/{id}/preferences body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPreference {
    #[serde(default)]
    pub preference: Option<String>,
}
