//! Catalog and guest models
//!
//! Plain CRUD collaborators of the ordering core.

pub mod menu_item;
pub mod user;

// Re-exports
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemDeleted, MenuItemUpdate};
pub use user::{AddPreference, User, UserCheck, UserCheckResult, UserLogin, UserPreferences};
