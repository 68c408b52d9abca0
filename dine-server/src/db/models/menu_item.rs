//! Menu Item Record

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;

use super::parse_key;
use crate::db::repository::RepoError;

/// Menu item document (menu 表)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub spice_level: Option<String>,
    #[serde(
        default = "shared::serde_helpers::default_true",
        deserialize_with = "shared::serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default)]
    pub dietary_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hero_ingredient: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub prep_time: Option<i32>,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl From<&MenuItem> for MenuItemRecord {
    fn from(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category.clone(),
            image: item.image.clone(),
            spice_level: item.spice_level.clone(),
            is_available: item.is_available,
            dietary_type: item.dietary_type.clone(),
            tags: item.tags.clone(),
            hero_ingredient: item.hero_ingredient.clone(),
            allergens: item.allergens.clone(),
            prep_time: item.prep_time,
            calories: item.calories,
            stock: item.stock,
            rating: item.rating,
        }
    }
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = RepoError;

    fn try_from(record: MenuItemRecord) -> Result<Self, Self::Error> {
        Ok(MenuItem {
            id: parse_key(&record.item_id)?,
            name: record.name,
            description: record.description,
            price: record.price,
            category: record.category,
            image: record.image,
            spice_level: record.spice_level,
            is_available: record.is_available,
            dietary_type: record.dietary_type,
            tags: record.tags,
            hero_ingredient: record.hero_ingredient,
            allergens: record.allergens,
            prep_time: record.prep_time,
            calories: record.calories,
            stock: record.stock,
            rating: record.rating,
        })
    }
}
