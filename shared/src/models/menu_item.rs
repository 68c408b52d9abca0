//! Menu Item Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde_helpers::{bool_true, default_true};

fn default_dietary_type() -> Option<String> {
    Some("veg".to_string())
}

/// Menu item entity (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub spice_level: Option<String>,
    #[serde(default = "default_true", deserialize_with = "bool_true")]
    pub is_available: bool,
    #[serde(default = "default_dietary_type")]
    pub dietary_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub hero_ingredient: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub prep_time: Option<i32>,
    pub calories: Option<i32>,
    pub stock: Option<i32>,
    pub rating: Option<f64>,
}

impl MenuItem {
    /// Materialize a create payload under a freshly assigned id
    pub fn from_create(id: Uuid, data: MenuItemCreate) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            image: data.image,
            spice_level: data.spice_level,
            is_available: data.is_available,
            dietary_type: data.dietary_type,
            tags: data.tags,
            hero_ingredient: data.hero_ingredient,
            allergens: data.allergens,
            prep_time: data.prep_time,
            calories: data.calories,
            stock: data.stock,
            rating: data.rating,
        }
    }

    /// Apply the fields present in a partial update
    pub fn apply(&mut self, data: MenuItemUpdate) {
        if let Some(v) = data.name {
            self.name = v;
        }
        if let Some(v) = data.description {
            self.description = Some(v);
        }
        if let Some(v) = data.price {
            self.price = v;
        }
        if let Some(v) = data.category {
            self.category = v;
        }
        if let Some(v) = data.image {
            self.image = Some(v);
        }
        if let Some(v) = data.spice_level {
            self.spice_level = Some(v);
        }
        if let Some(v) = data.is_available {
            self.is_available = v;
        }
        if let Some(v) = data.dietary_type {
            self.dietary_type = Some(v);
        }
        if let Some(v) = data.tags {
            self.tags = v;
        }
        if let Some(v) = data.hero_ingredient {
            self.hero_ingredient = Some(v);
        }
        if let Some(v) = data.allergens {
            self.allergens = v;
        }
        if let Some(v) = data.prep_time {
            self.prep_time = Some(v);
        }
        if let Some(v) = data.calories {
            self.calories = Some(v);
        }
        if let Some(v) = data.stock {
            self.stock = Some(v);
        }
        if let Some(v) = data.rating {
            self.rating = Some(v);
        }
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub spice_level: Option<String>,
    #[serde(default = "default_true", deserialize_with = "bool_true")]
    pub is_available: bool,
    #[serde(default = "default_dietary_type")]
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

/// Update menu item payload (only present fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_ingredient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// DELETE /api/menu/{id} response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemDeleted {
    pub status: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let data: MenuItemCreate = serde_json::from_str(
            r#"{"name": "Masala Chai", "price": 30, "category": "Beverages"}"#,
        )
        .unwrap();
        assert!(data.is_available);
        assert_eq!(data.dietary_type.as_deref(), Some("veg"));
        assert!(data.tags.is_empty());
    }

    #[test]
    fn test_apply_partial_update() {
        let data: MenuItemCreate = serde_json::from_str(
            r#"{"name": "Beef Fry", "price": 380, "category": "Mains", "stock": 15}"#,
        )
        .unwrap();
        let mut item = MenuItem::from_create(Uuid::nil(), data);

        item.apply(MenuItemUpdate {
            price: Some(400.0),
            is_available: Some(false),
            ..Default::default()
        });

        assert_eq!(item.price, 400.0);
        assert!(!item.is_available);
        assert_eq!(item.name, "Beef Fry");
        assert_eq!(item.stock, Some(15));
    }

    #[test]
    fn test_wire_format_camel_case() {
        let data: MenuItemCreate = serde_json::from_str(
            r#"{"name": "Gobi Manchurian", "price": 240, "category": "Starters", "spiceLevel": "medium", "prepTime": 20}"#,
        )
        .unwrap();
        let item = MenuItem::from_create(Uuid::nil(), data);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["spiceLevel"], "medium");
        assert_eq!(json["prepTime"], 20);
        assert_eq!(json["isAvailable"], true);
    }
}
