//! House menu seeding
//!
//! 空菜单时写入 7 道招牌菜。计数检查与写入之间不加锁，多进程同时启动可能重复写入。

use shared::models::MenuItem;
use uuid::Uuid;

use super::repository::RepoResult;
use super::store::MenuStore;

struct SeedDish {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    image: &'static str,
    dietary_type: &'static str,
    spice_level: &'static str,
    tags: &'static [&'static str],
    hero_ingredient: &'static str,
    allergens: &'static [&'static str],
    prep_time: i32,
    calories: i32,
    stock: i32,
    rating: f64,
}

const HOUSE_MENU: &[SeedDish] = &[
    SeedDish {
        name: "Malabar Chicken Biriyani",
        description: "Aromatic kaima rice cooked with spiced chicken.",
        price: 320.0,
        category: "Mains",
        image: "https://images.unsplash.com/photo-1633945274405-b6c8069047b0",
        dietary_type: "non-veg",
        spice_level: "medium",
        tags: &["bestseller", "comfort"],
        hero_ingredient: "poultry",
        allergens: &["dairy"],
        prep_time: 25,
        calories: 650,
        stock: 50,
        rating: 4.8,
    },
    SeedDish {
        name: "Butter Chicken",
        description: "Creamy tomato curry.",
        price: 280.0,
        category: "Mains",
        image: "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?auto=format&fit=crop&w=500&q=80",
        dietary_type: "non-veg",
        spice_level: "mild",
        tags: &["classic", "kids_friendly"],
        hero_ingredient: "poultry",
        allergens: &["dairy", "treenuts"],
        prep_time: 20,
        calories: 550,
        stock: 30,
        rating: 4.7,
    },
    SeedDish {
        name: "Kerala Parotta",
        description: "Flaky layered flatbread.",
        price: 40.0,
        category: "Breads/Rice",
        image: "https://images.unsplash.com/photo-1626074353765-517a681e40be?auto=format&fit=crop&w=500&q=80",
        dietary_type: "veg",
        spice_level: "mild",
        tags: &[],
        hero_ingredient: "rice",
        allergens: &["gluten"],
        prep_time: 10,
        calories: 300,
        stock: 100,
        rating: 4.9,
    },
    SeedDish {
        name: "Fresh Lime Soda",
        description: "Refreshing sweet and salty soda.",
        price: 80.0,
        category: "Beverages",
        image: "https://images.unsplash.com/photo-1513558161293-cdaf765ed2fd?auto=format&fit=crop&w=500&q=80",
        dietary_type: "veg",
        spice_level: "mild",
        tags: &[],
        hero_ingredient: "veg",
        allergens: &[],
        prep_time: 5,
        calories: 120,
        stock: 100,
        rating: 4.5,
    },
    SeedDish {
        name: "Gobi Manchurian",
        description: "Crispy cauliflower in tangy soy-garlic sauce.",
        price: 240.0,
        category: "Starters",
        image: "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?q=80&w=1000",
        dietary_type: "veg",
        spice_level: "medium",
        tags: &["vegan", "comfort"],
        hero_ingredient: "veg",
        allergens: &["soy", "gluten"],
        prep_time: 20,
        calories: 290,
        stock: 20,
        rating: 4.6,
    },
    SeedDish {
        name: "Beef Fry",
        description: "Spicy stir-fried beef with coconut slices.",
        price: 380.0,
        category: "Mains",
        image: "https://images.unsplash.com/photo-1626509673367-1605553049b6?q=80&w=1000",
        dietary_type: "non-veg",
        spice_level: "fiery",
        tags: &["spicy", "high_protein", "keto"],
        hero_ingredient: "red_meat",
        allergens: &[],
        prep_time: 25,
        calories: 450,
        stock: 15,
        rating: 4.8,
    },
    SeedDish {
        name: "Palada Payasam",
        description: "Sweet rice pasta pudding with milk.",
        price: 180.0,
        category: "Dessert",
        image: "https://images.unsplash.com/photo-1628169604754-583b6329007f?q=80&w=1000",
        dietary_type: "veg",
        spice_level: "mild",
        tags: &["sweet", "classic"],
        hero_ingredient: "rice",
        allergens: &["dairy", "gluten"],
        prep_time: 5,
        calories: 350,
        stock: 25,
        rating: 4.9,
    },
];

impl SeedDish {
    fn to_menu_item(&self) -> MenuItem {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        MenuItem {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            price: self.price,
            category: self.category.to_string(),
            image: Some(self.image.to_string()),
            spice_level: Some(self.spice_level.to_string()),
            is_available: true,
            dietary_type: Some(self.dietary_type.to_string()),
            tags: owned(self.tags),
            hero_ingredient: Some(self.hero_ingredient.to_string()),
            allergens: owned(self.allergens),
            prep_time: Some(self.prep_time),
            calories: Some(self.calories),
            stock: Some(self.stock),
            rating: Some(self.rating),
        }
    }
}

/// The house dishes with fresh ids
pub fn house_menu() -> Vec<MenuItem> {
    HOUSE_MENU.iter().map(SeedDish::to_menu_item).collect()
}

/// Seed the house menu when the catalog is empty, returns the number inserted
pub async fn seed_menu_if_empty(store: &dyn MenuStore) -> RepoResult<usize> {
    let count = store.count().await?;
    if count > 0 {
        tracing::debug!(count, "Menu already populated, skipping seed");
        return Ok(0);
    }
    let inserted = store.insert_many(house_menu()).await?;
    tracing::info!(inserted, "Seeded house menu");
    Ok(inserted)
}
