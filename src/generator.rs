//! Random item generation for filling a list quickly.

use crate::core::{Category, Item};
use crate::list::PriorityRules;
use rand::Rng;
use rand::seq::IndexedRandom;

const GROCERIES: &[&str] = &[
    "Apples", "Bread", "Milk", "Eggs", "Cheese", "Rice", "Pasta", "Tomatoes", "Coffee", "Butter",
];

const FOODS: &[&str] = &[
    "Pizza", "Sushi", "Tacos", "Ramen", "Curry", "Paella", "Burger", "Salad", "Pancakes",
];

const ACTIVITIES: &[&str] = &[
    "Hiking", "Swimming", "Reading", "Cycling", "Painting", "Yoga", "Climbing", "Chess",
];

const PLACES: &[&str] = &[
    "Paris", "Tokyo", "Lisbon", "Cairo", "Lima", "Oslo", "Hanoi", "Quebec", "Seville",
];

/// Produces random but valid items for a given [`PriorityRules`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemGenerator {
    rules: PriorityRules,
}

impl ItemGenerator {
    pub fn new(rules: PriorityRules) -> Self {
        Self { rules }
    }

    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Item {
        let category = if self.rules.uses_categories() {
            Category::all().choose(rng).copied()
        } else {
            None
        };

        let pool = match category {
            None => GROCERIES,
            Some(Category::Food) => FOODS,
            Some(Category::Activity) => ACTIVITIES,
            Some(Category::Place) => PLACES,
        };
        // Pools are non-empty constants.
        let name = pool.choose(rng).copied().unwrap_or("Item");
        let priority = rng.random_range(self.rules.range_for(category));

        let mut item = Item::new(name, priority);
        item.category = category;
        item
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Item> {
        (0..count).map(|_| self.generate_one(rng)).collect()
    }
}
