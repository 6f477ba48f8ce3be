//! The per-session meal collection. A plain ordered CRUD container: ids come
//! from a monotonic counter (never recomputed from the collection length, so
//! a delete can never cause a later add to reissue an id), deletes are
//! idempotent filters, and no field validation happens here.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Desserts,
}

/// One shared meal. `calories` is stored exactly as the caller supplied it,
/// even when it disagrees with `4*protein + 4*carbs + 9*fat`.
#[derive(Debug, Clone, Serialize)]
pub struct MealRecord {
    pub id: u64,
    pub name: String,
    pub category: MealCategory,
    pub tags: String,
    pub description: String,
    pub recipe_url: String,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub calories: u32,
    pub fiber: u32,
    pub sugar: u32,
    pub sodium: u32,
    pub cholesterol: u32,
    pub saturated_fat: u32,
    pub trans_fat: u32,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
    pub date_posted: String,
    pub likes: u32,
    pub comments: u32,
}

/// Caller-supplied fields for a new meal; the store fills in the rest.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub category: MealCategory,
    pub tags: String,
    pub description: String,
    pub recipe_url: String,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub calories: u32,
    pub fiber: u32,
    pub sugar: u32,
    pub sodium: u32,
    pub cholesterol: u32,
    pub saturated_fat: u32,
    pub trans_fat: u32,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
}

#[derive(Debug)]
pub struct MealStore {
    records: Vec<MealRecord>,
    next_id: u64,
}

impl Default for MealStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MealStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Assigns an id and posting date, zeroes the social counters, appends.
    pub fn add(&mut self, new: NewMeal) -> &MealRecord {
        let record = MealRecord {
            id: self.next_id,
            name: new.name,
            category: new.category,
            tags: new.tags,
            description: new.description,
            recipe_url: new.recipe_url,
            protein: new.protein,
            carbs: new.carbs,
            fat: new.fat,
            calories: new.calories,
            fiber: new.fiber,
            sugar: new.sugar,
            sodium: new.sodium,
            cholesterol: new.cholesterol,
            saturated_fat: new.saturated_fat,
            trans_fat: new.trans_fat,
            ingredients: new.ingredients,
            instructions: new.instructions,
            image: new.image,
            date_posted: human_date(OffsetDateTime::now_utc().date()),
            likes: 0,
            comments: 0,
        };
        self.next_id += 1;
        let idx = self.records.len();
        self.records.push(record);
        &self.records[idx]
    }

    /// Removes the record with the given id. Idempotent: an unknown id is a
    /// no-op returning false. Remaining records keep their ids.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|m| m.id != id);
        self.records.len() != before
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[MealRecord] {
        &self.records
    }

    /// Bumps the like counter; None when the id is unknown.
    pub fn like(&mut self, id: u64) -> Option<u32> {
        self.records.iter_mut().find(|m| m.id == id).map(|m| {
            m.likes += 1;
            m.likes
        })
    }

    /// Bumps the comment counter; None when the id is unknown.
    pub fn comment(&mut self, id: u64) -> Option<u32> {
        self.records.iter_mut().find(|m| m.id == id).map(|m| {
            m.comments += 1;
            m.comments
        })
    }
}

/// "Feb 28, 2025" style date, as shown on meal cards.
pub fn human_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day], [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> NewMeal {
        NewMeal {
            name: name.to_string(),
            category: MealCategory::Breakfast,
            tags: "high-protein".into(),
            description: "test meal".into(),
            recipe_url: String::new(),
            protein: 20,
            carbs: 30,
            fat: 10,
            calories: 290,
            fiber: 0,
            sugar: 0,
            sodium: 0,
            cholesterol: 0,
            saturated_fat: 0,
            trans_fat: 0,
            ingredients: "1 cup oats".into(),
            instructions: "mix".into(),
            image: "https://api.placeholder.com/400/300".into(),
        }
    }

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let mut store = MealStore::new();
        let ids: Vec<u64> = (0..5).map(|i| store.add(sample(&format!("m{i}"))).id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ids_are_not_reissued_after_delete() {
        let mut store = MealStore::new();
        store.add(sample("a"));
        store.add(sample("b"));
        assert!(store.delete(2));
        // A length-based scheme would hand out 2 again here.
        let id = store.add(sample("c")).id;
        assert_eq!(id, 3);
        let ids: Vec<u64> = store.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = MealStore::new();
        store.add(sample("a"));
        assert!(store.delete(1));
        assert!(store.list().is_empty());
        assert!(!store.delete(1));
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_on_empty_store_is_a_noop() {
        let mut store = MealStore::new();
        assert!(!store.delete(999));
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_is_stable_between_reads() {
        let mut store = MealStore::new();
        store.add(sample("a"));
        store.add(sample("b"));
        let first: Vec<u64> = store.list().iter().map(|m| m.id).collect();
        let second: Vec<u64> = store.list().iter().map(|m| m.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn caller_supplied_calories_survive_verbatim() {
        let mut store = MealStore::new();
        let mut new = sample("divergent");
        new.protein = 20;
        new.carbs = 30;
        new.fat = 10;
        new.calories = 250; // macros say 460, the caller says 250
        let record = store.add(new);
        assert_eq!(record.calories, 250);
        assert_eq!(store.list()[0].calories, 250);
    }

    #[test]
    fn delete_keeps_relative_order_and_ids() {
        let mut store = MealStore::new();
        store.add(sample("first"));
        store.add(sample("second"));
        store.add(sample("third"));
        assert!(store.delete(2));
        let remaining: Vec<(u64, &str)> = store
            .list()
            .iter()
            .map(|m| (m.id, m.name.as_str()))
            .collect();
        assert_eq!(remaining, vec![(1, "first"), (3, "third")]);
    }

    #[test]
    fn like_bumps_counter_and_rejects_unknown_ids() {
        let mut store = MealStore::new();
        store.add(sample("a"));
        assert_eq!(store.like(1), Some(1));
        assert_eq!(store.like(1), Some(2));
        assert_eq!(store.like(42), None);
        assert_eq!(store.list()[0].likes, 2);
    }

    #[test]
    fn comment_bumps_counter_and_rejects_unknown_ids() {
        let mut store = MealStore::new();
        store.add(sample("a"));
        assert_eq!(store.comment(1), Some(1));
        assert_eq!(store.comment(1), Some(2));
        assert_eq!(store.comment(42), None);
        assert_eq!(store.list()[0].comments, 2);
        // The two counters move independently.
        assert_eq!(store.list()[0].likes, 0);
    }

    #[test]
    fn new_records_start_with_zeroed_counters() {
        let mut store = MealStore::new();
        let record = store.add(sample("a"));
        assert_eq!(record.likes, 0);
        assert_eq!(record.comments, 0);
        assert!(!record.date_posted.is_empty());
    }
}
