//! Menu State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! sole owner of the food collection the dashboard renders; it is a cache of
//! the backend and is only reconciled from server responses, never mutated
//! optimistically.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Food;

/// Initial fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Lifecycle of the most recent mutating call.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MutationPhase {
    #[default]
    Idle,
    InFlight,
    Applied,
    Failed(String),
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Canonical food collection, in insertion order
    pub foods: Vec<Food>,
    /// Record currently open in the edit dialog
    pub editing_food: Option<Food>,
    /// Initial fetch state
    pub load: LoadPhase,
    /// Most recent mutation state
    pub mutation: MutationPhase,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Reconciliation
// ========================
//
// Pure functions over the collection; the store helpers below are thin
// reactive wrappers around them.

/// Append a freshly created record (the server response carries the id).
pub fn append_created(foods: &mut Vec<Food>, created: Food) {
    foods.push(created);
}

/// Replace the entry matching the updated record's id, in place. Every other
/// entry is left untouched and keeps its position.
pub fn replace_updated(foods: &mut Vec<Food>, updated: Food) {
    if let Some(entry) = foods.iter_mut().find(|food| food.id == updated.id) {
        *entry = updated;
    }
}

/// Remove exactly the entry with the given id.
pub fn remove_by_id(foods: &mut Vec<Food>, id: u64) {
    foods.retain(|food| food.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection from a fetch response
pub fn store_set_foods(store: &MenuStore, foods: Vec<Food>) {
    *store.foods().write() = foods;
    store.load().set(LoadPhase::Loaded);
}

/// Append a created food to the store
pub fn store_append_food(store: &MenuStore, created: Food) {
    append_created(&mut store.foods().write(), created);
}

/// Replace an updated food in the store by id
pub fn store_replace_food(store: &MenuStore, updated: Food) {
    replace_updated(&mut store.foods().write(), updated);
}

/// Remove a food from the store by id
pub fn store_remove_food(store: &MenuStore, id: u64) {
    remove_by_id(&mut store.foods().write(), id);
}

/// Set the record the edit dialog is working on
pub fn store_set_editing(store: &MenuStore, food: Option<Food>) {
    store.editing_food().set(food);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u64, name: &str, price: f64) -> Food {
        Food {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{name}.png"),
            description: format!("{name} description"),
            price,
            available: true,
        }
    }

    #[test]
    fn created_record_is_appended_last() {
        let mut foods = vec![food(1, "pizza", 30.0)];
        append_created(&mut foods, food(2, "salad", 12.0));

        assert_eq!(foods.len(), 2);
        assert_eq!(foods.last().map(|f| f.id), Some(2));
    }

    #[test]
    fn update_replaces_only_the_matching_entry() {
        let a = food(1, "pizza", 30.0);
        let mut foods = vec![a.clone(), food(2, "salad", 12.0)];

        let mut updated = food(2, "salad", 14.0);
        updated.description = "now with croutons".to_string();
        replace_updated(&mut foods, updated.clone());

        assert_eq!(foods[0], a);
        assert_eq!(foods[1], updated);
    }

    #[test]
    fn update_matches_by_id_not_position() {
        let mut foods = vec![food(3, "soup", 9.0), food(1, "pizza", 30.0)];
        replace_updated(&mut foods, food(1, "pizza", 35.0));

        assert_eq!(foods[0].price, 9.0);
        assert_eq!(foods[1].price, 35.0);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let mut foods = vec![food(1, "pizza", 30.0)];
        replace_updated(&mut foods, food(9, "ghost", 1.0));

        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, 1);
    }

    #[test]
    fn delete_removes_exactly_one_preserving_order() {
        let mut foods = vec![
            food(1, "pizza", 30.0),
            food(2, "salad", 12.0),
            food(3, "soup", 9.0),
        ];
        remove_by_id(&mut foods, 2);

        assert_eq!(foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn edit_scenario_price_change_only() {
        use crate::models::FoodDraft;

        let editing = food(5, "pizza", 30.0);
        let mut foods = vec![food(1, "salad", 12.0), editing.clone()];

        // The dialog pre-populates every field from the editing record, the
        // user changes only the price, and the merged payload goes out.
        let draft = FoodDraft {
            name: editing.name.clone(),
            image: editing.image.clone(),
            description: editing.description.clone(),
            price: 35.0,
        };
        let payload = editing.apply_draft(&draft);
        assert_eq!(payload.id, 5);
        assert_eq!(payload.name, "pizza");
        assert_eq!(payload.price, 35.0);
        assert!(payload.available);

        // Reconcile with the (echoed) server response.
        replace_updated(&mut foods, payload);
        assert_eq!(foods[1].price, 35.0);
        assert_eq!(foods[0], food(1, "salad", 12.0));
    }
}
