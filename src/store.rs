//! Render State Store
//!
//! Snapshot of the list the rows are drawn from. Uses Leptos
//! reactive_stores so views track only the fields they read.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::Item;

/// What the view currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in display order, as of the last refresh
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap in a fresh snapshot. Every row is rebuilt from it.
pub fn store_replace_items(store: &TodoStore, items: Vec<Item>) {
    *store.items().write() = items;
}

/// Items currently shown (tracked)
pub fn store_items(store: &TodoStore) -> Vec<Item> {
    store.items().get()
}

/// Number of items currently shown (tracked)
pub fn store_item_count(store: &TodoStore) -> usize {
    store.items().with(|items| items.len())
}
