//! Todo Session
//!
//! Owns the list and the store it persists to. Each mutation rewrites the
//! full serialized list under one key.

use crate::domain::{normalize_entry, Item, ItemId, TodoList, TodoResult};
use crate::repository::{decode_list, encode_list, KeyValueStore};

pub struct TodoSession<S> {
    list: TodoList,
    store: S,
    key: String,
}

impl<S: KeyValueStore> TodoSession<S> {
    /// Load the list stored under `key`.
    ///
    /// Missing, unreadable or malformed data yields an empty list.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let list = match store.get(&key) {
            Ok(Some(raw)) => decode_list(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring stored list under {:?}: {}", key, e);
                TodoList::new()
            }),
            Ok(None) => TodoList::new(),
            Err(e) => {
                log::warn!("could not read {:?}: {}", key, e);
                TodoList::new()
            }
        };
        log::debug!("loaded {} items from {:?}", list.len(), key);
        Self { list, store, key }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add an item from raw form input.
    ///
    /// Returns the new id, or `None` when the input is blank (nothing is
    /// added or written). The item stays in the list even if the write fails.
    pub fn submit(&mut self, raw: &str) -> TodoResult<Option<ItemId>> {
        let Some(text) = normalize_entry(raw) else {
            return Ok(None);
        };
        let id = self.list.next_id();
        self.list.add_item(Item::new(id, text));
        log::info!("added item {}", id);
        self.persist()?;
        Ok(Some(id))
    }

    /// Remove the first item with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ItemId) -> TodoResult<Option<Item>> {
        let removed = self.list.remove_item(id);
        match &removed {
            Some(_) => log::info!("removed item {}", id),
            None => log::debug!("no item {} to remove", id),
        }
        self.persist()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> TodoResult<()> {
        log::info!("clearing {} items", self.list.len());
        self.list.clear();
        self.persist()
    }

    fn persist(&mut self) -> TodoResult<()> {
        let encoded = encode_list(&self.list)?;
        self.store.set(&self.key, &encoded)
    }
}
