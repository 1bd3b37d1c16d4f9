//! Todo List
//!
//! Ordered collection of items. Insertion order is display order.

use super::item::{Item, ItemId};

/// The list of active items, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from items already in display order
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Current items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append to the end. Duplicate ids are not checked.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with `id`, if any
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Id for the next item: one past the highest id present, or `1` when empty.
    ///
    /// For lists grown only through `add_item` with ids from here, the last
    /// item holds the highest id, so this is `last.id + 1`. When the highest
    /// id is `u32::MAX` the lowest unused id is handed out instead.
    pub fn next_id(&self) -> ItemId {
        let Some(max) = self.items.iter().map(Item::id).max() else {
            return ItemId::FIRST;
        };
        max.checked_next().unwrap_or_else(|| self.lowest_free_id())
    }

    fn lowest_free_id(&self) -> ItemId {
        let mut taken: Vec<u32> = self.items.iter().map(|item| item.id().get()).collect();
        taken.sort_unstable();
        taken.dedup();

        // The list holds far fewer than u32::MAX items, so a gap always exists
        let mut candidate = ItemId::FIRST.get();
        for id in taken {
            if id > candidate {
                break;
            }
            if id == candidate {
                candidate += 1;
            }
        }
        ItemId::new(candidate)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
