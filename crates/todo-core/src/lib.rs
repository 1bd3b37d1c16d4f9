//! To-Do Core
//!
//! List model, persisted schema and the owned session that ties them to a
//! key-value store. Nothing in here touches the DOM.

pub mod domain;
pub mod repository;
mod session;

#[cfg(test)]
mod tests;

pub use domain::{normalize_entry, Item, ItemId, TodoError, TodoList, TodoResult};
pub use repository::{KeyValueStore, MemoryStore, DEFAULT_STORAGE_KEY, SCHEMA_VERSION};
pub use session::TodoSession;
