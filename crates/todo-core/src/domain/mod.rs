//! Domain Layer
//!
//! Items, the ordered list that owns them, and the error type.
//! No storage or serialization concerns live here beyond serde derives on `ItemId`.

mod error;
mod item;
mod list;

pub use error::{TodoError, TodoResult};
pub use item::{normalize_entry, Item, ItemId};
pub use list::TodoList;
