//! Repository Layer
//!
//! Persisted form of the list and the key-value stores it is written to.

mod memory_store;
mod schema;
mod traits;

pub use memory_store::MemoryStore;
pub use schema::{decode_list, encode_list, SCHEMA_VERSION};
pub use traits::KeyValueStore;

/// Storage key holding the serialized list. Used for both reads and writes.
pub const DEFAULT_STORAGE_KEY: &str = "myToDoList";
