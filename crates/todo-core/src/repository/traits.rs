//! Repository Layer - Core Traits
//!
//! Abstract string key-value storage. The browser's `localStorage` is the
//! production backend; `MemoryStore` backs tests.

use crate::domain::TodoResult;

/// String key-value storage, synchronous like `localStorage`
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> TodoResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        (**self).set(key, value)
    }
}
