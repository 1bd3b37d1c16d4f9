//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use todo_core::{KeyValueStore, TodoError, TodoResult};
use wasm_bindgen::{JsCast, JsValue};

pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Bind to the window's `localStorage`.
    ///
    /// Storage can be missing (no window, blocked by privacy settings). Reads
    /// then find nothing and writes fail, so the list lives in memory only.
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", describe(&e));
                None
            }
        });
        Self { storage }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| TodoError::Storage(describe(&e))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        let storage = self.storage.as_ref().ok_or(TodoError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(describe(&e)))
    }
}

/// Readable message from a thrown JS value (e.g. `QuotaExceededError`)
fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", err),
    }
}
