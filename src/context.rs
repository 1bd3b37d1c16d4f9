//! Application Context
//!
//! Controller shared via Leptos Context API. Owns the session and turns DOM
//! events into list operations followed by a redraw.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use todo_core::{ItemId, TodoResult, TodoSession};

use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use crate::store::{store_replace_items, TodoStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list and its storage. `web_sys::Storage` is not `Send`, hence local storage.
    session: StoredValue<TodoSession<BrowserStorage>, LocalStorage>,
    /// Snapshot the rows render from
    store: TodoStore,
    /// Entry field contents
    pub entry_text: RwSignal<String>,
    /// Entry field element, focused on every refresh
    pub entry_ref: NodeRef<html::Input>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(session: TodoSession<BrowserStorage>, store: TodoStore, config: AppConfig) -> Self {
        Self {
            session: StoredValue::new_local(session),
            store,
            entry_text: RwSignal::new(String::new()),
            entry_ref: NodeRef::new(),
            config,
        }
    }

    /// Rebuild rows from the list, clear and focus the entry field
    pub fn refresh(&self) {
        let items = self.session.with_value(|session| session.list().items().to_vec());
        log::debug!("refresh: {} items", items.len());
        store_replace_items(&self.store, items);
        self.entry_text.set(String::new());
        if let Some(input) = self.entry_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    /// Add an item from the entry field. Blank input is ignored.
    pub fn submit(&self, raw: &str) {
        let mut outcome: TodoResult<Option<ItemId>> = Ok(None);
        self.session.update_value(|session| outcome = session.submit(raw));
        match outcome {
            Ok(None) => {}
            Ok(Some(_)) => self.refresh(),
            Err(e) => {
                log::error!("failed to save new item: {}", e);
                self.refresh();
            }
        }
    }

    /// Check an item off: remove and save now, redraw after the configured delay
    pub fn complete(&self, id: ItemId) {
        self.session.update_value(|session| {
            if let Err(e) = session.remove(id) {
                log::error!("failed to save after removing item {}: {}", id, e);
            }
        });
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.config.refresh_delay_ms).await;
            ctx.refresh();
        });
    }

    /// Remove every item
    pub fn clear_all(&self) {
        self.session.update_value(|session| {
            if let Err(e) = session.clear() {
                log::error!("failed to save cleared list: {}", e);
            }
        });
        self.refresh();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
