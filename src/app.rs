//! To-Do Frontend App
//!
//! Builds the session, provides context and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoSession;

use crate::components::{ClearListButton, NewItemForm, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{store_item_count, TodoState, TodoStore};

#[component]
pub fn App() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    // State
    let session = TodoSession::open(BrowserStorage::from_window(), config.storage_key);
    log::info!("opened {:?} with {} items", config.storage_key, session.list().len());
    let store: TodoStore = Store::new(TodoState::default());
    let ctx = AppContext::new(session, store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // First draw once mounted, so the entry field can take focus
    Effect::new(move |_| ctx.refresh());

    let item_count = move || store_item_count(&store);

    view! {
        <main class="main-content">
            <h1>"To-Do List"</h1>

            <NewItemForm />

            <TodoListView />

            <div class="list-footer">
                <p class="item-count">
                    {move || match item_count() {
                        1 => "1 item".to_string(),
                        n => format!("{} items", n),
                    }}
                </p>
                <ClearListButton
                    disabled=Signal::derive(move || item_count() == 0)
                    on_confirm=Callback::new(move |_| ctx.clear_all())
                />
            </div>
        </main>
    }
}
