//! Todo List View Component
//!
//! Rows for every item, rebuilt from scratch whenever the snapshot changes.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{store_items, use_todo_store};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    // Not keyed: any change drops all rows and renders the list again in order
    let rows = move || {
        store_items(&store)
            .into_iter()
            .map(|item| view! { <TodoRow item=item /> })
            .collect_view()
    };

    view! {
        <div id="listItems" class="list-items">
            {rows}
        </div>
    }
}
