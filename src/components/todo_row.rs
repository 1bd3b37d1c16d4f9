//! Todo Row Component
//!
//! One checkbox/label pair. Checking the box completes (removes) the item.

use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_app_context;

/// A single item row
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id();
    // The checkbox element id is the item id; the label points at it
    let dom_id = id.to_string();
    let text = item.text().to_owned();

    view! {
        <div class="item">
            <input
                type="checkbox"
                id=dom_id.clone()
                tabindex="0"
                on:click=move |_| ctx.complete(id)
            />
            <label for=dom_id>{text}</label>
        </div>
    }
}
