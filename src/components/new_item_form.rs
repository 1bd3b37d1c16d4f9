//! New Item Form Component
//!
//! Text entry and submit button for adding items.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let create_item = move |ev: web_sys::SubmitEvent| {
        // Keep the browser from reloading the page
        ev.prevent_default();
        ctx.submit(&ctx.entry_text.get_untracked());
    };

    view! {
        <form id="itemEntryForm" class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    id="newItem"
                    type="text"
                    placeholder="Add new item..."
                    autocomplete="off"
                    node_ref=ctx.entry_ref
                    prop:value=move || ctx.entry_text.get()
                    on:input=move |ev| ctx.entry_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
