//! Clear List Button Component
//!
//! Clear-all control with inline confirm/cancel.

use leptos::prelude::*;

/// Inline clear confirmation button
///
/// Shows "Clear" initially. When clicked, shows "Clear all items?" with ✓/✗ buttons.
///
/// # Arguments
/// * `disabled` - Whether there is anything to clear
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn ClearListButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="clear-btn"
                disabled=move || disabled.get()
                on:click=move |_| set_confirming.set(true)
            >
                "Clear"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">"Clear all items?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
