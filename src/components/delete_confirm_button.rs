//! Delete Confirm Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Shows a × button; once clicked, asks "Delete?" with ✓/✗.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |_| set_confirming.set(true)
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="btn btn-danger btn-xs"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="btn btn-default btn-xs"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
