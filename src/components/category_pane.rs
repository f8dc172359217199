//! Category Pane Component
//!
//! Tab pane of one category: header with rename/delete, the history table
//! (once the category has activities) and the add-activity form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pomodoro_core::TrackerApi;

use super::{AddActivityForm, DeleteConfirmButton, HistoryTable};
use crate::context::use_app_context;
use crate::store::{
    store_remove_category, store_rename_category, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CategoryPane(cat_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (renaming, set_renaming) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let name = move || {
        store.board().read().category(cat_id)
            .map(|view| view.category.name.clone())
            .unwrap_or_default()
    };
    let has_table = move || {
        store.board().read().category(cat_id).is_some_and(|view| view.table.is_some())
    };
    let pane_class = move || {
        if store.board().read().is_active(cat_id) {
            "tab-pane fade in active"
        } else {
            "tab-pane fade"
        }
    };

    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }

        let client = ctx.client();
        spawn_local(async move {
            match client.rename_category(cat_id, &name).await {
                Ok(()) => {
                    store_rename_category(&store, cat_id, &name);
                    set_renaming.set(false);
                }
                Err(e) => tracing::error!(cat_id, error = %e, "renaming category failed"),
            }
        });
    };

    let on_delete = move |_: ()| {
        let client = ctx.client();
        spawn_local(async move {
            match client.delete_category(cat_id).await {
                Ok(()) => store_remove_category(&store, cat_id),
                Err(e) => tracing::error!(cat_id, error = %e, "deleting category failed"),
            }
        });
    };

    view! {
        <div id=format!("cat{}", cat_id) class=pane_class>
            <div class="category-header">
                {move || if renaming.get() {
                    view! {
                        <form class="form-inline" on:submit=on_rename>
                            <input
                                type="text"
                                class="form-control input-sm"
                                prop:value=move || new_name.get()
                                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-primary btn-xs">"Rename"</button>
                            <button
                                type="button"
                                class="btn btn-default btn-xs"
                                on:click=move |_| set_renaming.set(false)
                            >
                                "×"
                            </button>
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <h4>
                            {name}
                            <button
                                type="button"
                                class="btn btn-link btn-xs"
                                on:click=move |_| {
                                    set_new_name.set(name());
                                    set_renaming.set(true);
                                }
                            >
                                <span class="glyphicon glyphicon-pencil"></span>
                            </button>
                            <DeleteConfirmButton
                                button_class="btn btn-link btn-xs"
                                on_confirm=on_delete
                            />
                        </h4>
                    }.into_any()
                }}
            </div>

            <Show
                when=has_table
                fallback=move || tracing::info!(cat_id, "no activities, table omitted")
            >
                <HistoryTable cat_id=cat_id />
            </Show>

            <AddActivityForm cat_id=cat_id />
        </div>
    }
}
