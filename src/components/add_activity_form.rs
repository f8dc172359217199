//! Add Activity Form Component
//!
//! Inline form under each category table. In edit mode its buttons turn
//! into Cancel / Done for the pending edit queue.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pomodoro_core::{Activity, TrackerApi};

use crate::context::use_app_context;
use crate::store::{store_add_activity, use_app_store, AppStateStoreFields};

/// Target used when the pomodoro field is empty or not a number
const DEFAULT_TARGET: u32 = 1;

#[component]
pub fn AddActivityForm(cat_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (new_poms, set_new_poms) = signal(String::new());

    let add_activity = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let target = new_poms.get().trim().parse().unwrap_or(DEFAULT_TARGET);
        tracing::debug!(cat_id, %name, target, "adding activity");

        let client = ctx.client();
        spawn_local(async move {
            match client.create_activity(cat_id, &name, target).await {
                Ok(created) => {
                    store_add_activity(&store, cat_id, Activity { id: created.id, name, target });
                    set_new_name.set(String::new());
                    set_new_poms.set(String::new());
                }
                Err(e) => tracing::error!(cat_id, error = %e, "activities/new failed"),
            }
        });
    };

    let cancel = move |_: web_sys::MouseEvent| ctx.cancel_editing();
    let commit = move |_: web_sys::MouseEvent| ctx.commit_edits();
    let start_editing = move |_: web_sys::MouseEvent| ctx.start_editing();

    view! {
        <form class="form-inline add-activity-form" on:submit=add_activity>
            <div class="form-group">
                <label class="sr-only">"Name of activity to add"</label>
                <input
                    type="text"
                    class="new-activity-name form-control"
                    placeholder="Activity"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label class="sr-only">"Number of pomodoros to complete"</label>
                <input
                    type="number"
                    min="0"
                    class="new-activity-poms form-control"
                    placeholder="1"
                    prop:value=move || new_poms.get()
                    on:input=move |ev| set_new_poms.set(event_target_value(&ev))
                />
            </div>
            {move || if store.committing().get() {
                view! {
                    <button type="button" class="btn btn-success" disabled=true>"Saving…"</button>
                }.into_any()
            } else if store.editing().get() {
                view! {
                    <button type="button" class="btn btn-default" on:click=cancel>
                        "Cancel"
                    </button>
                    <button type="button" class="btn btn-success" on:click=commit>
                        "Done"
                    </button>
                }.into_any()
            } else {
                view! {
                    <button type="submit" class="add-activity-button btn btn-primary">
                        "Add activity"
                    </button>
                    <button type="button" class="btn btn-default" on:click=start_editing>
                        "Edit history"
                    </button>
                }.into_any()
            }}
        </form>
    }
}
