//! Activity Row Component
//!
//! One history table row: six past cells, today's cell with the increment
//! control, and the rename/remove controls shown in edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pomodoro_core::{ActivityRow as Row, CellClass, TrackerApi};

use crate::context::use_app_context;
use crate::store::{store_record_pomodoro, use_app_store, AppStateStoreFields};

/// Row of activity `id`; contents follow the board, form state stays local
#[component]
pub fn ActivityRow(id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let editing = move || store.editing().get();
    let locked = move || store.committing().get();

    let row = move || store.board().read().row(id).cloned();
    let label = move || row().map(|row| row.label()).unwrap_or_default();
    let past = move || row().map(|row| row.past_cells()).unwrap_or_default();
    let today = move || row().map(|row| row.today_cell());
    let today_value = move || today().map(|cell| cell.value).unwrap_or(0);
    let today_class = move || today().map(|cell| cell.class).unwrap_or(CellClass::Danger).as_str();

    let (renaming, set_renaming) = signal(false);
    let (name_input, set_name_input) = signal(String::new());
    let (target_input, set_target_input) = signal(String::new());

    let current_target = move || {
        store.board().read_untracked().row(id).map(|row: &Row| row.target).unwrap_or(1)
    };

    let toggle_rename = move |_: web_sys::MouseEvent| {
        if !renaming.get_untracked() {
            if let Some(row) = store.board().read_untracked().row(id) {
                set_name_input.set(row.name.clone());
                set_target_input.set(row.target.to_string());
            }
        }
        set_renaming.update(|v| *v = !*v);
    };

    let add_pomodoro = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match client.record_pomodoro(id).await {
                Ok(done) => {
                    tracing::debug!(
                        activity = id,
                        new_value = done.new_value,
                        left = done.left,
                        "pomodoro recorded"
                    );
                    store_record_pomodoro(&store, &done);
                }
                Err(e) => tracing::error!(activity = id, error = %e, "history/do failed"),
            }
        });
    };

    let save_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name_input.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let target = target_input.get().trim().parse().unwrap_or_else(|_| current_target());
        ctx.queue_rename(id, &name, target);
        set_renaming.set(false);
    };

    view! {
        <tr data-activity=id.to_string()>
            <th scope="row">
                {move || if renaming.get() && editing() && !locked() {
                    view! {
                        <form class="form-inline rename-activity" on:submit=save_rename>
                            <input
                                type="text"
                                class="form-control input-sm"
                                prop:value=move || name_input.get()
                                on:input=move |ev| set_name_input.set(event_target_value(&ev))
                            />
                            <input
                                type="number"
                                min="0"
                                class="form-control input-sm"
                                prop:value=move || target_input.get()
                                on:input=move |ev| {
                                    set_target_input.set(event_target_value(&ev))
                                }
                            />
                            <button type="submit" class="btn btn-primary btn-xs">"✓"</button>
                        </form>
                    }.into_any()
                } else {
                    view! { <span class="activity-label">{label}</span> }.into_any()
                }}
                <Show when=move || editing() && !locked()>
                    <span class="pull-right edit-controls">
                        <button type="button" class="btn btn-default btn-xs" on:click=toggle_rename>
                            <span class="glyphicon glyphicon-pencil"></span>
                        </button>
                        <button
                            type="button"
                            class="btn btn-danger btn-xs"
                            on:click=move |_| ctx.queue_remove(id)
                        >
                            <span class="glyphicon glyphicon-remove"></span>
                        </button>
                    </span>
                </Show>
            </th>

            {move || past().into_iter().map(|cell| view! {
                <td class=cell.class.as_str()>{cell.value}</td>
            }).collect_view()}

            <td class=today_class>
                <div id=format!("cell{}", id) class="pull-left">{today_value}</div>
                <Show when=move || !editing()>
                    <div class="pull-right">
                        <button type="button" class="btn btn-default btn-xs" on:click=add_pomodoro>
                            <span class="glyphicon glyphicon-plus"></span>
                        </button>
                    </div>
                </Show>
            </td>
        </tr>
    }
}
