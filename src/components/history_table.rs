//! History Table Component

use leptos::prelude::*;
use pomodoro_core::{last_7_days, local_today};

use super::ActivityRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Weekly history of one category; one row per activity, keyed on its id
#[component]
pub fn HistoryTable(cat_id: i64) -> impl IntoView {
    let store = use_app_store();
    let labels = last_7_days(local_today());
    let row_ids = move || {
        store.board().read().category(cat_id).map(|view| view.row_ids()).unwrap_or_default()
    };

    view! {
        <table class="table table-bordered table-hover">
            <thead>
                <tr>
                    <th>"#"</th>
                    {labels.into_iter().map(|label| view! { <th>{label}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=row_ids
                    key=|id| *id
                    children=move |id| view! { <ActivityRow id=id /> }
                />
            </tbody>
        </table>
    }
}
