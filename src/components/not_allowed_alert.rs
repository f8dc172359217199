//! Not-Allowed Alert Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Persistent banner shown once the backend rejects the login
#[component]
pub fn NotAllowedAlert() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.not_allowed().get()>
            <div id="notallowed-alert" class="alert alert-danger" role="alert">
                "This account is not allowed to use the tracker."
            </div>
        </Show>
    }
}
