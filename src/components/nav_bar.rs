//! Navigation Bar Component
//!
//! Brand, the categories menu entry and the user button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::login::{self, LoginResult};
use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let list_class = move || if store.authorized().get() { "" } else { "disabled" };

    view! {
        <nav class="navbar navbar-default">
            <div class="container-fluid">
                <span class="navbar-brand">"Pomodoro tracker"</span>
                <ul class="nav navbar-nav">
                    <li id="categoriesList" class=list_class>
                        <a href="#">"Categories"</a>
                    </li>
                </ul>
                <p id="userButton" class="navbar-text navbar-right">
                    <UserButton />
                </p>
            </div>
        </nav>
    }
}

/// "Sign out" when authorized, the provider login button otherwise
#[component]
fn UserButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_login = move |_| {
        let client = ctx.client();
        let scope = ctx.config.with_value(|config| config.login_scope.clone());
        spawn_local(async move {
            if login::login(&client, &scope).await == LoginResult::NotAllowed {
                store.not_allowed().set(true);
            }
        });
    };

    view! {
        {move || if store.authorized().get() {
            view! {
                <a
                    class="navbar-link"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        storage::sign_out();
                    }
                >
                    "Sign out"
                </a>
            }.into_any()
        } else {
            view! {
                <button type="button" class="btn btn-primary btn-sm" on:click=on_login>
                    "Log in"
                </button>
            }.into_any()
        }}
    }
}
