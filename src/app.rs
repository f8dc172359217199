//! Pomodoro Tracker App
//!
//! Page root: checks the session, then shows either the login prompt or the
//! tabbed category board.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use pomodoro_core::load_board;

use crate::components::{CategoryPane, CategoryTabs, NavBar, NotAllowedAlert};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::login::{self, LoginResult};
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(AppConfig::load(), store);
    provide_context(ctx);

    let authorized = storage::is_logged_in();
    store.authorized().set(authorized);

    if authorized {
        render_authorized(ctx, store);
    } else {
        tracing::debug!("rendering unauthorized");
    }

    let show_board = move || store.authorized().get() && store.loaded().get();
    let category_ids = move || {
        store.board().read().categories.iter()
            .map(|view| view.category.id)
            .collect::<Vec<_>>()
    };

    view! {
        <NavBar />
        <div id="mainContainer" class="container">
            <NotAllowedAlert />

            <Show when=show_board>
                <div class="content authorized">
                    <CategoryTabs />
                    <div class="tab-content">
                        <For
                            each=category_ids
                            key=|id| *id
                            children=move |id| view! { <CategoryPane cat_id=id /> }
                        />
                    </div>
                </div>
            </Show>

            <Show when=move || !store.authorized().get()>
                <div class="content unauthorized">
                    <p class="lead">"Log in to see your pomodoro history."</p>
                </div>
            </Show>
        </div>
    }
}

/// Load the board one request at a time and start the periodic session check
fn render_authorized(ctx: AppContext, store: Store<AppState>) {
    tracing::debug!("rendering authorized");

    let interval_ms = ctx.config.with_value(|config| config.session_check_interval_ms());
    Interval::new(interval_ms, move || {
        let client = ctx.client();
        spawn_local(async move {
            if login::check_login_state(&client, false).await == LoginResult::NotAllowed {
                store.not_allowed().set(true);
            }
        });
    })
    .forget();

    let client = ctx.client();
    spawn_local(async move {
        match load_board(&client).await {
            Ok(board) => {
                tracing::info!(categories = board.categories.len(), "board loaded");
                store.board().set(board);
            }
            Err(e) => tracing::error!(error = %e, "fetching categories failed"),
        }
        store.loaded().set(true);
    });
}
