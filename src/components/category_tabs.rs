//! Category Tabs Component
//!
//! One pill per category plus the new-category form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pomodoro_core::{Category, TrackerApi};

use crate::context::use_app_context;
use crate::store::{store_add_category, use_app_store, AppStateStoreFields};

/// Category pill list
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        tracing::debug!(%name, "creating category");

        let client = ctx.client();
        spawn_local(async move {
            match client.create_category(&name).await {
                Ok(created) => {
                    store_add_category(&store, Category { id: created.id, name });
                    set_new_name.set(String::new());
                    set_adding.set(false);
                }
                Err(e) => tracing::error!(error = %e, "categories/new failed"),
            }
        });
    };

    let pills = move || {
        store.board().read().categories.iter()
            .map(|view| view.category.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <ul id="catPills" class="nav nav-pills">
            <For
                each=pills
                key=|cat| (cat.id, cat.name.clone())
                children=move |cat| {
                    let id = cat.id;
                    let pill_class = move || {
                        if store.board().read().is_active(id) { "active" } else { "" }
                    };
                    view! {
                        <li role="presentation" class=pill_class>
                            <a
                                href=format!("#cat{}", id)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    store.board().write().select(id);
                                }
                            >
                                {cat.name}
                            </a>
                        </li>
                    }
                }
            />

            <li role="presentation" class="new-category">
                {move || if adding.get() {
                    view! {
                        <form class="form-inline" on:submit=on_add>
                            <input
                                id="newCategoryInput"
                                type="text"
                                class="form-control"
                                placeholder="Category"
                                prop:value=move || new_name.get()
                                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-primary">"Create"</button>
                            <button
                                type="button"
                                class="btn btn-default"
                                on:click=move |_| set_adding.set(false)
                            >
                                "×"
                            </button>
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            set_adding.set(true);
                        }>"+"</a>
                    }.into_any()
                }}
            </li>
        </ul>
    }
}
