//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use pomodoro_core::{Activity, Board, Category, PomodoroDone};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category panes and the active tab
    pub board: Board,
    /// A valid session token is stored
    pub authorized: bool,
    /// Initial board fetch finished
    pub loaded: bool,
    /// Backend rejected the login exchange with 403
    pub not_allowed: bool,
    /// Edit mode is on (mirrors the edit controller)
    pub editing: bool,
    /// Queued edits are being replayed; edit controls are locked
    pub committing: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_category(store: &AppStore, category: Category) {
    store.board().write().add_category(category);
}

pub fn store_rename_category(store: &AppStore, cat_id: i64, name: &str) {
    store.board().write().rename_category(cat_id, name);
}

pub fn store_remove_category(store: &AppStore, cat_id: i64) {
    store.board().write().remove_category(cat_id);
}

pub fn store_add_activity(store: &AppStore, cat_id: i64, activity: Activity) {
    if !store.board().write().add_activity(cat_id, activity) {
        tracing::warn!(cat_id, "activity added to unknown category");
    }
}

pub fn store_rename_activity(store: &AppStore, activity_id: i64, name: &str, target: u32) {
    store.board().write().rename_activity(activity_id, name, target);
}

pub fn store_remove_activity(store: &AppStore, activity_id: i64) {
    store.board().write().remove_activity(activity_id);
}

pub fn store_record_pomodoro(store: &AppStore, done: &PomodoroDone) {
    store.board().write().record_pomodoro(done);
}
