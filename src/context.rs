//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pomodoro_core::{EditController, ReplayReport};

use crate::commands::HttpClient;
use crate::config::AppConfig;
use crate::store::{
    store_remove_activity, store_rename_activity, AppStateStoreFields, AppStore,
};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    client: StoredValue<HttpClient>,
    /// Edit-history session state
    edits: StoredValue<EditController>,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore) -> Self {
        let client = HttpClient::new(&config);
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new(client),
            edits: StoredValue::new(EditController::default()),
            store,
        }
    }

    pub fn client(&self) -> HttpClient {
        self.client.get_value()
    }

    /// Idle -> Editing
    pub fn start_editing(&self) {
        let started = self.edits.try_update_value(|edits| edits.start()).unwrap_or(false);
        if started {
            self.store.editing().set(true);
        }
    }

    /// Rename a row now, send it on commit
    pub fn queue_rename(&self, activity_id: i64, name: &str, target: u32) {
        let queued = self
            .edits
            .try_update_value(|edits| edits.queue_update(activity_id, name, target))
            .unwrap_or(false);
        if queued {
            store_rename_activity(&self.store, activity_id, name, target);
        } else {
            tracing::warn!(activity_id, "rename not queued");
        }
    }

    /// Drop a row now, send it on commit
    pub fn queue_remove(&self, activity_id: i64) {
        let queued = self
            .edits
            .try_update_value(|edits| edits.queue_remove(activity_id))
            .unwrap_or(false);
        if queued {
            store_remove_activity(&self.store, activity_id);
        } else {
            tracing::warn!(activity_id, "removal not queued");
        }
    }

    /// Editing -> Idle without sending anything.
    ///
    /// Rows already renamed or removed stay as they are.
    pub fn cancel_editing(&self) {
        if self.edits.with_value(|edits| edits.is_committing()) {
            tracing::debug!("cancel ignored while committing");
            return;
        }
        self.edits.update_value(|edits| {
            edits.cancel();
        });
        self.store.editing().set(false);
    }

    /// Editing -> Committing -> Idle, replaying the queue one call at a time.
    ///
    /// A second Done while the replay runs is ignored.
    pub fn commit_edits(&self) {
        let Some(session) = self.edits.try_update_value(|edits| edits.finish()).flatten() else {
            if self.edits.with_value(|edits| edits.is_committing()) {
                tracing::debug!("commit already in progress");
            } else {
                self.store.editing().set(false);
            }
            return;
        };
        self.store.committing().set(true);
        let client = self.client();
        let edits = self.edits;
        let store = self.store;
        spawn_local(async move {
            let report: ReplayReport = session.replay(&client).await;
            if !report.failed.is_empty() {
                tracing::warn!(failed = report.failed.len(), "some edits were not saved");
            }
            edits.update_value(|edits| edits.complete());
            store.committing().set(false);
            store.editing().set(false);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
