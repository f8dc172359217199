//! Browser Session Storage
//!
//! `localStorage` adapter for the core session store.

use pomodoro_core::{KeyValueStore, SessionStore};

/// `window.localStorage`; a missing storage reads as empty
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if inner.is_none() {
            tracing::warn!("localStorage unavailable");
        }
        Self { inner }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.inner.as_ref().ok_or("localStorage unavailable")?;
        storage.set_item(key, value).map_err(|e| {
            tracing::warn!(key, error = ?e, "localStorage write failed");
            format!("{:?}", e)
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.inner {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key, error = ?e, "localStorage remove failed");
            }
        }
    }
}

pub fn session() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage::new())
}

/// Wall clock in epoch seconds
pub fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

pub fn is_logged_in() -> bool {
    session().is_logged_in(now_secs())
}

/// Returns false when the session could not be written
pub fn persist_session(token: &str, expires_in_secs: f64) -> bool {
    session().persist(token, expires_in_secs, now_secs()).is_ok()
}

/// Clear the token and reload the page
pub fn sign_out() {
    session().clear();
    reload_page();
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            tracing::warn!(error = ?e, "page reload failed");
        }
    }
}
