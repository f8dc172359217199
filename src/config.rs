//! Runtime Configuration
//!
//! Read once at startup from an optional `window.POMODORO_CONFIG` object.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global JS object holding overrides
const CONFIG_GLOBAL: &str = "POMODORO_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for backend paths; empty means same-origin relative URLs
    pub api_base: String,
    /// How often the login state is re-validated in the background
    pub session_check_interval_secs: u32,
    /// Permissions requested from the login provider
    pub login_scope: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            session_check_interval_secs: 3600,
            login_scope: "public_profile,email".to_string(),
        }
    }
}

impl AppConfig {
    /// Load overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid {}, using defaults", CONFIG_GLOBAL);
                Self::default()
            }
        }
    }

    pub fn session_check_interval_ms(&self) -> u32 {
        self.session_check_interval_secs.saturating_mul(1000)
    }
}
