//! Login Provider Bindings
//!
//! Thin wrappers over the third-party login SDK (`FB`) plus the exchange of
//! its response for a backend session.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use pomodoro_core::LoginOutcome;

use crate::commands::HttpClient;
use crate::storage;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = FB, js_name = getLoginStatus)]
    fn fb_get_login_status(callback: &js_sys::Function) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = FB, js_name = login)]
    fn fb_login(callback: &js_sys::Function, options: &JsValue) -> Result<(), JsValue>;
}

/// Subset of the SDK's status response
#[derive(Debug, Clone, Deserialize)]
struct LoginStatus {
    #[serde(rename = "authResponse")]
    auth_response: Option<AuthResponse>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuthResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "expiresIn")]
    expires_in: f64,
}

#[derive(serde::Serialize)]
struct LoginOptions<'a> {
    scope: &'a str,
}

/// What the page should show after a login check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginResult {
    /// Session stored
    Accepted,
    /// Show the "not allowed" banner
    NotAllowed,
    /// Nothing to do (no provider session, or a logged failure)
    Ignored,
}

/// Turn a JS callback API into a future resolving with the callback argument
async fn callback_future(
    call: impl FnOnce(&js_sys::Function) -> Result<(), JsValue>,
) -> Result<JsValue, JsValue> {
    let mut call = Some(call);
    let mut call_error = None;
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let callback = Closure::once_into_js(move |response: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &response);
        });
        if let Some(call) = call.take() {
            if let Err(e) = call(callback.unchecked_ref()) {
                call_error = Some(e);
            }
        }
    });
    if let Some(e) = call_error {
        return Err(e);
    }
    JsFuture::from(promise).await
}

/// Ask the provider for its current status and exchange it with the backend.
///
/// With `refresh`, an accepted login reloads the page.
pub async fn check_login_state(client: &HttpClient, refresh: bool) -> LoginResult {
    match callback_future(fb_get_login_status).await {
        Ok(response) => exchange(client, response, refresh).await,
        Err(e) => {
            tracing::error!(error = ?e, "login provider unavailable");
            LoginResult::Ignored
        }
    }
}

/// Open the provider's login dialog, then exchange the result
pub async fn login(client: &HttpClient, scope: &str) -> LoginResult {
    let options = match serde_wasm_bindgen::to_value(&LoginOptions { scope }) {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "encoding login options");
            return LoginResult::Ignored;
        }
    };
    match callback_future(|callback| fb_login(callback, &options)).await {
        Ok(response) => exchange(client, response, true).await,
        Err(e) => {
            tracing::error!(error = ?e, "login provider unavailable");
            LoginResult::Ignored
        }
    }
}

async fn exchange(client: &HttpClient, response: JsValue, refresh: bool) -> LoginResult {
    let status: LoginStatus = match serde_wasm_bindgen::from_value(response.clone()) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(error = %e, "unexpected login provider response");
            return LoginResult::Ignored;
        }
    };
    let Some(auth) = status.auth_response else {
        tracing::debug!("no provider session");
        return LoginResult::Ignored;
    };

    let payload = match js_sys::JSON::stringify(&response) {
        Ok(json) => String::from(json),
        Err(e) => {
            tracing::error!(error = ?e, "serializing login response");
            return LoginResult::Ignored;
        }
    };

    tracing::debug!(expires_in = auth.expires_in, "exchanging login");
    match client.exchange_login(&auth.access_token, payload).await {
        Ok(LoginOutcome::Accepted) => {
            if !storage::persist_session(&auth.access_token, auth.expires_in) {
                tracing::error!("login accepted but the session could not be stored");
                return LoginResult::Ignored;
            }
            if refresh {
                storage::reload_page();
            }
            LoginResult::Accepted
        }
        Ok(LoginOutcome::NotAllowed) => {
            tracing::warn!("user is not allowed");
            LoginResult::NotAllowed
        }
        Ok(LoginOutcome::Failed(status)) => {
            tracing::error!(status, "users/new failed");
            LoginResult::Ignored
        }
        Err(e) => {
            tracing::error!(error = %e, "users/new failed");
            LoginResult::Ignored
        }
    }
}
