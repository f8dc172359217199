//! User Endpoints

use gloo_net::http::Request;
use pomodoro_core::{classify_login_status, ApiError, ApiResult, LoginOutcome};

use super::{bearer, request_error, HttpClient};

impl HttpClient {
    /// Exchange a login-provider response for a session.
    ///
    /// Authenticated with the provider's temporary token, not the stored one.
    /// Only transport failures are errors; every status maps to an outcome.
    pub async fn exchange_login(
        &self,
        provider_token: &str,
        payload: String,
    ) -> ApiResult<LoginOutcome> {
        let request = bearer(Request::post(&self.url("users/new")), provider_token)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(request_error)?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        tracing::debug!(status, "users/new");
        Ok(classify_login_status(status))
    }
}
