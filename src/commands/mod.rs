//! Backend Bindings
//!
//! HTTP client for the tracker REST API, organized by resource.

mod activity;
mod category;
mod history;
mod user;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use pomodoro_core::{
    join_url, ActivityList, ApiError, ApiResult, Category, Created, PomodoroDone, TrackerApi,
    WeekHistory,
};

use crate::config::AppConfig;
use crate::storage;

/// Authenticated client; the bearer token is read from storage on every call
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClient {
    base: String,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = storage::session().token().ok_or(ApiError::NoSession)?;
        Ok(bearer(builder, &token))
    }

    async fn send(&self, request: Request) -> ApiResult<Response> {
        let url = request.url();
        tracing::debug!(%url, ">>");
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::debug!(%url, status = response.status(), "<<");
        if response.ok() {
            Ok(response)
        } else {
            let code = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(code, body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request =
            self.authorized(Request::get(&self.url(path)))?.build().map_err(request_error)?;
        let response = self.send(request).await?;
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request =
            self.authorized(Request::post(&self.url(path)))?.json(body).map_err(request_error)?;
        let response = self.send(request).await?;
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request =
            self.authorized(Request::put(&self.url(path)))?.json(body).map_err(request_error)?;
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let request =
            self.authorized(Request::delete(&self.url(path)))?.build().map_err(request_error)?;
        self.send(request).await.map(|_| ())
    }
}

fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

fn request_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("building request: {}", e))
}

#[async_trait(?Send)]
impl TrackerApi for HttpClient {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.fetch_categories().await
    }

    async fn list_activities(&self, cat_id: i64) -> ApiResult<ActivityList> {
        self.fetch_activities(cat_id).await
    }

    async fn list_history(&self, cat_id: i64) -> ApiResult<WeekHistory> {
        self.fetch_history(cat_id).await
    }

    async fn create_category(&self, name: &str) -> ApiResult<Created> {
        self.new_category(name).await
    }

    async fn rename_category(&self, id: i64, name: &str) -> ApiResult<()> {
        self.put_category_name(id, name).await
    }

    async fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.remove_category(id).await
    }

    async fn create_activity(&self, cat_id: i64, name: &str, target: u32) -> ApiResult<Created> {
        self.new_activity(cat_id, name, target).await
    }

    async fn update_activity(&self, id: i64, name: &str, target: u32) -> ApiResult<()> {
        self.put_activity(id, name, target).await
    }

    async fn delete_activity(&self, id: i64) -> ApiResult<()> {
        self.remove_activity(id).await
    }

    async fn record_pomodoro(&self, activity_id: i64) -> ApiResult<PomodoroDone> {
        self.do_pomodoro(activity_id).await
    }
}
