//! Backend API Abstraction
//!
//! The REST surface the frontend consumes. The browser implementation lives
//! in the UI crate; tests substitute a recording fake.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{ActivityList, Category, Created, PomodoroDone, WeekHistory};

/// Authenticated calls against the tracker backend
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait TrackerApi {
    /// `GET categories`
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;

    /// `GET activities?cat_id=`
    async fn list_activities(&self, cat_id: i64) -> ApiResult<ActivityList>;

    /// `GET history?cat_id=`
    async fn list_history(&self, cat_id: i64) -> ApiResult<WeekHistory>;

    /// `POST categories/new`
    async fn create_category(&self, name: &str) -> ApiResult<Created>;

    /// `PUT categories/{id}`
    async fn rename_category(&self, id: i64, name: &str) -> ApiResult<()>;

    /// `DELETE categories/{id}`
    async fn delete_category(&self, id: i64) -> ApiResult<()>;

    /// `POST activities/new`
    async fn create_activity(&self, cat_id: i64, name: &str, target: u32) -> ApiResult<Created>;

    /// `PUT activities/{id}`
    async fn update_activity(&self, id: i64, name: &str, target: u32) -> ApiResult<()>;

    /// `DELETE activities/{id}`
    async fn delete_activity(&self, id: i64) -> ApiResult<()>;

    /// `POST history/do` with a single completed pomodoro
    async fn record_pomodoro(&self, activity_id: i64) -> ApiResult<PomodoroDone>;
}

/// Result of exchanging a login-provider response for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// User registered (or already known): keep the token
    Accepted,
    /// User is not on the backend's allow list
    NotAllowed,
    /// Anything else; logged only
    Failed(u16),
}

/// Classify the `POST users/new` status code
pub fn classify_login_status(code: u16) -> LoginOutcome {
    match code {
        403 => LoginOutcome::NotAllowed,
        200..=299 | 409 => LoginOutcome::Accepted,
        other => LoginOutcome::Failed(other),
    }
}

/// Join the configured API base with a relative endpoint path.
///
/// An empty base keeps the path relative to the page.
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}
