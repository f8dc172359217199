//! Category Endpoints

use pomodoro_core::{ApiResult, Category, CategoryNameArgs, Created};

use super::HttpClient;

impl HttpClient {
    pub(super) async fn fetch_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_json("categories").await
    }

    pub(super) async fn new_category(&self, name: &str) -> ApiResult<Created> {
        self.post_json("categories/new", &CategoryNameArgs { name }).await
    }

    pub(super) async fn put_category_name(&self, id: i64, name: &str) -> ApiResult<()> {
        self.put_json(&format!("categories/{}", id), &CategoryNameArgs { name }).await
    }

    pub(super) async fn remove_category(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("categories/{}", id)).await
    }
}
