//! Activity Endpoints

use pomodoro_core::{ActivityList, ApiResult, Created, NewActivityArgs, UpdateActivityArgs};

use super::HttpClient;

impl HttpClient {
    pub(super) async fn fetch_activities(&self, cat_id: i64) -> ApiResult<ActivityList> {
        self.get_json(&format!("activities?cat_id={}", cat_id)).await
    }

    pub(super) async fn new_activity(
        &self,
        cat_id: i64,
        name: &str,
        target: u32,
    ) -> ApiResult<Created> {
        let args = NewActivityArgs { name, npoms: target, cat_id };
        self.post_json("activities/new", &args).await
    }

    pub(super) async fn put_activity(&self, id: i64, name: &str, target: u32) -> ApiResult<()> {
        let args = UpdateActivityArgs { name, npom: target };
        self.put_json(&format!("activities/{}", id), &args).await
    }

    pub(super) async fn remove_activity(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("activities/{}", id)).await
    }
}
