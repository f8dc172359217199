//! History Endpoints

use pomodoro_core::{ApiResult, DoPomodoroArgs, PomodoroDone, WeekHistory};

use super::HttpClient;

impl HttpClient {
    pub(super) async fn fetch_history(&self, cat_id: i64) -> ApiResult<WeekHistory> {
        self.get_json(&format!("history?cat_id={}", cat_id)).await
    }

    /// One completed pomodoro for today
    pub(super) async fn do_pomodoro(&self, activity_id: i64) -> ApiResult<PomodoroDone> {
        self.post_json("history/do", &DoPomodoroArgs { activity: activity_id, done_value: 1 }).await
    }
}
