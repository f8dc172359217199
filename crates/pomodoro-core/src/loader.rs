//! Board Loader
//!
//! Fetches categories once, then each category's activities and history in
//! array order, one request at a time.

use crate::api::TrackerApi;
use crate::board::{Board, CategoryView};
use crate::error::ApiResult;
use crate::models::{Category, WeekHistory};

/// Load the full board. Only a failing category list is an error.
pub async fn load_board<A: TrackerApi + ?Sized>(api: &A) -> ApiResult<Board> {
    tracing::debug!("fetching categories");
    let categories = api.list_categories().await?;
    tracing::debug!(count = categories.len(), "categories loaded");

    let mut views = Vec::with_capacity(categories.len());
    for category in categories {
        views.push(load_category(api, category).await);
    }
    Ok(Board::from_views(views))
}

async fn load_category<A: TrackerApi + ?Sized>(api: &A, category: Category) -> CategoryView {
    let cat_id = category.id;

    let activities = match api.list_activities(cat_id).await {
        Ok(list) => list.activities,
        Err(err) => {
            tracing::error!(cat_id, error = %err, "fetching activities failed");
            None
        }
    };
    if activities.is_none() {
        tracing::info!(cat_id, "empty list of activities");
    }

    let history = match api.list_history(cat_id).await {
        Ok(history) => history,
        Err(err) => {
            tracing::error!(cat_id, error = %err, "fetching history failed");
            WeekHistory::new()
        }
    };

    CategoryView::new(category, activities, &history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Activity, ActivityList, Created, PomodoroDone};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned data and records request order
    #[derive(Default)]
    struct FakeBackend {
        categories: Option<Vec<Category>>,
        activities: HashMap<i64, Vec<Activity>>,
        history: HashMap<i64, WeekHistory>,
        log: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl TrackerApi for FakeBackend {
        async fn list_categories(&self) -> ApiResult<Vec<Category>> {
            self.log.borrow_mut().push("categories".into());
            self.categories.clone().ok_or(ApiError::Network("offline".into()))
        }
        async fn list_activities(&self, cat_id: i64) -> ApiResult<ActivityList> {
            self.log.borrow_mut().push(format!("activities {}", cat_id));
            Ok(ActivityList { activities: self.activities.get(&cat_id).cloned() })
        }
        async fn list_history(&self, cat_id: i64) -> ApiResult<WeekHistory> {
            self.log.borrow_mut().push(format!("history {}", cat_id));
            self.history
                .get(&cat_id)
                .cloned()
                .ok_or(ApiError::from_status(500, String::new()))
        }
        async fn create_category(&self, _name: &str) -> ApiResult<Created> {
            unimplemented!()
        }
        async fn rename_category(&self, _id: i64, _name: &str) -> ApiResult<()> {
            unimplemented!()
        }
        async fn delete_category(&self, _id: i64) -> ApiResult<()> {
            unimplemented!()
        }
        async fn create_activity(
            &self,
            _cat_id: i64,
            _name: &str,
            _target: u32,
        ) -> ApiResult<Created> {
            unimplemented!()
        }
        async fn update_activity(&self, _id: i64, _name: &str, _target: u32) -> ApiResult<()> {
            unimplemented!()
        }
        async fn delete_activity(&self, _id: i64) -> ApiResult<()> {
            unimplemented!()
        }
        async fn record_pomodoro(&self, _activity_id: i64) -> ApiResult<PomodoroDone> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_loads_sequentially_in_order() {
        let mut backend = FakeBackend {
            categories: Some(vec![
                Category { id: 1, name: "Work".into() },
                Category { id: 2, name: "Home".into() },
            ]),
            ..Default::default()
        };
        backend.activities.insert(1, vec![Activity { id: 10, name: "Write".into(), target: 4 }]);
        backend.history.insert(1, HashMap::from([(10, [0, 1, 2, 0, 3, 4, 0])]));

        let board = load_board(&backend).await.unwrap();

        assert_eq!(
            *backend.log.borrow(),
            vec!["categories", "activities 1", "history 1", "activities 2", "history 2"]
        );
        assert!(board.is_active(1));
        assert_eq!(board.row(10).unwrap().history, [0, 1, 2, 0, 3, 4, 0]);
        // Category 2 had no activities and a failing history call
        assert!(board.category(2).unwrap().table.is_none());
    }

    #[tokio::test]
    async fn test_category_failure_is_error() {
        let backend = FakeBackend::default();
        assert!(load_board(&backend).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_board() {
        let backend = FakeBackend { categories: Some(vec![]), ..Default::default() };
        let board = load_board(&backend).await.unwrap();
        assert!(board.categories.is_empty());
        assert_eq!(board.active, None);
    }
}
