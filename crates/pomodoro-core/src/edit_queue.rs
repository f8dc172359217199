//! Edit Queue
//!
//! While edit mode is on, activity renames and removals are applied to the
//! board right away and queued here. Committing replays the queue one call at
//! a time in enqueue order; a failed call is logged and the replay moves on.

use crate::api::TrackerApi;
use crate::error::{ApiError, ApiResult};

/// A queued activity edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Update { activity_id: i64, name: String, target: u32 },
    Remove { activity_id: i64 },
}

impl EditAction {
    pub fn activity_id(&self) -> i64 {
        match self {
            EditAction::Update { activity_id, .. } | EditAction::Remove { activity_id } => {
                *activity_id
            }
        }
    }

    async fn apply<A: TrackerApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        match self {
            EditAction::Update { activity_id, name, target } => {
                api.update_activity(*activity_id, name, *target).await
            }
            EditAction::Remove { activity_id } => api.delete_activity(*activity_id).await,
        }
    }
}

/// Outcome of a replay
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: Vec<EditAction>,
    pub failed: Vec<(EditAction, ApiError)>,
}

/// Queue of one editing session, append-only until replayed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditSession {
    actions: Vec<EditAction>,
}

impl EditSession {
    pub fn push(&mut self, action: EditAction) {
        tracing::debug!(?action, "queued edit");
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[EditAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Replay every action sequentially; the session is consumed either way
    pub async fn replay<A: TrackerApi + ?Sized>(self, api: &A) -> ReplayReport {
        let mut report = ReplayReport::default();
        for action in self.actions {
            match action.apply(api).await {
                Ok(()) => report.applied.push(action),
                Err(err) => {
                    tracing::error!(
                        activity = action.activity_id(),
                        error = %err,
                        "edit replay failed"
                    );
                    report.failed.push((action, err));
                }
            }
        }
        tracing::info!(
            applied = report.applied.len(),
            failed = report.failed.len(),
            "edit queue flushed"
        );
        report
    }
}

/// Edit mode state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum EditState {
    #[default]
    Idle,
    Editing(EditSession),
    /// Queue handed over for replay; nothing can be queued until it drains
    Committing,
}

/// Idle / Editing / Committing state holder
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditController {
    state: EditState,
}

impl EditController {
    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    pub fn is_committing(&self) -> bool {
        self.state == EditState::Committing
    }

    /// Idle -> Editing. Returns false if already editing or still committing.
    pub fn start(&mut self) -> bool {
        if self.state != EditState::Idle {
            return false;
        }
        self.state = EditState::Editing(EditSession::default());
        true
    }

    /// Queue a rename; ignored unless editing
    pub fn queue_update(&mut self, activity_id: i64, name: &str, target: u32) -> bool {
        self.queue(EditAction::Update { activity_id, name: name.to_string(), target })
    }

    /// Queue a removal; ignored unless editing
    pub fn queue_remove(&mut self, activity_id: i64) -> bool {
        self.queue(EditAction::Remove { activity_id })
    }

    fn queue(&mut self, action: EditAction) -> bool {
        match &mut self.state {
            EditState::Editing(session) => {
                session.push(action);
                true
            }
            EditState::Committing => {
                tracing::warn!(?action, "edit rejected while the queue is replaying");
                false
            }
            EditState::Idle => false,
        }
    }

    /// Editing -> Idle, dropping the queue. Nothing is sent.
    pub fn cancel(&mut self) -> Option<EditSession> {
        let EditState::Editing(session) = std::mem::take(&mut self.state) else {
            self.state = EditState::Idle;
            return None;
        };
        tracing::debug!(discarded = session.actions().len(), "edit session cancelled");
        Some(session)
    }

    /// Editing -> Committing, handing the queue over for replay.
    ///
    /// Call [`EditController::complete`] once the replay has drained.
    pub fn finish(&mut self) -> Option<EditSession> {
        match std::mem::take(&mut self.state) {
            EditState::Editing(session) => {
                self.state = EditState::Committing;
                Some(session)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Committing -> Idle
    pub fn complete(&mut self) {
        if self.is_committing() {
            self.state = EditState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityList, Category, Created, PomodoroDone, WeekHistory};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records edit calls, failing those whose id is listed
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
        fail_ids: Vec<i64>,
    }

    impl RecordingApi {
        fn outcome(&self, id: i64) -> ApiResult<()> {
            if self.fail_ids.contains(&id) {
                Err(ApiError::from_status(500, "boom".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl TrackerApi for RecordingApi {
        async fn list_categories(&self) -> ApiResult<Vec<Category>> {
            unimplemented!()
        }
        async fn list_activities(&self, _cat_id: i64) -> ApiResult<ActivityList> {
            unimplemented!()
        }
        async fn list_history(&self, _cat_id: i64) -> ApiResult<WeekHistory> {
            unimplemented!()
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
        async fn update_activity(&self, id: i64, name: &str, target: u32) -> ApiResult<()> {
            self.calls.borrow_mut().push(format!("update {} {} {}", id, name, target));
            self.outcome(id)
        }
        async fn delete_activity(&self, id: i64) -> ApiResult<()> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            self.outcome(id)
        }
        async fn record_pomodoro(&self, _activity_id: i64) -> ApiResult<PomodoroDone> {
            unimplemented!()
        }
    }

    #[test]
    fn test_queue_ignored_while_idle() {
        let mut ctl = EditController::default();
        assert!(!ctl.is_editing());
        assert!(!ctl.queue_remove(1));
        assert!(ctl.finish().is_none());
    }

    #[test]
    fn test_start_twice() {
        let mut ctl = EditController::default();
        assert!(ctl.start());
        ctl.queue_remove(1);
        assert!(!ctl.start());
        // Queue survives the second start
        assert_eq!(ctl.finish().unwrap().actions().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_sends_nothing() {
        let api = RecordingApi::default();
        let mut ctl = EditController::default();
        ctl.start();
        ctl.queue_update(1, "A", 2);
        ctl.queue_remove(2);

        let dropped = ctl.cancel().unwrap();
        assert_eq!(dropped.actions().len(), 2);
        assert!(!ctl.is_editing());
        assert!(ctl.finish().is_none());
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_replay_in_order_past_failures() {
        let api = RecordingApi { fail_ids: vec![2], ..Default::default() };
        let mut ctl = EditController::default();
        ctl.start();
        ctl.queue_update(1, "One", 1);
        ctl.queue_remove(2);
        ctl.queue_update(3, "Three", 3);

        let report = ctl.finish().unwrap().replay(&api).await;

        assert_eq!(*api.calls.borrow(), vec!["update 1 One 1", "delete 2", "update 3 Three 3"]);
        assert_eq!(report.applied.len(), 2);
        assert_eq!(report.applied[0].activity_id(), 1);
        assert_eq!(report.applied[1].activity_id(), 3);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, EditAction::Remove { activity_id: 2 });
        assert!(!ctl.is_editing());
        assert!(ctl.is_committing());
    }

    #[tokio::test]
    async fn test_edits_rejected_until_replay_completes() {
        let api = RecordingApi::default();
        let mut ctl = EditController::default();
        ctl.start();
        ctl.queue_remove(1);
        let session = ctl.finish().unwrap();

        // Replay window: nothing can be queued, restarted or finished again
        assert!(ctl.is_committing());
        assert!(!ctl.queue_update(2, "X", 1));
        assert!(!ctl.queue_remove(3));
        assert!(!ctl.start());
        assert!(ctl.finish().is_none());
        assert!(ctl.cancel().is_none());
        assert!(ctl.is_committing());

        let report = session.replay(&api).await;
        assert_eq!(report.applied, vec![EditAction::Remove { activity_id: 1 }]);
        assert_eq!(*api.calls.borrow(), vec!["delete 1"]);

        ctl.complete();
        assert!(!ctl.is_committing());
        assert!(ctl.start());
        assert!(ctl.queue_update(2, "X", 1));
    }

    #[tokio::test]
    async fn test_new_session_starts_empty() {
        let api = RecordingApi::default();
        let mut ctl = EditController::default();
        ctl.start();
        ctl.queue_remove(7);
        ctl.finish().unwrap().replay(&api).await;
        ctl.complete();

        assert!(ctl.start());
        assert!(ctl.finish().unwrap().is_empty());
    }
}
