//! Wire Models
//!
//! Records exchanged with the tracker backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Number of days shown in a history table (six past days plus today)
pub const HISTORY_DAYS: usize = 7;

/// Index of today's cell inside a week of history
pub const TODAY: usize = HISTORY_DAYS - 1;

/// Completed pomodoro counts for one activity, oldest day first
pub type WeekCounts = [u32; HISTORY_DAYS];

/// `GET history?cat_id=` payload, keyed by activity id
pub type WeekHistory = HashMap<i64, WeekCounts>;

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Activity data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    /// Daily pomodoro target
    #[serde(rename = "npom")]
    pub target: u32,
}

/// `GET activities?cat_id=` payload
///
/// The backend sends `null` for a category without activities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActivityList {
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
}

/// Response of every `.../new` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Created {
    pub id: i64,
}

/// Response of `POST history/do`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PomodoroDone {
    pub activity: i64,
    pub new_value: u32,
    /// Pomodoros still needed to reach today's target
    pub left: i64,
    #[serde(default)]
    pub last_updated: i64,
}

impl PomodoroDone {
    /// Target implied by the response, used to recolor today's cell
    pub fn target(&self) -> u32 {
        (i64::from(self.new_value) + self.left).max(0) as u32
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct CategoryNameArgs<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewActivityArgs<'a> {
    pub name: &'a str,
    pub npoms: u32,
    pub cat_id: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdateActivityArgs<'a> {
    pub name: &'a str,
    pub npom: u32,
}

#[derive(Debug, Serialize)]
pub struct DoPomodoroArgs {
    pub activity: i64,
    pub done_value: u32,
}
