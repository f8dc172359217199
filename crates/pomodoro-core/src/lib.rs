//! Pomodoro Tracker Core
//!
//! Platform-independent pieces of the tracker frontend: wire models, the
//! board view-model, session bookkeeping and the edit queue.

mod api;
mod board;
mod calendar;
mod edit_queue;
mod error;
mod grade;
mod loader;
mod models;
mod session;

pub use api::{classify_login_status, join_url, LoginOutcome, TrackerApi};
pub use board::{ActivityRow, Board, Cell, CategoryView};
pub use calendar::{day_label, last_7_days, local_today};
pub use edit_queue::{EditAction, EditController, EditSession, ReplayReport};
pub use error::{ApiError, ApiResult};
pub use grade::{cell_class, CellClass};
pub use loader::load_board;
pub use models::*;
pub use session::{KeyValueStore, SessionStore, EXPIRY_KEY, TOKEN_KEY};
