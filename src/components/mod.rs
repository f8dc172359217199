//! UI Components
//!
//! Leptos components for the tracker page.

mod activity_row;
mod add_activity_form;
mod category_pane;
mod category_tabs;
mod delete_confirm_button;
mod history_table;
mod nav_bar;
mod not_allowed_alert;

pub use activity_row::ActivityRow;
pub use add_activity_form::AddActivityForm;
pub use category_pane::CategoryPane;
pub use category_tabs::CategoryTabs;
pub use delete_confirm_button::DeleteConfirmButton;
pub use history_table::HistoryTable;
pub use nav_bar::NavBar;
pub use not_allowed_alert::NotAllowedAlert;
