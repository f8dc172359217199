//! Board View-Model
//!
//! In-memory state the UI projects to the DOM: one pane per category, each
//! with an optional history table keyed by activity id.

use crate::grade::{cell_class, CellClass};
use crate::models::{
    Activity, Category, PomodoroDone, WeekCounts, WeekHistory, HISTORY_DAYS, TODAY,
};

/// One history table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub target: u32,
    pub history: WeekCounts,
}

/// A graded history cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub class: CellClass,
}

impl ActivityRow {
    pub fn new(activity: Activity, history: Option<WeekCounts>) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            target: activity.target,
            history: history.unwrap_or([0; HISTORY_DAYS]),
        }
    }

    /// Row header, e.g. `"Write (4)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.target)
    }

    /// The six past days, oldest first
    pub fn past_cells(&self) -> Vec<Cell> {
        self.history[..TODAY].iter().map(|&value| self.cell(value)).collect()
    }

    /// Today's cell (hosts the increment control)
    pub fn today_cell(&self) -> Cell {
        self.cell(self.history[TODAY])
    }

    fn cell(&self, value: u32) -> Cell {
        Cell { value, class: cell_class(value, self.target) }
    }
}

/// A category pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category: Category,
    /// `None` until the category has at least one activity
    pub table: Option<Vec<ActivityRow>>,
}

impl CategoryView {
    pub fn new(
        category: Category,
        activities: Option<Vec<Activity>>,
        history: &WeekHistory,
    ) -> Self {
        let table = activities.map(|acts| {
            acts.into_iter()
                .map(|act| {
                    let hist = history.get(&act.id).copied();
                    ActivityRow::new(act, hist)
                })
                .collect()
        });
        Self { category, table }
    }

    /// Pane element id, e.g. `"cat3"`
    pub fn pane_id(&self) -> String {
        format!("cat{}", self.category.id)
    }

    pub fn rows(&self) -> &[ActivityRow] {
        self.table.as_deref().unwrap_or(&[])
    }

    /// Row ids in table order; rows are rendered keyed on these
    pub fn row_ids(&self) -> Vec<i64> {
        self.rows().iter().map(|row| row.id).collect()
    }
}

/// All category panes plus the active tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub categories: Vec<CategoryView>,
    /// Id of the category whose pill is active
    pub active: Option<i64>,
}

impl Board {
    /// Build a board from panes in fetch order; the first pane is active
    pub fn from_views(categories: Vec<CategoryView>) -> Self {
        let active = categories.first().map(|view| view.category.id);
        Self { categories, active }
    }

    pub fn is_active(&self, cat_id: i64) -> bool {
        self.active == Some(cat_id)
    }

    pub fn select(&mut self, cat_id: i64) {
        if self.category(cat_id).is_some() {
            self.active = Some(cat_id);
        }
    }

    pub fn category(&self, cat_id: i64) -> Option<&CategoryView> {
        self.categories.iter().find(|view| view.category.id == cat_id)
    }

    fn category_mut(&mut self, cat_id: i64) -> Option<&mut CategoryView> {
        self.categories.iter_mut().find(|view| view.category.id == cat_id)
    }

    fn row_mut(&mut self, activity_id: i64) -> Option<&mut ActivityRow> {
        self.categories
            .iter_mut()
            .filter_map(|view| view.table.as_mut())
            .flat_map(|rows| rows.iter_mut())
            .find(|row| row.id == activity_id)
    }

    pub fn row(&self, activity_id: i64) -> Option<&ActivityRow> {
        self.categories
            .iter()
            .flat_map(|view| view.rows().iter())
            .find(|row| row.id == activity_id)
    }

    /// Append a freshly created (empty) category.
    ///
    /// Only the first category of an empty board becomes active.
    pub fn add_category(&mut self, category: Category) {
        if self.categories.is_empty() {
            self.active = Some(category.id);
        }
        self.categories.push(CategoryView { category, table: None });
    }

    pub fn rename_category(&mut self, cat_id: i64, name: &str) -> bool {
        match self.category_mut(cat_id) {
            Some(view) => {
                view.category.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Drop a category pane; the first remaining one takes over the active tab
    pub fn remove_category(&mut self, cat_id: i64) -> bool {
        let before = self.categories.len();
        self.categories.retain(|view| view.category.id != cat_id);
        if self.active == Some(cat_id) {
            self.active = self.categories.first().map(|view| view.category.id);
        }
        self.categories.len() != before
    }

    /// Append a new activity row, creating the table on first use
    pub fn add_activity(&mut self, cat_id: i64, activity: Activity) -> bool {
        let Some(view) = self.category_mut(cat_id) else {
            return false;
        };
        let row = ActivityRow::new(activity, None);
        match view.table.as_mut() {
            Some(rows) => rows.push(row),
            None => view.table = Some(vec![row]),
        }
        true
    }

    pub fn rename_activity(&mut self, activity_id: i64, name: &str, target: u32) -> bool {
        match self.row_mut(activity_id) {
            Some(row) => {
                row.name = name.to_string();
                row.target = target;
                true
            }
            None => false,
        }
    }

    /// Remove a row; the (possibly empty) table stays in place
    pub fn remove_activity(&mut self, activity_id: i64) -> bool {
        for rows in self.categories.iter_mut().filter_map(|view| view.table.as_mut()) {
            if let Some(pos) = rows.iter().position(|row| row.id == activity_id) {
                rows.remove(pos);
                return true;
            }
        }
        false
    }

    /// Apply a `history/do` response to today's cell
    pub fn record_pomodoro(&mut self, done: &PomodoroDone) -> bool {
        match self.row_mut(done.activity) {
            Some(row) => {
                row.history[TODAY] = done.new_value;
                row.target = done.target();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cat(id: i64, name: &str) -> Category {
        Category { id, name: name.to_string() }
    }

    fn act(id: i64, name: &str, target: u32) -> Activity {
        Activity { id, name: name.to_string(), target }
    }

    #[test]
    fn test_example_row() {
        let mut hist = HashMap::new();
        hist.insert(10, [0, 1, 2, 0, 3, 4, 0]);
        let view = CategoryView::new(cat(1, "Work"), Some(vec![act(10, "Write", 4)]), &hist);
        let board = Board::from_views(vec![view]);

        assert!(board.is_active(1));
        let row = board.row(10).unwrap();
        assert_eq!(row.label(), "Write (4)");

        let past = row.past_cells();
        let values: Vec<_> = past.iter().map(|c| c.value).collect();
        let classes: Vec<_> = past.iter().map(|c| c.class.as_str()).collect();
        assert_eq!(values, [0, 1, 2, 0, 3, 4]);
        assert_eq!(classes, ["danger", "info", "info", "danger", "info", "success"]);
        assert_eq!(row.today_cell(), Cell { value: 0, class: CellClass::Danger });
    }

    #[test]
    fn test_missing_history_is_zeroes() {
        let view =
            CategoryView::new(cat(1, "Work"), Some(vec![act(10, "Write", 4)]), &HashMap::new());
        assert_eq!(view.rows()[0].history, [0; 7]);
    }

    #[test]
    fn test_missing_activity_list_has_no_table() {
        let view = CategoryView::new(cat(2, "Home"), None, &HashMap::new());
        assert!(view.table.is_none());
        assert_eq!(view.pane_id(), "cat2");
    }

    #[test]
    fn test_first_category_becomes_active() {
        let mut board = Board::default();
        board.add_category(cat(5, "Work"));
        assert!(board.is_active(5));
        assert!(board.categories[0].table.is_none());

        board.add_category(cat(6, "Home"));
        assert!(board.is_active(5));
        assert_eq!(board.categories.len(), 2);
    }

    #[test]
    fn test_add_activity_creates_then_appends() {
        let mut board = Board::default();
        board.add_category(cat(1, "Work"));

        assert!(board.add_activity(1, act(10, "Write", 4)));
        assert_eq!(board.category(1).unwrap().rows().len(), 1);

        assert!(board.add_activity(1, act(11, "Read", 2)));
        let rows = board.category(1).unwrap().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, 11);

        assert!(!board.add_activity(99, act(12, "Lost", 1)));
    }

    #[test]
    fn test_rename_and_remove_activity() {
        let mut board = Board::default();
        board.add_category(cat(1, "Work"));
        board.add_activity(1, act(10, "Write", 4));

        assert!(board.rename_activity(10, "Draft", 3));
        assert_eq!(board.row(10).unwrap().label(), "Draft (3)");

        assert!(board.remove_activity(10));
        assert!(board.row(10).is_none());
        assert!(!board.remove_activity(10));
        // Table remains, now empty
        assert!(board.category(1).unwrap().table.is_some());
    }

    #[test]
    fn test_record_pomodoro_updates_today() {
        let mut board = Board::default();
        board.add_category(cat(1, "Work"));
        board.add_activity(1, act(10, "Write", 2));

        let done = PomodoroDone { activity: 10, new_value: 1, left: 1, last_updated: 0 };
        assert!(board.record_pomodoro(&done));
        assert_eq!(
            board.row(10).unwrap().today_cell(),
            Cell { value: 1, class: CellClass::Info }
        );

        let done = PomodoroDone { activity: 10, new_value: 2, left: 0, last_updated: 0 };
        board.record_pomodoro(&done);
        assert_eq!(board.row(10).unwrap().today_cell().class, CellClass::Success);
    }

    #[test]
    fn test_row_keys_survive_sibling_changes() {
        let mut board = Board::default();
        board.add_category(cat(1, "Work"));
        for (id, name) in [(10, "Write"), (11, "Read"), (12, "Review")] {
            board.add_activity(1, act(id, name, 2));
        }
        assert_eq!(board.category(1).unwrap().row_ids(), [10, 11, 12]);

        let done = PomodoroDone { activity: 12, new_value: 1, left: 1, last_updated: 0 };
        board.record_pomodoro(&done);
        assert_eq!(board.category(1).unwrap().row_ids(), [10, 11, 12]);

        board.remove_activity(11);
        assert_eq!(board.category(1).unwrap().row_ids(), [10, 12]);
        assert_eq!(board.row(12).unwrap().today_cell().value, 1);
        assert!(CategoryView::new(cat(2, "Home"), None, &HashMap::new()).row_ids().is_empty());
    }

    #[test]
    fn test_remove_active_category_moves_active() {
        let mut board = Board::from_views(vec![
            CategoryView { category: cat(1, "Work"), table: None },
            CategoryView { category: cat(2, "Home"), table: None },
        ]);
        assert!(board.rename_category(2, "House"));
        assert_eq!(board.category(2).unwrap().category.name, "House");

        assert!(board.remove_category(1));
        assert!(board.is_active(2));
        assert!(board.remove_category(2));
        assert_eq!(board.active, None);
    }
}
