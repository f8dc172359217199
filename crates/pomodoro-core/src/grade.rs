//! Cell Grading
//!
//! Severity class of a history cell, compared against the activity target.

/// CSS class of a history cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Target reached
    Success,
    /// Started but below target
    Info,
    /// Nothing done
    Danger,
}

impl CellClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellClass::Success => "success",
            CellClass::Info => "info",
            CellClass::Danger => "danger",
        }
    }
}

/// Grade `real` completed pomodoros against `target`
pub fn cell_class(real: u32, target: u32) -> CellClass {
    if real == 0 {
        CellClass::Danger
    } else if real >= target {
        CellClass::Success
    } else {
        CellClass::Info
    }
}
