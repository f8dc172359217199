//! Calendar Helpers
//!
//! Column labels for the trailing week shown in history tables.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::HISTORY_DAYS;

/// Labels for the seven days ending with `today`, oldest first.
///
/// Each label reads `"<Weekday> <D>/<M>/<YYYY>"`, e.g. `"Mon 5/3/2018"`.
pub fn last_7_days(today: NaiveDate) -> Vec<String> {
    (0..HISTORY_DAYS as u64)
        .rev()
        .map(|offset| {
            let day = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
            day_label(day)
        })
        .collect()
}

/// Label for a single column
pub fn day_label(day: NaiveDate) -> String {
    format!("{} {}/{}/{}", day.format("%a"), day.day(), day.month(), day.year())
}

/// Today's date in the local time zone
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_7_days_ends_today() {
        let labels = last_7_days(date(2018, 3, 5));
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[6], "Mon 5/3/2018");
        assert_eq!(labels[0], "Tue 27/2/2018");
    }

    #[test]
    fn test_last_7_days_crosses_year() {
        let labels = last_7_days(date(2024, 1, 2));
        assert_eq!(
            labels,
            vec![
                "Wed 27/12/2023",
                "Thu 28/12/2023",
                "Fri 29/12/2023",
                "Sat 30/12/2023",
                "Sun 31/12/2023",
                "Mon 1/1/2024",
                "Tue 2/1/2024",
            ]
        );
    }
}
