//! Date arithmetic for the calendar views.
//!
//! Pure functions only; rendering concerns (colors, events, holidays) are
//! layered on by the web handlers.

use chrono::{Datelike, NaiveDate, Weekday};

/// English month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday header labels, Sunday first to match the grid layout.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = next_month(year, month);
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next_first = NaiveDate::from_ymd_opt(next_y, next_m, 1).expect("valid month");
    next_first.signed_duration_since(first).num_days() as u32
}

/// All dates of one month in order.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .map(|d| NaiveDate::from_ymd_opt(year, month, d).expect("valid day"))
        .collect()
}

/// The month grid as rows of weeks starting Sunday.
///
/// Cells outside the month are `None`; every row has exactly seven cells.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<Option<NaiveDate>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    cells.extend(month_days(year, month).into_iter().map(Some));

    while !cells.len().is_multiple_of(7) {
        cells.push(None);
    }

    cells.chunks(7).map(|week| week.to_vec()).collect()
}

/// Monday through Friday count as workdays.
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The `(year, month)` pair preceding the given month.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// The `(year, month)` pair following the given month.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_month_grid_starts_sunday() {
        // June 2025 starts on a Sunday, so the first row has no padding.
        let grid = month_grid(2025, 6);
        assert_eq!(grid[0][0], NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(grid.len(), 5);

        // September 2025 starts on a Monday: one leading blank.
        let grid = month_grid(2025, 9);
        assert!(grid[0][0].is_none());
        assert_eq!(grid[0][1], NaiveDate::from_ymd_opt(2025, 9, 1));
    }

    #[test]
    fn test_month_grid_rows_are_full_weeks() {
        for month in 1..=12 {
            let grid = month_grid(2025, month);
            for week in &grid {
                assert_eq!(week.len(), 7);
            }
            let days: usize = grid
                .iter()
                .flatten()
                .filter(|c| c.is_some())
                .count();
            assert_eq!(days, days_in_month(2025, month) as usize);
        }
    }

    #[test]
    fn test_is_workday() {
        // 2025-06-16 is a Monday, 2025-06-21 a Saturday, 2025-06-22 a Sunday.
        assert!(is_workday(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()));
        assert!(is_workday(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()));
        assert!(!is_workday(NaiveDate::from_ymd_opt(2025, 6, 21).unwrap()));
        assert!(!is_workday(NaiveDate::from_ymd_opt(2025, 6, 22).unwrap()));
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(prev_month(2025, 7), (2025, 6));
        assert_eq!(next_month(2025, 7), (2025, 8));
    }
}
