use chrono::{Datelike, NaiveDate};

use crate::constants::DAYS_PER_YEAR;

/// Normalizes a date to the first day of its calendar month.
///
/// Snapshots are recorded at month granularity; whatever day the caller
/// supplies, the month key is always the 1st.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the first and last day of a calendar year, or `None` for a year
/// chrono cannot represent.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((start, end))
}

/// Calendar-exact day count from `start` to `end` expressed in 365-day years.
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

/// Zero-based month index (January = 0).
pub fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}
