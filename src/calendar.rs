//! Calendar mapping for a fixed non-leap reading year.
//!
//! The plan assigns one reading to each of the 365 days of a non-leap year.
//! Source files key days either by plain day-of-year (1..=365) or by the
//! plan's `MMDD` integer encoding (101 = Jan 1, 1005 = Oct 5, 1231 = Dec 31).
//! The specific year is arbitrary as long as it is not a leap year; 2025 is
//! used throughout.

use chrono::{Datelike, NaiveDate};

/// Year used for the day-of-year ↔ date mapping. Must be a non-leap year.
pub const PLAN_YEAR: i32 = 2025;

/// Number of days in the plan.
pub const DAYS_IN_YEAR: usize = 365;

/// Length of one plan week in days.
pub const DAYS_IN_WEEK: usize = 7;

/// Number of contiguous 7-day weeks covering the plan (week 53 holds day 365).
pub const WEEKS_IN_YEAR: usize = 53;

/// Calendar date for a 1-based day-of-year, or `None` outside 1..=365.
pub fn date_of_day(day_index: u16) -> Option<NaiveDate> {
    if !(1..=DAYS_IN_YEAR as u16).contains(&day_index) {
        return None;
    }
    NaiveDate::from_yo_opt(PLAN_YEAR, day_index as u32)
}

/// Calendar month (1..=12) for a 1-based day-of-year.
///
/// # Panics
/// Panics if `day_index` is outside 1..=365. Callers hold validated data.
pub fn month_of_day(day_index: u16) -> u8 {
    date_of_day(day_index)
        .map(|d| d.month() as u8)
        .unwrap_or_else(|| panic!("day index {} out of range", day_index))
}

/// English month name for a 1..=12 month number.
pub fn month_name(month: u8) -> &'static str {
    const NAMES: [&str; 12] = [
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
    NAMES[(month as usize - 1).min(11)]
}

/// Short display label like "Oct 05" for a 1-based day-of-year.
pub fn day_label(day_index: u16) -> String {
    match date_of_day(day_index) {
        Some(date) => date.format("%b %d").to_string(),
        None => format!("day {}", day_index),
    }
}

/// `MMDD` integer key (e.g. 1005 for October 5) for a 1-based day-of-year.
pub fn mmdd_of_day(day_index: u16) -> Option<u32> {
    date_of_day(day_index).map(|d| d.month() * 100 + d.day())
}

/// Day-of-year for an `MMDD` integer key, or `None` for invalid dates
/// (e.g. 230 = Feb 30, 1340, 0).
pub fn day_index_from_mmdd(key: u32) -> Option<u16> {
    let month = key / 100;
    let day = key % 100;
    if month == 0 || day == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(PLAN_YEAR, month, day).map(|d| d.ordinal() as u16)
}

/// 1-based week number for a 1-based day-of-year.
///
/// Weeks are contiguous non-overlapping 7-day blocks starting at day 1:
/// days 1-7 are week 1, days 8-14 are week 2, and day 365 alone is week 53.
pub fn week_of_day(day_index: u16) -> u16 {
    (day_index - 1) / DAYS_IN_WEEK as u16 + 1
}
