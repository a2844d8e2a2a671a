pub use chrono;

use chrono::{Datelike as _, Days, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a Sunday-first weekday index (Sunday = 0 .. Saturday = 6) into a
/// Monday-first column (Monday = 0 .. Sunday = 6).
pub fn monday_index(sunday_index: u32) -> u32 {
    if sunday_index == 0 {
        6
    } else {
        sunday_index - 1
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Number of days in the month: "day 0" of the following month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 12 {
        return first_day_of_month(year, 12).map(|_| 31);
    }
    let last = first_day_of_month(year, month + 1)?.pred_opt()?;
    Some(last.day())
}

/// Blank cells before day 1 in a Monday-first grid.
pub fn leading_padding(year: i32, month: u32) -> Option<u32> {
    let first = first_day_of_month(year, month)?;
    Some(monday_index(first.weekday().num_days_from_sunday()))
}

pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

pub fn fmt_date_key(date: NaiveDate) -> String {
    date_key(date.year(), date.month(), date.day())
}

/// Strict `YYYY-MM-DD` parsing. Anything not zero padded is rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn at_monday(date: NaiveDate) -> NaiveDate {
    let back = monday_index(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back as u64)).unwrap_or(date)
}

pub fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
