use std::fmt;

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Calendar month chrono can represent, `month` is always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthId")]
pub struct MonthId {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawMonthId {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthId> for MonthId {
    type Error = ScheduleError;

    fn try_from(raw: RawMonthId) -> Result<Self, Self::Error> {
        MonthId::new(raw.year, raw.month)
    }
}

impl MonthId {
    pub fn new(year: i32, month: u32) -> Result<Self, ScheduleError> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::InvalidMonth(month));
        }
        if time::first_day_of_month(year, month).is_none()
            || time::days_in_month(year, month).is_none()
        {
            return Err(ScheduleError::InvalidWindow(format!(
                "month {}-{:02} is out of range",
                year, month
            )));
        }
        Ok(MonthId { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        MonthId {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        time::first_day_of_month(self.year, self.month)
    }

    pub fn days(&self) -> u32 {
        time::days_in_month(self.year, self.month).unwrap_or_default()
    }

    /// Key prefix shared by every `YYYY-MM-DD` date of this month.
    pub fn key_prefix(&self) -> String {
        format!("{:04}-{:02}-", self.year, self.month)
    }

    pub fn day_key(&self, day: u32) -> String {
        time::date_key(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Following month, `None` past the last month chrono can represent.
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            MonthId::new(self.year.checked_add(1)?, 1).ok()
        } else {
            MonthId::new(self.year, self.month + 1).ok()
        }
    }

    pub fn prev(&self) -> Option<Self> {
        if self.month == 1 {
            MonthId::new(self.year.checked_sub(1)?, 12).ok()
        } else {
            MonthId::new(self.year, self.month - 1).ok()
        }
    }
}

impl From<NaiveDate> for MonthId {
    fn from(date: NaiveDate) -> Self {
        MonthId::of(date)
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
