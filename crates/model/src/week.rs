use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// Weeks from the reference week, 0 is the current one.
    pub offset: i64,
    /// Monday.
    pub start: NaiveDate,
    /// Sunday.
    pub end: NaiveDate,
    pub label: WeekLabel,
}

impl WeekWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekLabel {
    Current,
    Next,
    Previous,
    Ahead(u64),
    Ago(u64),
}

impl WeekLabel {
    pub fn from_offset(offset: i64) -> Self {
        match offset {
            0 => WeekLabel::Current,
            1 => WeekLabel::Next,
            -1 => WeekLabel::Previous,
            n if n > 1 => WeekLabel::Ahead(n as u64),
            n => WeekLabel::Ago(n.unsigned_abs()),
        }
    }
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLabel::Current => f.write_str("current week"),
            WeekLabel::Next => f.write_str("next week"),
            WeekLabel::Previous => f.write_str("previous week"),
            WeekLabel::Ahead(n) => write!(f, "in {} weeks", n),
            WeekLabel::Ago(n) => write!(f, "{} weeks ago", n),
        }
    }
}
