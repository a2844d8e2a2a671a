use serde::{Deserialize, Serialize};

use crate::training::TrainingSession;

/// One cell of a Monday-first month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell<T = TrainingSession> {
    /// Padding before the first day of the month.
    Empty,
    Day { day: u32, sessions: Vec<T> },
}

impl<T> CalendarCell<T> {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn sessions(&self) -> &[T] {
        match self {
            CalendarCell::Empty => &[],
            CalendarCell::Day { sessions, .. } => sessions,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }

    /// First `limit` sessions of the cell and the number left out.
    pub fn preview(&self, limit: usize) -> (&[T], usize) {
        let sessions = self.sessions();
        if sessions.len() > limit {
            (&sessions[..limit], sessions.len() - limit)
        } else {
            (sessions, 0)
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CalendarCell<U> {
        match self {
            CalendarCell::Empty => CalendarCell::Empty,
            CalendarCell::Day { day, sessions } => CalendarCell::Day {
                day,
                sessions: sessions.into_iter().map(f).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview() {
        let cell = CalendarCell::Day {
            day: 3,
            sessions: vec![1, 2, 3, 4],
        };
        assert_eq!(cell.preview(2), (&[1, 2][..], 2));
        assert_eq!(cell.preview(10), (&[1, 2, 3, 4][..], 0));

        let empty: CalendarCell<u32> = CalendarCell::Empty;
        assert_eq!(empty.preview(2), (&[][..], 0));
        assert_eq!(empty.day(), None);
    }

    #[test]
    fn test_map() {
        let cell = CalendarCell::Day {
            day: 1,
            sessions: vec![1, 2],
        };
        let mapped = cell.map(|n| n * 10);
        assert_eq!(mapped.sessions(), &[10, 20]);
        assert_eq!(mapped.day(), Some(1));
    }
}
