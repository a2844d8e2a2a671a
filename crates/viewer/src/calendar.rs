use std::fmt::Write as _;

use ledger::schedule::SessionItem;
use model::{calendar::CalendarCell, ids::MonthId};

use crate::{
    day::{fmt_month_title, WEEKDAY_HEADERS},
    training::fmt_preview,
};

/// Sessions shown per day before collapsing the rest.
pub const PREVIEW_LIMIT: usize = 2;

/// Seven-column grid. Days with sessions are marked with `•`.
pub fn render_grid(month: MonthId, grid: &[CalendarCell<SessionItem>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", fmt_month_title(month));
    let header = WEEKDAY_HEADERS
        .iter()
        .map(|d| format!("{:>4}", d))
        .collect::<String>();
    let _ = writeln!(out, "{}", header);

    for week in grid.chunks(7) {
        let row = week.iter().map(fmt_cell).collect::<String>();
        let _ = writeln!(out, "{}", row.trim_end());
    }
    out
}

fn fmt_cell(cell: &CalendarCell<SessionItem>) -> String {
    match cell {
        CalendarCell::Empty => "    ".to_owned(),
        CalendarCell::Day { day, sessions } => {
            let marker = if sessions.is_empty() { ' ' } else { '•' };
            format!("{:>3}{}", day, marker)
        }
    }
}

/// Per-day previews: up to [`PREVIEW_LIMIT`] sessions and a "+k more" tail.
pub fn render_previews(grid: &[CalendarCell<SessionItem>]) -> String {
    let mut out = String::new();
    for cell in grid {
        let day = match cell.day() {
            Some(day) if !cell.sessions().is_empty() => day,
            _ => continue,
        };
        let (shown, hidden) = cell.preview(PREVIEW_LIMIT);
        let mut line = format!("{:>2}: ", day);
        line.push_str(
            &shown
                .iter()
                .map(fmt_preview)
                .collect::<Vec<_>>()
                .join(", "),
        );
        if hidden > 0 {
            let _ = write!(line, ", +{} more", hidden);
        }
        let _ = writeln!(out, "{}", line);
    }
    out
}
