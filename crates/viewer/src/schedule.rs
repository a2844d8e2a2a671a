use std::fmt::Write as _;

use ledger::schedule::{ScheduleLayout, ScheduleModel, SessionItem};
use model::filter::FilterSelection;

use crate::{
    calendar::{render_grid, render_previews},
    day::{fmt_day_title, fmt_dm},
    training::fmt_session,
};

pub fn fmt_selection(selection: &FilterSelection) -> String {
    format!(
        "Trainer: {} · Pool: {} · Group: {}",
        selection.trainer, selection.location, selection.group
    )
}

pub fn render_schedule(model: &ScheduleModel) -> String {
    let mut out = String::new();
    if let Some(err) = &model.error {
        let _ = writeln!(out, "Failed to load the schedule: {}", err);
    }
    let _ = writeln!(out, "{}", fmt_selection(&model.selection));

    match &model.layout {
        ScheduleLayout::Month { month, grid, today } => {
            out.push_str(&render_grid(*month, grid));
            out.push_str(&render_previews(grid));
            if !today.is_empty() {
                let _ = writeln!(out, "Today:");
                render_list(&mut out, today, false);
            }
        }
        ScheduleLayout::Week { window, sessions } => {
            if let Some(window) = window {
                let _ = writeln!(
                    out,
                    "Week {} - {} ({})",
                    fmt_dm(&window.start),
                    fmt_dm(&window.end),
                    window.label
                );
            }
            render_list(&mut out, sessions, true);
        }
        ScheduleLayout::Day { date, sessions } => {
            let _ = writeln!(out, "{}", fmt_day_title(date));
            render_list(&mut out, sessions, false);
        }
    }
    out
}

fn render_list(out: &mut String, sessions: &[SessionItem], with_day: bool) {
    if sessions.is_empty() {
        let _ = writeln!(out, "No sessions");
        return;
    }
    for item in sessions {
        match item.session.day() {
            Some(day) if with_day => {
                let _ = writeln!(out, "{} {}", fmt_day_title(&day), fmt_session(item));
            }
            _ => {
                let _ = writeln!(out, "{}", fmt_session(item));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ledger::{filter::FilterOptions, schedule::TimeWindow};

    use super::*;

    fn model(layout: ScheduleLayout, error: Option<String>) -> ScheduleModel {
        ScheduleModel {
            window: TimeWindow::Week(0),
            layout,
            options: FilterOptions::default(),
            selection: FilterSelection::default().location("Pool 1"),
            error,
        }
    }

    #[test]
    fn test_error_and_empty_list() {
        let text = render_schedule(&model(
            ScheduleLayout::Week {
                window: None,
                sessions: vec![],
            },
            Some("timeout".to_owned()),
        ));
        assert_eq!(
            text,
            "Failed to load the schedule: timeout\n\
             Trainer: all · Pool: Pool 1 · Group: all\n\
             No sessions\n"
        );
    }

    #[test]
    fn test_day_title() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 26).unwrap();
        let text = render_schedule(&model(
            ScheduleLayout::Day {
                date,
                sessions: vec![],
            },
            None,
        ));
        assert!(text.contains("Mon 26.08.2024\nNo sessions\n"));
    }
}
