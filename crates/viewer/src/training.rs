use ledger::schedule::SessionItem;
use model::training::{SessionStatus, TrainingSession};

pub fn fmt_status(session: &TrainingSession) -> &'static str {
    match session.status {
        SessionStatus::Cancelled => "⛔",
        SessionStatus::Rescheduled => "🟠",
        SessionStatus::Scheduled => {
            if session.is_personal {
                "🔵"
            } else {
                "🟢"
            }
        }
    }
}

pub fn fmt_reminder(reminder: Option<bool>) -> &'static str {
    match reminder {
        Some(true) => " 🔔",
        Some(false) => " 🔕",
        None => "",
    }
}

/// One schedule line: status, time, type and who/where.
pub fn fmt_session(item: &SessionItem) -> String {
    let session = &item.session;
    format!(
        "{} {} {} · {} · {} · {}{}",
        fmt_status(session),
        session.short_time(),
        session.kind,
        session.group,
        session.location,
        session.trainer,
        fmt_reminder(item.reminder),
    )
}

/// Compact label used inside calendar cells.
pub fn fmt_preview(item: &SessionItem) -> String {
    format!("{} {}", item.session.short_time(), item.session.group)
}
