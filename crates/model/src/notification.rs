use serde::{Deserialize, Serialize};

use crate::training::TrainingSession;

/// User facing message handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Notification {
        Notification {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn reminder(session: &TrainingSession, enabled: bool) -> Notification {
        let title = if enabled {
            "Reminder enabled"
        } else {
            "Reminder disabled"
        };
        Notification::new(
            title,
            format!("Personal training {} at {}", session.date, session.time),
        )
    }
}
