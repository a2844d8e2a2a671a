use std::sync::Arc;

use eyre::{bail, Error};
use log::info;
use model::{
    ids::MonthId,
    training::{NewSession, SessionStatus, TrainingSession},
    week::WeekWindow,
};
use parking_lot::RwLock;

use crate::next_id;

#[derive(Default)]
struct SessionLog {
    sessions: Vec<TrainingSession>,
    last_id: i64,
}

/// Append-only in-memory session log.
#[derive(Clone, Default)]
pub struct TrainingStore {
    log: Arc<RwLock<SessionLog>>,
}

impl TrainingStore {
    pub fn new(sessions: Vec<TrainingSession>) -> Self {
        TrainingStore {
            log: Arc::new(RwLock::new(SessionLog {
                sessions,
                last_id: 0,
            })),
        }
    }

    pub fn with_fixtures() -> Self {
        TrainingStore::new(fixtures())
    }

    pub fn get_all(&self) -> Vec<TrainingSession> {
        self.log.read().sessions.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<TrainingSession> {
        self.log.read().sessions.iter().find(|s| s.id == id).cloned()
    }

    /// Sessions with a `YYYY-MM-` prefix of the month. Malformed dates that
    /// share the prefix are kept, placement code is expected to skip them.
    pub fn find_month(&self, month: MonthId) -> Vec<TrainingSession> {
        let prefix = month.key_prefix();
        self.log
            .read()
            .sessions
            .iter()
            .filter(|s| s.date.starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub fn find_week(&self, week: &WeekWindow) -> Vec<TrainingSession> {
        self.log
            .read()
            .sessions
            .iter()
            .filter(|s| s.day().map(|d| week.contains(d)).unwrap_or(false))
            .cloned()
            .collect()
    }

    /// Not cancelled sessions ordered by date and time.
    pub fn find_upcoming(&self, limit: usize) -> Vec<TrainingSession> {
        let mut sessions = self
            .log
            .read()
            .sessions
            .iter()
            .filter(|s| s.status != SessionStatus::Cancelled)
            .cloned()
            .collect::<Vec<_>>();
        sessions.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        sessions.truncate(limit);
        sessions
    }

    pub fn insert(&self, session: NewSession) -> Result<TrainingSession, Error> {
        if session.date.is_empty() || session.time.is_empty() {
            bail!("Session date and time are required");
        }

        let mut log = self.log.write();
        let id = next_id(&mut log.last_id);
        let session = TrainingSession::new(id.to_string(), session);
        info!("Created training session: {:?}", session);
        log.sessions.push(session.clone());
        Ok(session)
    }
}

#[allow(clippy::too_many_arguments)]
fn session(
    id: &str,
    date: &str,
    time: &str,
    location: &str,
    group: &str,
    trainer: &str,
    kind: &str,
    is_personal: bool,
    status: SessionStatus,
) -> TrainingSession {
    TrainingSession::new(
        id,
        NewSession {
            date: date.to_owned(),
            time: time.to_owned(),
            location: location.to_owned(),
            group: group.to_owned(),
            trainer: trainer.to_owned(),
            kind: kind.to_owned(),
            is_personal,
            status,
        },
    )
}

#[rustfmt::skip]
pub fn fixtures() -> Vec<TrainingSession> {
    use SessionStatus::*;
    vec![
        session("1", "2024-08-25", "08:00", "Pool 1", "Beginners", "Anna Ivanova", "Swimming technique", false, Scheduled),
        session("2", "2024-08-25", "10:00", "Pool 2", "Advanced", "Sergey Petrov", "Speed training", true, Scheduled),
        session("3", "2024-08-26", "18:00", "Pool 1", "Intermediate", "Maria Kozlova", "Endurance", false, Rescheduled),
        session("4", "2024-08-27", "07:30", "Pool 1", "Beginners", "Anna Ivanova", "Swimming basics", false, Scheduled),
        session("5", "2024-08-28", "19:00", "Pool 2", "Advanced", "Sergey Petrov", "Competition prep", false, Cancelled),
        session("6", "2024-08-29", "17:00", "Pool 2", "Intermediate", "Maria Kozlova", "Turns and starts", false, Scheduled),
        session("7", "2024-08-31", "09:00", "Pool 1", "Advanced", "Sergey Petrov", "Personal coaching", true, Scheduled),
        session("8", "2024-09-02", "18:00", "Pool 1", "Beginners", "Anna Ivanova", "Breathing drills", false, Scheduled),
        session("9", "2024-09-04", "19:30", "Pool 2", "Intermediate", "Maria Kozlova", "Endurance", false, Scheduled),
    ]
}
