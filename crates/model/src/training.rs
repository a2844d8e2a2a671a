use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: String,
    /// `YYYY-MM-DD`, compared as a string when placing sessions on the grid.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: String,
    pub location: String,
    pub group: String,
    pub trainer: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_personal: bool,
    #[serde(default)]
    pub status: SessionStatus,
}

impl TrainingSession {
    pub fn new(id: impl Into<String>, session: NewSession) -> TrainingSession {
        TrainingSession {
            id: id.into(),
            date: session.date,
            time: session.time,
            location: session.location,
            group: session.group,
            trainer: session.trainer,
            kind: session.kind,
            is_personal: session.is_personal,
            status: session.status,
        }
    }

    /// Parsed calendar date, `None` when the source sent a malformed value.
    pub fn day(&self) -> Option<NaiveDate> {
        time::parse_date(&self.date)
    }

    pub fn short_time(&self) -> &str {
        self.time.get(..5).unwrap_or(&self.time)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == SessionStatus::Cancelled
    }
}

/// Session payload without an id. The repository assigns the id on append.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub date: String,
    pub time: String,
    pub location: String,
    pub group: String,
    pub trainer: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_personal: bool,
    #[serde(default)]
    pub status: SessionStatus,
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Cancelled,
    Rescheduled,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn session(date: &str, time: &str) -> TrainingSession {
        TrainingSession::new(
            "1",
            NewSession {
                date: date.to_owned(),
                time: time.to_owned(),
                location: "Pool 1".to_owned(),
                group: "Beginners".to_owned(),
                trainer: "Anna".to_owned(),
                kind: "Technique".to_owned(),
                is_personal: false,
                status: SessionStatus::Scheduled,
            },
        )
    }

    #[test]
    fn test_day() {
        assert_eq!(
            session("2024-08-25", "08:00").day(),
            NaiveDate::from_ymd_opt(2024, 8, 25)
        );
        assert_eq!(session("25.08.2024", "08:00").day(), None);
    }

    #[test]
    fn test_short_time() {
        assert_eq!(session("2024-08-25", "08:00:00").short_time(), "08:00");
        assert_eq!(session("2024-08-25", "8:00").short_time(), "8:00");
    }

    #[test]
    fn test_defaults_from_json() {
        let json = r#"{
            "id": "2",
            "date": "2024-08-25",
            "time": "10:00",
            "location": "Pool 2",
            "group": "Advanced",
            "trainer": "Sergey",
            "type": "Speed"
        }"#;
        let session: TrainingSession = serde_json::from_str(json).unwrap();
        assert!(!session.is_personal);
        assert_eq!(session.status, SessionStatus::Scheduled);
        assert_eq!(session.kind, "Speed");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(SessionStatus::Rescheduled.to_string(), "rescheduled");
        assert_eq!(
            SessionStatus::from_str("cancelled").unwrap(),
            SessionStatus::Cancelled
        );
        assert!(SessionStatus::from_str("unknown").is_err());
    }
}
