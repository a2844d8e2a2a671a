use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub session_id: String,
    pub date: String,
    pub attended: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// Share of attended sessions in percent, rounded. Zero without records.
pub fn attendance_rate(records: &[AttendanceRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let attended = records.iter().filter(|r| r.attended).count();
    (attended as f64 * 100.0 / records.len() as f64).round() as u32
}

/// Extra session open to swimmers who missed their own.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MakeupGroup {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub trainer: String,
    pub available_spots: u32,
    pub total_spots: u32,
}

impl MakeupGroup {
    pub fn has_spots(&self) -> bool {
        self.available_spots > 0
    }
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoteKind {
    #[default]
    Info,
    Medical,
    Absence,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainerNote {
    pub id: String,
    pub user_id: String,
    pub trainer_id: String,
    pub date: String,
    pub note: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainerNote {
    pub user_id: String,
    pub trainer_id: String,
    pub date: String,
    pub note: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
}

impl TrainerNote {
    pub fn new(id: impl Into<String>, note: NewTrainerNote) -> TrainerNote {
        TrainerNote {
            id: id.into(),
            user_id: note.user_id,
            trainer_id: note.trainer_id,
            date: note.date,
            note: note.note,
            kind: note.kind,
        }
    }
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Data URL of the payment QR image.
    pub qr_code: String,
    /// Rubles.
    pub amount: u32,
    pub description: String,
    pub due_date: String,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, attended: bool) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_owned(),
            user_id: "user1".to_owned(),
            session_id: id.to_owned(),
            date: "2024-08-20".to_owned(),
            attended,
            note: None,
        }
    }

    #[test]
    fn test_attendance_rate() {
        assert_eq!(attendance_rate(&[]), 0);
        let records = vec![record("1", true), record("2", false), record("3", true)];
        assert_eq!(attendance_rate(&records), 67);
        assert_eq!(attendance_rate(&records[..1]), 100);
    }

    #[test]
    fn test_note_wire_form() {
        let note: TrainerNote = serde_json::from_str(
            r#"{"id":"1","userId":"user1","trainerId":"trainer1","date":"2024-08-22","note":"Sick","type":"medical"}"#,
        )
        .unwrap();
        assert_eq!(note.kind, NoteKind::Medical);
        assert_eq!(note.trainer_id, "trainer1");
    }
}
