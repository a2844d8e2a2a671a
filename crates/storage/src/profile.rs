use std::sync::Arc;

use eyre::{bail, Error};
use log::info;
use model::profile::{
    AttendanceRecord, MakeupGroup, NewTrainerNote, NoteKind, PaymentInfo, PaymentStatus,
    TrainerNote,
};
use parking_lot::RwLock;

use crate::next_id;

#[derive(Default)]
struct NoteLog {
    notes: Vec<TrainerNote>,
    last_id: i64,
}

/// Attendance, makeup groups, trainer notes and billing of club members.
#[derive(Clone)]
pub struct ProfileStore {
    attendance: Arc<Vec<AttendanceRecord>>,
    makeup_groups: Arc<Vec<MakeupGroup>>,
    payment: PaymentInfo,
    notes: Arc<RwLock<NoteLog>>,
}

impl ProfileStore {
    pub fn new(
        attendance: Vec<AttendanceRecord>,
        makeup_groups: Vec<MakeupGroup>,
        payment: PaymentInfo,
        notes: Vec<TrainerNote>,
    ) -> Self {
        ProfileStore {
            attendance: Arc::new(attendance),
            makeup_groups: Arc::new(makeup_groups),
            payment,
            notes: Arc::new(RwLock::new(NoteLog { notes, last_id: 0 })),
        }
    }

    pub fn with_fixtures() -> Self {
        ProfileStore::new(
            attendance_fixtures(),
            makeup_fixtures(),
            payment_fixture(),
            note_fixtures(),
        )
    }

    pub fn attendance(&self, user_id: &str) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn makeup_groups(&self) -> Vec<MakeupGroup> {
        self.makeup_groups.as_ref().clone()
    }

    pub fn payment(&self) -> PaymentInfo {
        self.payment.clone()
    }

    pub fn notes(&self, user_id: &str) -> Vec<TrainerNote> {
        self.notes
            .read()
            .notes
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn add_note(&self, note: NewTrainerNote) -> Result<TrainerNote, Error> {
        if note.note.trim().is_empty() {
            bail!("Trainer note is empty");
        }

        let mut log = self.notes.write();
        let id = next_id(&mut log.last_id);
        let note = TrainerNote::new(id.to_string(), note);
        info!("Added trainer note: {:?}", note);
        log.notes.push(note.clone());
        Ok(note)
    }
}

fn attendance(id: &str, date: &str, attended: bool, note: Option<&str>) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_owned(),
        user_id: "user1".to_owned(),
        session_id: id.to_owned(),
        date: date.to_owned(),
        attended,
        note: note.map(ToOwned::to_owned),
    }
}

fn attendance_fixtures() -> Vec<AttendanceRecord> {
    vec![
        attendance("1", "2024-08-20", true, None),
        attendance("2", "2024-08-22", false, Some("Was ill")),
        attendance("3", "2024-08-24", true, None),
    ]
}

fn makeup_fixtures() -> Vec<MakeupGroup> {
    vec![
        MakeupGroup {
            id: "1".to_owned(),
            name: "Beginners (makeup)".to_owned(),
            date: "2024-08-27".to_owned(),
            time: "16:00".to_owned(),
            location: "Pool 1".to_owned(),
            trainer: "Anna Ivanova".to_owned(),
            available_spots: 3,
            total_spots: 8,
        },
        MakeupGroup {
            id: "2".to_owned(),
            name: "Intermediate (makeup)".to_owned(),
            date: "2024-08-28".to_owned(),
            time: "20:00".to_owned(),
            location: "Pool 2".to_owned(),
            trainer: "Sergey Petrov".to_owned(),
            available_spots: 1,
            total_spots: 6,
        },
    ]
}

fn payment_fixture() -> PaymentInfo {
    PaymentInfo {
        qr_code: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgZmlsbD0iI2ZmZiIvPjx0ZXh0IHg9IjEwMCIgeT0iMTAwIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkeT0iLjNlbSI+UVIgQ29kZTwvdGV4dD48L3N2Zz4=".to_owned(),
        amount: 2500,
        description: "Monthly training fee".to_owned(),
        due_date: "2024-09-01".to_owned(),
        status: PaymentStatus::Pending,
    }
}

fn note_fixtures() -> Vec<TrainerNote> {
    vec![TrainerNote {
        id: "1".to_owned(),
        user_id: "user1".to_owned(),
        trainer_id: "trainer1".to_owned(),
        date: "2024-08-22".to_owned(),
        note: "Missed the session because of illness".to_owned(),
        kind: NoteKind::Medical,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(user_id: &str, text: &str) -> NewTrainerNote {
        NewTrainerNote {
            user_id: user_id.to_owned(),
            trainer_id: user_id.to_owned(),
            date: "2024-08-23".to_owned(),
            note: text.to_owned(),
            kind: NoteKind::Absence,
        }
    }

    #[test]
    fn test_fixtures() {
        let store = ProfileStore::with_fixtures();
        assert_eq!(store.attendance("user1").len(), 3);
        assert!(store.attendance("user2").is_empty());
        assert_eq!(store.makeup_groups().len(), 2);
        assert_eq!(store.payment().amount, 2500);
    }

    #[test]
    fn test_add_note() {
        let store = ProfileStore::with_fixtures();
        let note = store.add_note(draft("user1", "Away next week")).unwrap();
        assert_eq!(store.notes("user1").last(), Some(&note));
        assert_eq!(store.notes("user1").len(), 2);
        assert!(store.add_note(draft("user1", "   ")).is_err());
        assert_eq!(store.notes("user1").len(), 2);
    }
}
