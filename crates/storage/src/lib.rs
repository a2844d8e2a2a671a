pub mod announcement;
pub mod profile;
pub mod stats;
pub mod training;
pub mod user;

use announcement::AnnouncementStore;
use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use log::debug;
use model::{
    announcement::{Announcement, NewAnnouncement},
    ids::MonthId,
    profile::{AttendanceRecord, MakeupGroup, NewTrainerNote, PaymentInfo, TrainerNote},
    stats::AdminStats,
    training::{NewSession, TrainingSession},
    user::UserProfile,
    week::WeekWindow,
};
use profile::ProfileStore;
use stats::StatsStore;
use training::TrainingStore;
use user::UserStore;

const UPCOMING_LIMIT: usize = 3;

/// Source of club data. Every fetch resolves with a complete list or fails.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn upcoming_trainings(&self) -> Result<Vec<TrainingSession>>;

    async fn weekly_trainings(&self, week: &WeekWindow) -> Result<Vec<TrainingSession>>;

    async fn monthly_trainings(&self, month: MonthId) -> Result<Vec<TrainingSession>>;

    async fn announcements(&self) -> Result<Vec<Announcement>>;

    async fn user_profile(&self) -> Result<UserProfile>;

    async fn create_session(&self, session: NewSession) -> Result<TrainingSession>;

    async fn create_announcement(&self, announcement: NewAnnouncement) -> Result<Announcement>;

    /// Attendance of the signed in user.
    async fn user_attendance(&self) -> Result<Vec<AttendanceRecord>>;

    async fn makeup_groups(&self) -> Result<Vec<MakeupGroup>>;

    /// Notes about the signed in user.
    async fn trainer_notes(&self) -> Result<Vec<TrainerNote>>;

    async fn add_trainer_note(&self, note: NewTrainerNote) -> Result<TrainerNote>;

    async fn payment_info(&self) -> Result<PaymentInfo>;

    async fn admin_stats(&self) -> Result<AdminStats>;
}

/// Next id of an append-only log: current epoch millis, strictly above `last`.
pub(crate) fn next_id(last: &mut i64) -> i64 {
    let id = Utc::now().timestamp_millis().max(last.saturating_add(1));
    *last = id;
    id
}

/// In-memory mock of the club backend.
#[derive(Clone)]
pub struct Storage {
    pub trainings: TrainingStore,
    pub announcements: AnnouncementStore,
    pub users: UserStore,
    pub profiles: ProfileStore,
    pub stats: StatsStore,
}

impl Storage {
    pub fn new(
        trainings: TrainingStore,
        announcements: AnnouncementStore,
        users: UserStore,
        profiles: ProfileStore,
        stats: StatsStore,
    ) -> Self {
        Storage {
            trainings,
            announcements,
            users,
            profiles,
            stats,
        }
    }

    pub fn mock() -> Self {
        Storage::new(
            TrainingStore::with_fixtures(),
            AnnouncementStore::with_fixtures(),
            UserStore::with_fixtures(),
            ProfileStore::with_fixtures(),
            StatsStore::with_fixtures(),
        )
    }
}

#[async_trait]
impl Repository for Storage {
    async fn upcoming_trainings(&self) -> Result<Vec<TrainingSession>> {
        Ok(self.trainings.find_upcoming(UPCOMING_LIMIT))
    }

    async fn weekly_trainings(&self, week: &WeekWindow) -> Result<Vec<TrainingSession>> {
        debug!("Loading trainings for week {} - {}", week.start, week.end);
        Ok(self.trainings.find_week(week))
    }

    async fn monthly_trainings(&self, month: MonthId) -> Result<Vec<TrainingSession>> {
        debug!("Loading trainings for month {}", month);
        Ok(self.trainings.find_month(month))
    }

    async fn announcements(&self) -> Result<Vec<Announcement>> {
        Ok(self.announcements.get_all())
    }

    async fn user_profile(&self) -> Result<UserProfile> {
        Ok(self.users.me())
    }

    async fn create_session(&self, session: NewSession) -> Result<TrainingSession> {
        self.trainings.insert(session)
    }

    async fn create_announcement(&self, announcement: NewAnnouncement) -> Result<Announcement> {
        self.announcements.insert(announcement)
    }

    async fn user_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        Ok(self.profiles.attendance(&self.users.me().id))
    }

    async fn makeup_groups(&self) -> Result<Vec<MakeupGroup>> {
        Ok(self.profiles.makeup_groups())
    }

    async fn trainer_notes(&self) -> Result<Vec<TrainerNote>> {
        Ok(self.profiles.notes(&self.users.me().id))
    }

    async fn add_trainer_note(&self, note: NewTrainerNote) -> Result<TrainerNote> {
        self.profiles.add_note(note)
    }

    async fn payment_info(&self) -> Result<PaymentInfo> {
        Ok(self.profiles.payment())
    }

    async fn admin_stats(&self) -> Result<AdminStats> {
        Ok(self.stats.get())
    }
}
