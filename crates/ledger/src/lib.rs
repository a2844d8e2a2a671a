use std::sync::Arc;

use eyre::{bail, Context as _, Result};
use log::info;
use model::{
    announcement::{Announcement, NewAnnouncement},
    errors::ScheduleError,
    ids::MonthId,
    training::{NewSession, TrainingSession},
    user::UserProfile,
    week::WeekWindow,
};
use storage::{Repository, Storage};

pub mod announcements;
pub mod calendar;
pub mod dashboard;
pub mod filter;
pub mod profile;
pub mod reminders;
pub mod schedule;
pub mod week;

#[derive(Clone)]
pub struct Ledger {
    repository: Arc<dyn Repository>,
}

impl Ledger {
    pub fn new(storage: Storage) -> Self {
        Ledger::with_repository(Arc::new(storage))
    }

    pub fn with_repository(repository: Arc<dyn Repository>) -> Self {
        Ledger { repository }
    }

    pub async fn upcoming_trainings(&self) -> Result<Vec<TrainingSession>> {
        self.repository
            .upcoming_trainings()
            .await
            .context("upcoming_trainings")
    }

    pub async fn weekly_trainings(&self, week: &WeekWindow) -> Result<Vec<TrainingSession>> {
        self.repository
            .weekly_trainings(week)
            .await
            .context("weekly_trainings")
    }

    pub async fn monthly_trainings(&self, month: MonthId) -> Result<Vec<TrainingSession>> {
        self.repository
            .monthly_trainings(month)
            .await
            .context("monthly_trainings")
    }

    pub async fn user_profile(&self) -> Result<UserProfile> {
        self.repository.user_profile().await.context("user_profile")
    }

    /// Appends a session. Existing sessions are never modified.
    pub async fn create_session(
        &self,
        actor: &UserProfile,
        session: NewSession,
    ) -> Result<TrainingSession> {
        actor.ensure_staff()?;
        ensure_date(&session.date)?;
        let created = self
            .repository
            .create_session(session)
            .await
            .context("create_session")?;
        info!("Session {} scheduled on {} by {}", created.id, created.date, actor.id);
        Ok(created)
    }

    /// Publishes an announcement. Title, body and author are required.
    pub async fn create_announcement(
        &self,
        actor: &UserProfile,
        announcement: NewAnnouncement,
    ) -> Result<Announcement> {
        actor.ensure_staff()?;
        if !announcement.is_complete() {
            bail!("Announcement title, body and author are required");
        }
        ensure_date(&announcement.date)?;
        let created = self
            .repository
            .create_announcement(announcement)
            .await
            .context("create_announcement")?;
        info!("Announcement {} published by {}", created.id, actor.id);
        Ok(created)
    }
}

fn ensure_date(date: &str) -> Result<(), ScheduleError> {
    if time::parse_date(date).is_none() {
        return Err(ScheduleError::InvalidDate(date.to_owned()));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use model::{training::SessionStatus, user::Role};

    use super::*;
    use crate::fixtures::profile;

    fn new_session(date: &str) -> NewSession {
        NewSession {
            date: date.to_owned(),
            time: "18:30".to_owned(),
            location: "Pool 2".to_owned(),
            group: "Masters".to_owned(),
            trainer: "Oleg Smirnov".to_owned(),
            kind: "Open water".to_owned(),
            is_personal: false,
            status: SessionStatus::Scheduled,
        }
    }

    fn new_announcement(title: &str, date: &str) -> NewAnnouncement {
        NewAnnouncement {
            title: title.to_owned(),
            body: "Bring a swimming cap".to_owned(),
            author: "Anna Ivanova".to_owned(),
            date: date.to_owned(),
            urgent: false,
        }
    }

    #[tokio::test]
    async fn test_create_session_appends() {
        let ledger = Ledger::new(Storage::mock());
        let trainer = profile(Role::Trainer);
        let sep = MonthId::new(2024, 9).unwrap();
        let before = ledger.monthly_trainings(sep).await.unwrap();

        let created = ledger
            .create_session(&trainer, new_session("2024-09-10"))
            .await
            .unwrap();
        let after = ledger.monthly_trainings(sep).await.unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_create_session_rejects_bad_date() {
        let ledger = Ledger::new(Storage::mock());
        let err = ledger
            .create_session(&profile(Role::Admin), new_session("2024-9-10"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScheduleError>(),
            Some(ScheduleError::InvalidDate(date)) if date == "2024-9-10"
        ));
    }

    #[tokio::test]
    async fn test_swimmer_cannot_create() {
        let ledger = Ledger::new(Storage::mock());
        let swimmer = profile(Role::Swimmer);
        let sep = MonthId::new(2024, 9).unwrap();
        let before = ledger.monthly_trainings(sep).await.unwrap();

        assert!(ledger
            .create_session(&swimmer, new_session("2024-09-10"))
            .await
            .is_err());
        assert!(ledger
            .create_announcement(&swimmer, new_announcement("Caps", "2024-08-21"))
            .await
            .is_err());
        assert_eq!(ledger.monthly_trainings(sep).await.unwrap(), before);
        assert_eq!(ledger.repository.announcements().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_announcement() {
        let ledger = Ledger::new(Storage::mock());
        let admin = profile(Role::Admin);
        let created = ledger
            .create_announcement(&admin, new_announcement("Caps", "2024-08-21"))
            .await
            .unwrap();
        assert_eq!(created.title, "Caps");
        let all = ledger.repository.announcements().await.unwrap();
        assert_eq!(all.last(), Some(&created));

        assert!(ledger
            .create_announcement(&admin, new_announcement(" ", "2024-08-21"))
            .await
            .is_err());
        let err = ledger
            .create_announcement(&admin, new_announcement("Caps", "21.08.2024"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScheduleError>(),
            Some(ScheduleError::InvalidDate(_))
        ));
    }
}
