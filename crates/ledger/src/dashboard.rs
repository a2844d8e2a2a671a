use eyre::{Context as _, Result};
use model::{announcement::Announcement, training::TrainingSession, user::UserProfile};

use crate::Ledger;

const UPCOMING_ON_DASHBOARD: usize = 3;
const ANNOUNCEMENTS_ON_DASHBOARD: usize = 2;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub upcoming: Vec<TrainingSession>,
    pub announcements: Vec<Announcement>,
}

impl Ledger {
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let (mut upcoming, mut announcements, profile) = tokio::try_join!(
            self.upcoming_trainings(),
            async { self.repository.announcements().await.context("announcements") },
            async { self.repository.user_profile().await.context("user_profile") },
        )?;
        upcoming.truncate(UPCOMING_ON_DASHBOARD);
        announcements.truncate(ANNOUNCEMENTS_ON_DASHBOARD);

        Ok(Dashboard {
            profile,
            upcoming,
            announcements,
        })
    }
}
