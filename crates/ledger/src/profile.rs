use chrono::NaiveDate;
use eyre::{bail, Context as _, Result};
use log::info;
use model::{
    profile::{
        attendance_rate, AttendanceRecord, MakeupGroup, NewTrainerNote, NoteKind, PaymentInfo,
        TrainerNote,
    },
    stats::AdminStats,
    user::UserProfile,
};

use crate::Ledger;

/// Everything the profile screen shows for the signed in user.
#[derive(Debug, Clone)]
pub struct ProfileOverview {
    pub profile: UserProfile,
    pub attendance: Vec<AttendanceRecord>,
    /// Percent of attended sessions.
    pub attendance_rate: u32,
    pub makeup_groups: Vec<MakeupGroup>,
    pub payment: PaymentInfo,
    /// Loaded for trainers and admins only.
    pub admin_stats: Option<AdminStats>,
}

impl Ledger {
    pub async fn profile_overview(&self) -> Result<ProfileOverview> {
        let (profile, attendance, makeup_groups, payment) = tokio::try_join!(
            self.user_profile(),
            async { self.repository.user_attendance().await.context("user_attendance") },
            async { self.repository.makeup_groups().await.context("makeup_groups") },
            async { self.repository.payment_info().await.context("payment_info") },
        )?;

        let admin_stats = if profile.is_staff() {
            Some(self.admin_stats(&profile).await?)
        } else {
            None
        };

        Ok(ProfileOverview {
            attendance_rate: attendance_rate(&attendance),
            profile,
            attendance,
            makeup_groups,
            payment,
            admin_stats,
        })
    }

    pub async fn admin_stats(&self, actor: &UserProfile) -> Result<AdminStats> {
        actor.ensure_staff()?;
        self.repository.admin_stats().await.context("admin_stats")
    }

    pub async fn trainer_notes(&self) -> Result<Vec<TrainerNote>> {
        self.repository.trainer_notes().await.context("trainer_notes")
    }

    /// Leaves a note for the trainer on behalf of `actor`.
    pub async fn add_trainer_note(
        &self,
        actor: &UserProfile,
        note: &str,
        kind: NoteKind,
        date: NaiveDate,
    ) -> Result<TrainerNote> {
        let note = note.trim();
        if note.is_empty() {
            bail!("Trainer note is empty");
        }
        let created = self
            .repository
            .add_trainer_note(NewTrainerNote {
                user_id: actor.id.clone(),
                trainer_id: actor.id.clone(),
                date: time::fmt_date_key(date),
                note: note.to_owned(),
                kind,
            })
            .await
            .context("add_trainer_note")?;
        info!("Trainer note {} added by {}", created.id, actor.id);
        Ok(created)
    }
}
