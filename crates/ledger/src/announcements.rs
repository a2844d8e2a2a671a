use eyre::{Context as _, Result};
use model::announcement::Announcement;

use crate::Ledger;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementQuery {
    pub urgent_only: bool,
    pub search: Option<String>,
}

impl AnnouncementQuery {
    fn matches(&self, announcement: &Announcement) -> bool {
        if self.urgent_only && !announcement.urgent {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => announcement.mentions(query),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementFeed {
    pub items: Vec<Announcement>,
    pub total: usize,
    pub urgent: usize,
}

impl AnnouncementFeed {
    /// Filters in input order, then sorts newest first.
    pub fn build(
        announcements: Vec<Announcement>,
        query: &AnnouncementQuery,
    ) -> AnnouncementFeed {
        let total = announcements.len();
        let urgent = announcements.iter().filter(|a| a.urgent).count();

        let mut items = announcements
            .into_iter()
            .filter(|a| query.matches(a))
            .collect::<Vec<_>>();
        items.sort_by(|a, b| b.day().cmp(&a.day()));

        AnnouncementFeed {
            items,
            total,
            urgent,
        }
    }
}

impl Ledger {
    pub async fn announcement_feed(
        &self,
        query: &AnnouncementQuery,
    ) -> Result<AnnouncementFeed> {
        let announcements = self
            .repository
            .announcements()
            .await
            .context("announcements")?;
        Ok(AnnouncementFeed::build(announcements, query))
    }
}
