use std::sync::Arc;

use eyre::{bail, Error};
use log::info;
use model::announcement::{Announcement, NewAnnouncement};
use parking_lot::RwLock;

use crate::next_id;

#[derive(Default)]
struct AnnouncementLog {
    items: Vec<Announcement>,
    last_id: i64,
}

/// Append-only announcement board.
#[derive(Clone, Default)]
pub struct AnnouncementStore {
    log: Arc<RwLock<AnnouncementLog>>,
}

impl AnnouncementStore {
    pub fn new(items: Vec<Announcement>) -> Self {
        AnnouncementStore {
            log: Arc::new(RwLock::new(AnnouncementLog { items, last_id: 0 })),
        }
    }

    pub fn with_fixtures() -> Self {
        AnnouncementStore::new(fixtures())
    }

    pub fn get_all(&self) -> Vec<Announcement> {
        self.log.read().items.clone()
    }

    pub fn insert(&self, announcement: NewAnnouncement) -> Result<Announcement, Error> {
        if !announcement.is_complete() {
            bail!("Announcement title, body and author are required");
        }

        let mut log = self.log.write();
        let id = next_id(&mut log.last_id);
        let announcement = Announcement::new(id.to_string(), announcement);
        info!("Created announcement: {:?}", announcement);
        log.items.push(announcement.clone());
        Ok(announcement)
    }
}

fn announcement(
    id: &str,
    title: &str,
    body: &str,
    author: &str,
    date: &str,
    urgent: bool,
) -> Announcement {
    Announcement {
        id: id.to_owned(),
        title: title.to_owned(),
        body: body.to_owned(),
        author: author.to_owned(),
        date: date.to_owned(),
        urgent,
    }
}

pub fn fixtures() -> Vec<Announcement> {
    vec![
        announcement(
            "1",
            "New training schedule",
            "A new training schedule starts on September 1. All changes are listed in the Schedule section.",
            "Club administration",
            "2024-08-20",
            true,
        ),
        announcement(
            "2",
            "Swimming competition",
            "Everyone is invited to the city swimming competition on September 15 at the Water World sports complex.",
            "Sergey Petrov",
            "2024-08-18",
            false,
        ),
        announcement(
            "3",
            "Pool 2 maintenance",
            "Pool 2 is closed for maintenance from August 25 to 30. All trainings move to Pool 1.",
            "Technical service",
            "2024-08-15",
            true,
        ),
    ]
}
