use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: String,
    pub urgent: bool,
}

impl Announcement {
    pub fn day(&self) -> Option<NaiveDate> {
        time::parse_date(&self.date)
    }

    /// Case-insensitive match against title, body and author.
    pub fn mentions(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.title, &self.body, &self.author]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Announcement payload without an id. The repository assigns the id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: String,
    pub urgent: bool,
}

impl NewAnnouncement {
    /// Title, body and author must all carry text.
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.body, &self.author]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl Announcement {
    pub fn new(id: impl Into<String>, announcement: NewAnnouncement) -> Announcement {
        Announcement {
            id: id.into(),
            title: announcement.title,
            body: announcement.body,
            author: announcement.author,
            date: announcement.date,
            urgent: announcement.urgent,
        }
    }
}
