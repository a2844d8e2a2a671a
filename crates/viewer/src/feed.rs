use std::fmt::Write as _;

use ledger::{announcements::AnnouncementFeed, dashboard::Dashboard};
use model::announcement::Announcement;

pub fn fmt_announcement(announcement: &Announcement) -> String {
    let badge = if announcement.urgent { "❗ " } else { "" };
    format!(
        "{}{} ({}, {})\n  {}",
        badge, announcement.title, announcement.date, announcement.author, announcement.body
    )
}

pub fn render_feed(feed: &AnnouncementFeed) -> String {
    let mut out = format!(
        "Announcements: {} of {} ({} urgent)\n",
        feed.items.len(),
        feed.total,
        feed.urgent
    );
    if feed.items.is_empty() {
        out.push_str("Nothing found\n");
    }
    for item in &feed.items {
        let _ = writeln!(out, "{}", fmt_announcement(item));
    }
    out
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let profile = &dashboard.profile;
    let mut out = format!(
        "{} · {} · trainer {}\n",
        profile.name, profile.group, profile.trainer
    );
    out.push_str("Upcoming:\n");
    if dashboard.upcoming.is_empty() {
        out.push_str("  nothing scheduled\n");
    }
    for session in &dashboard.upcoming {
        let _ = writeln!(
            out,
            "  {} {} {} · {}",
            session.date,
            session.short_time(),
            session.kind,
            session.location
        );
    }
    out.push_str("News:\n");
    for announcement in &dashboard.announcements {
        let _ = writeln!(out, "  {}", announcement.title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(urgent: bool) -> Announcement {
        Announcement {
            id: "1".to_owned(),
            title: "Pool 2 closed".to_owned(),
            body: "Maintenance until Friday".to_owned(),
            author: "Administration".to_owned(),
            date: "2024-08-20".to_owned(),
            urgent,
        }
    }

    #[test]
    fn test_fmt_announcement() {
        assert_eq!(
            fmt_announcement(&announcement(true)),
            "❗ Pool 2 closed (2024-08-20, Administration)\n  Maintenance until Friday"
        );
        assert!(fmt_announcement(&announcement(false)).starts_with("Pool 2 closed"));
    }

    #[test]
    fn test_empty_feed() {
        let feed = AnnouncementFeed {
            items: vec![],
            total: 3,
            urgent: 2,
        };
        assert_eq!(
            render_feed(&feed),
            "Announcements: 0 of 3 (2 urgent)\nNothing found\n"
        );
    }
}
