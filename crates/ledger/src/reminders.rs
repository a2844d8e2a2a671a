use std::{collections::HashMap, sync::Arc};

use log::info;
use model::{notification::Notification, training::TrainingSession};
use parking_lot::Mutex;

/// Receiver of user facing notifications.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Collects notifications in memory.
#[derive(Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<Notification>>>);

impl MemorySink {
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.0.lock())
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.0.lock().push(notification);
    }
}

pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        info!("{}: {}", notification.title, notification.description);
    }
}

/// Per-view reminder switches keyed by session id. Unknown ids are off.
#[derive(Debug, Clone, Default)]
pub struct ReminderStore {
    states: HashMap<String, bool>,
}

impl ReminderStore {
    pub fn get(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let state = self.states.entry(id.to_owned()).or_insert(false);
        *state = !*state;
        *state
    }

    /// Flips the switch for the session. Only personal sessions notify.
    pub fn toggle_session(
        &mut self,
        session: &TrainingSession,
        sink: &dyn NotificationSink,
    ) -> bool {
        let enabled = self.toggle(&session.id);
        if session.is_personal {
            sink.notify(Notification::reminder(session, enabled));
        }
        enabled
    }

    /// Reminder flag for display: `Some` for personal sessions only.
    pub fn reminder_for(&self, session: &TrainingSession) -> Option<bool> {
        session.is_personal.then(|| self.get(&session.id))
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{session, SessionExt as _};

    #[test]
    fn test_unknown_is_off() {
        let store = ReminderStore::default();
        assert!(!store.get("42"));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut store = ReminderStore::default();
        for id in ["1", "2", "3"] {
            let before = store.get(id);
            store.toggle(id);
            store.toggle(id);
            assert_eq!(store.get(id), before);
        }
        store.toggle("1");
        let before = store.get("1");
        store.toggle("1");
        store.toggle("1");
        assert_eq!(store.get("1"), before);
        assert!(before);
    }

    #[test]
    fn test_non_personal_flips_without_notification() {
        let mut store = ReminderStore::default();
        let sink = MemorySink::default();
        let session = session("1", "2024-08-25");

        assert!(!store.get("1"));
        assert!(store.toggle_session(&session, &sink));
        assert!(store.get("1"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_personal_notifies_every_toggle() {
        let mut store = ReminderStore::default();
        let sink = MemorySink::default();
        let session = session("2", "2024-08-25").at("10:00").personal();

        assert!(store.toggle_session(&session, &sink));
        assert_eq!(sink.len(), 1);
        assert!(!store.toggle_session(&session, &sink));
        assert_eq!(sink.len(), 2);

        let sent = sink.take();
        assert_eq!(sent[0].title, "Reminder enabled");
        assert_eq!(sent[0].description, "Personal training 2024-08-25 at 10:00");
        assert_eq!(sent[1].title, "Reminder disabled");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_reminder_for() {
        let mut store = ReminderStore::default();
        let group = session("1", "2024-08-25");
        let personal = session("2", "2024-08-25").personal();
        store.toggle("1");
        assert_eq!(store.reminder_for(&group), None);
        assert_eq!(store.reminder_for(&personal), Some(false));
        store.toggle("2");
        assert_eq!(store.reminder_for(&personal), Some(true));
        store.clear();
        assert_eq!(store.reminder_for(&personal), Some(false));
    }
}
