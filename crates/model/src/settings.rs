use eyre::{Context as _, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
    pub privacy: PrivacySettings,
    pub app: AppSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub enabled: bool,
    pub training: bool,
    pub announcements: bool,
    pub payments: bool,
    pub reminders: bool,
    pub sound: bool,
    pub vibration: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            enabled: true,
            training: true,
            announcements: true,
            payments: true,
            reminders: true,
            sound: true,
            vibration: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub language: Language,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub profile_visible: bool,
    pub share_stats: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        PrivacySettings {
            profile_visible: true,
            share_stats: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub auto_sync: bool,
    pub offline_mode: bool,
    pub sound_volume: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            auto_sync: true,
            offline_mode: false,
            sound_volume: 80,
        }
    }
}

impl Settings {
    pub fn with_notifications(&self, notifications: NotificationSettings) -> Settings {
        Settings {
            notifications,
            ..self.clone()
        }
    }

    pub fn with_appearance(&self, appearance: AppearanceSettings) -> Settings {
        Settings {
            appearance,
            ..self.clone()
        }
    }

    pub fn with_privacy(&self, privacy: PrivacySettings) -> Settings {
        Settings {
            privacy,
            ..self.clone()
        }
    }

    pub fn with_app(&self, app: AppSettings) -> Settings {
        Settings {
            app: AppSettings {
                sound_volume: app.sound_volume.min(100),
                ..app
            },
            ..self.clone()
        }
    }

    pub fn from_json(json: &str) -> Result<Settings> {
        serde_json::from_str(json).context("Failed to parse settings")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize settings")
    }

    /// Reminder toasts are shown only when both switches are on.
    pub fn reminders_enabled(&self) -> bool {
        self.notifications.enabled && self.notifications.reminders
    }
}

/// Tracks unsaved edits on top of the last committed settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsEditor {
    saved: Settings,
    current: Settings,
}

impl SettingsEditor {
    pub fn new(saved: Settings) -> Self {
        SettingsEditor {
            current: saved.clone(),
            saved,
        }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    pub fn saved(&self) -> &Settings {
        &self.saved
    }

    pub fn update(&mut self, f: impl FnOnce(&Settings) -> Settings) {
        self.current = f(&self.current);
    }

    pub fn has_changes(&self) -> bool {
        self.current != self.saved
    }

    pub fn save(&mut self) -> &Settings {
        self.saved = self.current.clone();
        &self.saved
    }

    pub fn discard(&mut self) {
        self.current = self.saved.clone();
    }
}
