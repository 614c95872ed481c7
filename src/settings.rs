//! Accessibility and display preferences
//!
//! Persisted separately from the deck in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::platform::Storage;

/// User preferences for how cards convey their meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Convey swipe direction with explicit mark buttons instead of the
    /// green/red tint
    #[serde(default)]
    pub differentiate_without_color: bool,
    /// Assistive mode: cards show one text at a time and the explicit
    /// mark buttons are always available
    #[serde(default)]
    pub accessibility_enabled: bool,
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "flashdeck_settings";

    /// Load settings, falling back to defaults on absent or malformed data
    pub fn load(storage: &dyn Storage) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings");
                return settings;
            }
        }
        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings, best-effort
    pub fn save(&self, storage: &mut dyn Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }

    /// Whether the explicit correct/wrong buttons are shown
    pub fn shows_mark_buttons(&self) -> bool {
        self.differentiate_without_color || self.accessibility_enabled
    }
}
