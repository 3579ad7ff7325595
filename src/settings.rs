//! Player preferences
//!
//! Purely cosmetic; persisted in LocalStorage, never read by the simulation.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Shadow glow around the player and entities
    pub glow: bool,
    /// Skill names under each entity
    pub labels: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no glow)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glow: true,
            labels: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective glow (respects reduced_motion)
    pub fn effective_glow(&self) -> bool {
        self.glow && !self.reduced_motion
    }

    /// Flip the preference bound to a hotkey: G glow, L labels, F fps,
    /// M reduced motion. Returns false for any other key.
    pub fn toggle_for_key(&mut self, key: &str) -> bool {
        let flag = match key {
            "g" | "G" => &mut self.glow,
            "l" | "L" => &mut self.labels,
            "f" | "F" => &mut self.show_fps,
            "m" | "M" => &mut self.reduced_motion,
            _ => return false,
        };
        *flag = !*flag;
        true
    }

    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "skill_collector_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Stored settings unreadable: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::debug!("Saved settings {}", json),
                Err(_) => log::warn!("LocalStorage refused settings"),
            },
            Err(e) => log::warn!("Settings not serializable: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_glow() {
        let mut s = Settings::default();
        assert!(s.effective_glow());
        s.reduced_motion = true;
        assert!(!s.effective_glow());
    }

    #[test]
    fn test_missing_fields_default() {
        let s: Settings = serde_json::from_str(r#"{ "show_fps": true }"#).unwrap();
        assert!(s.show_fps);
        assert!(s.labels);
    }

    #[test]
    fn test_hotkeys_toggle_preferences() {
        let mut s = Settings::default();
        assert!(s.toggle_for_key("f"));
        assert!(s.show_fps);
        assert!(s.toggle_for_key("G"));
        assert!(!s.glow);
        assert!(s.toggle_for_key("m"));
        assert!(s.reduced_motion);
        assert!(s.toggle_for_key("l"));
        assert!(!s.labels);
        assert!(s.toggle_for_key("f"));
        assert!(!s.show_fps);
    }

    #[test]
    fn test_movement_keys_are_not_hotkeys() {
        let mut s = Settings::default();
        for key in ["w", "a", "s", "d", "ArrowUp", "Escape"] {
            assert!(!s.toggle_for_key(key));
        }
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_saved_form_reloads() {
        let mut s = Settings::default();
        s.toggle_for_key("l");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), s);
    }
}
