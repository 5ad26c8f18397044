//! Player preferences
//!
//! Persisted separately from the best score, as JSON.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Accessibility ===
    /// Draw the actor level instead of tilting it
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "skyflap_settings";

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Flip the mute flag and persist it; returns the new state
    pub fn toggle_mute(&mut self, store: &mut impl KeyValueStore) -> bool {
        self.muted = !self.muted;
        self.save(store);
        self.muted
    }

    /// Rotation the renderer should apply to the actor
    pub fn effective_rotation(&self, rotation_deg: f32) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            rotation_deg
        }
    }

    /// Load settings, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Could not save settings: {}", e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_effective_volume() {
        let mut s = Settings::default();
        assert!((s.effective_volume() - 0.8).abs() < 1e-6);
        s.muted = true;
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_toggle_mute_persists() {
        let mut store = MemoryStore::new();
        let mut s = Settings::default();

        assert!(s.toggle_mute(&mut store));
        assert_eq!(s.effective_volume(), 0.0);
        assert!(Settings::load(&store).muted);

        assert!(!s.toggle_mute(&mut store));
        assert!(!Settings::load(&store).muted);
    }

    #[test]
    fn test_reduced_motion_levels_actor() {
        let s = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert_eq!(s.effective_rotation(25.0), 0.0);
        assert_eq!(Settings::default().effective_rotation(25.0), 25.0);
    }

    #[test]
    fn test_save_load_and_corrupt_fallback() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        let s = Settings {
            muted: true,
            sfx_volume: 0.5,
            ..Settings::default()
        };
        s.save(&mut store);
        assert_eq!(Settings::load(&store), s);

        store.set(Settings::STORAGE_KEY, "{not json").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
