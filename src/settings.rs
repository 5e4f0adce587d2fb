//! Runtime settings for the native driver
//!
//! Loaded from an optional JSON file. Missing or malformed files fall back to
//! defaults with a warning; gameplay balance is not configurable here.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Driver settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed (None = derive from wall clock)
    pub seed: Option<u64>,
    /// Demo mode - steer the collector automatically
    pub autopilot: bool,
    /// Pace frames against the wall clock instead of running flat out
    pub realtime: bool,
    /// Virtual frame length fed to the scheduler
    pub frame_ms: u64,
    /// Cap on wall-clock time processed per frame (realtime only)
    pub max_frame_ms: u64,
    /// Rounds to play before exiting
    pub rounds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            realtime: false,
            frame_ms: 16,
            max_frame_ms: 100,
            rounds: 1,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "KANJI_CATCH_SETTINGS";

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve settings from an explicit path or the environment
    pub fn resolve(arg: Option<String>) -> Self {
        match arg.or_else(|| std::env::var(Self::ENV_VAR).ok()) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Clamp values the driver cannot work with
    pub fn sanitized(mut self) -> Self {
        self.frame_ms = self.frame_ms.max(1);
        self.max_frame_ms = self.max_frame_ms.max(self.frame_ms);
        self.rounds = self.rounds.max(1);
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.frame_ms, Settings::default().frame_ms);
        assert!(s.autopilot);
    }

    #[test]
    fn test_sanitized_clamps() {
        let s = Settings::from_json(r#"{ "frame_ms": 0, "max_frame_ms": 0, "rounds": 0 }"#)
            .unwrap();
        assert_eq!(s.frame_ms, 1);
        assert_eq!(s.max_frame_ms, 1);
        assert_eq!(s.rounds, 1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            seed: Some(7),
            rounds: 3,
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&s.to_json()).unwrap(), s);
    }
}
