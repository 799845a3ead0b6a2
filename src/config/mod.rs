// SPDX-License-Identifier: MPL-2.0
//! Player configuration, loaded from and saved to a `player.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lens_playback::config::{self, PlayerConfig};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.autoplay = true;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "player.toml";

/// Behavior switches and timing knobs for one player instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Issue a play request as soon as the player is created.
    pub autoplay: bool,

    /// Start with volume 0 (not persisted).
    pub muted: bool,

    /// Never toggle picture-in-picture even when supported.
    pub disable_picture_in_picture: bool,

    /// Buffering indicator debounce, in milliseconds.
    pub buffering_debounce_ms: u64,

    /// Controller auto-hide delay, in milliseconds.
    pub controller_hide_delay_ms: u64,

    /// Preference key used to remember the volume.
    pub volume_storage_key: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            muted: false,
            disable_picture_in_picture: false,
            buffering_debounce_ms: DEFAULT_BUFFERING_DEBOUNCE_MS,
            controller_hide_delay_ms: DEFAULT_CONTROLLER_HIDE_DELAY_MS,
            volume_storage_key: VOLUME_STORAGE_KEY.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Buffering debounce, clamped to the accepted timer range.
    #[must_use]
    pub fn buffering_debounce(&self) -> Duration {
        clamped_delay(self.buffering_debounce_ms)
    }

    /// Controller hide delay, clamped to the accepted timer range.
    #[must_use]
    pub fn controller_hide_delay(&self) -> Duration {
        clamped_delay(self.controller_hide_delay_ms)
    }
}

fn clamped_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_TIMER_DELAY_MS, MAX_TIMER_DELAY_MS))
}

fn default_config_path() -> Option<PathBuf> {
    paths::config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the config from the default location, or defaults if absent.
pub fn load() -> Result<PlayerConfig> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PlayerConfig::default())
}

/// Saves the config to the default location.
pub fn save(config: &PlayerConfig) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a config file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<PlayerConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid player config, using defaults");
            Ok(PlayerConfig::default())
        }
    }
}

pub fn save_to_path(config: &PlayerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = PlayerConfig {
            autoplay: true,
            muted: true,
            disable_picture_in_picture: true,
            buffering_debounce_ms: 500,
            controller_hide_delay_ms: 4000,
            volume_storage_key: "custom/volume".to_string(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("player.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("player.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, PlayerConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("player.toml");
        fs::write(&config_path, "autoplay = true\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.autoplay);
        assert_eq!(loaded.controller_hide_delay_ms, DEFAULT_CONTROLLER_HIDE_DELAY_MS);
        assert_eq!(loaded.volume_storage_key, VOLUME_STORAGE_KEY);
    }

    #[test]
    fn delays_are_clamped() {
        let config = PlayerConfig {
            buffering_debounce_ms: 0,
            controller_hide_delay_ms: u64::MAX,
            ..PlayerConfig::default()
        };
        assert_eq!(config.buffering_debounce(), Duration::from_millis(MIN_TIMER_DELAY_MS));
        assert_eq!(config.controller_hide_delay(), Duration::from_millis(MAX_TIMER_DELAY_MS));
    }

    #[test]
    fn default_delays_match_constants() {
        let config = PlayerConfig::default();
        assert_eq!(config.buffering_debounce(), Duration::from_millis(1000));
        assert_eq!(config.controller_hide_delay(), Duration::from_millis(3000));
    }
}
