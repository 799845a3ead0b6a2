// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (for tests)
//! 2. **Environment variable** `LENS_PLAYBACK_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "LensPlayback";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LENS_PLAYBACK_CONFIG_DIR";

/// Returns the config directory used for player settings and preferences.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory with an optional explicit override.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate a process-wide env var.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");
        let dir = config_dir_with_override(Some(PathBuf::from("/explicit")));
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(dir, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");
        let dir = config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(dir, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");
        let dir = config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = dir {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
