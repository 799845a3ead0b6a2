// SPDX-License-Identifier: MPL-2.0
//! Preference persistence port.

use crate::error::Result;

/// Key/value store for small user preferences (e.g. the last volume).
pub trait PreferenceStore: Send {
    /// Returns the stored value, or `None` if the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
