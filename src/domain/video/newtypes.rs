// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! Type-safe wrappers for playback values, ensuring they are always within
//! valid ranges.

use crate::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME, VOLUME_PRECISION};

// =============================================================================
// Volume
// =============================================================================

/// Volume level in `[0.0, 1.0]`, rounded to two decimals.
///
/// # Example
///
/// ```
/// use lens_playback::domain::video::Volume;
///
/// assert_eq!(Volume::new(0.333).value(), 0.33);
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a volume level, clamping to the valid range and rounding.
    ///
    /// Non-finite input maps to the minimum.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if !volume.is_finite() {
            return Self(MIN_VOLUME);
        }
        let rounded = (volume * VOLUME_PRECISION).round() / VOLUME_PRECISION;
        Self(rounded.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Parses a persisted volume. Returns `None` for anything unusable.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value: f32 = raw.trim().parse().ok()?;
        value.is_finite().then(|| Self::new(value))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively muted.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.005
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// Time ranges
// =============================================================================

/// One contiguous buffered interval, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Returns the end of the buffered range that contains `current_time`.
///
/// Yields `0.0` when the playhead sits outside every range.
#[must_use]
pub fn buffered_time(current_time: f64, ranges: &[TimeRange]) -> f64 {
    ranges
        .iter()
        .find(|range| range.contains(current_time))
        .map_or(0.0, |range| range.end)
}
