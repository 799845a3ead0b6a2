// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Timing**: Buffering debounce and controller auto-hide delays
//! - **Volume**: Playback volume bounds and precision
//! - **Storage**: Preference keys

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay before a `waiting` signal turns into a visible loading indicator.
pub const DEFAULT_BUFFERING_DEBOUNCE_MS: u64 = 1000;

/// Delay after the last pointer activity before the controller hides.
pub const DEFAULT_CONTROLLER_HIDE_DELAY_MS: u64 = 3000;

/// Smallest accepted delay for either timer.
pub const MIN_TIMER_DELAY_MS: u64 = 1;

/// Largest accepted delay for either timer.
pub const MAX_TIMER_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume used until a persisted value is found.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volumes are rounded to this many steps per unit (two decimals).
pub const VOLUME_PRECISION: f32 = 100.0;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Preference key under which the last volume is remembered.
pub const VOLUME_STORAGE_KEY: &str = "lens-playback/history-volume";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIMER_DELAY_MS > 0);
    assert!(MAX_TIMER_DELAY_MS >= MIN_TIMER_DELAY_MS);
    assert!(DEFAULT_BUFFERING_DEBOUNCE_MS >= MIN_TIMER_DELAY_MS);
    assert!(DEFAULT_BUFFERING_DEBOUNCE_MS <= MAX_TIMER_DELAY_MS);
    assert!(DEFAULT_CONTROLLER_HIDE_DELAY_MS >= MIN_TIMER_DELAY_MS);
    assert!(DEFAULT_CONTROLLER_HIDE_DELAY_MS <= MAX_TIMER_DELAY_MS);

    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_PRECISION > 0.0);
};
