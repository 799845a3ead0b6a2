// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! Value objects independent of any runtime or collaborator concerns.

pub mod newtypes;
pub mod playback;

pub use newtypes::{buffered_time, TimeRange, Volume};
pub use playback::{ActionSource, LastAction, LifecyclePhase, PlaybackState};
