// SPDX-License-Identifier: MPL-2.0
//! Domain layer - playback value types and the state aggregate.
//!
//! # Modules
//!
//! - [`error`]: Domain error payloads ([`MediaError`](error::MediaError),
//!   [`PermissionDenied`](error::PermissionDenied))
//! - [`video`]: Playback types ([`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`TimeRange`](video::TimeRange))

pub mod error;
pub mod video;
