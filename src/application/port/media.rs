// SPDX-License-Identifier: MPL-2.0
//! Media element port.
//!
//! The media element decodes and renders. The core only tells it what to do
//! and listens to the events it emits (see
//! [`MediaEvent`](crate::player::MediaEvent)).
//!
//! # Design Notes
//!
//! - Methods are not `async` and do not return errors: failures come back as
//!   `MediaEvent::Error`
//! - The core is the only writer of position and volume

/// Port for the underlying media element.
pub trait MediaElement: Send {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Moves the playhead to `time_secs`.
    fn seek_to(&mut self, time_secs: f64);

    /// Applies a volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32);
}
