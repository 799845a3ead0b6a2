// SPDX-License-Identifier: MPL-2.0
//! Playback state aggregate.
//!
//! [`PlaybackState`] is the single source of truth presentation renders from.
//! Its lifecycle phase is derived from the fields rather than stored as a
//! tag, see [`PlaybackState::phase`].

use super::newtypes::{TimeRange, Volume};
use crate::domain::error::MediaError;

/// Most recent explicit play/pause action, used for the action feedback icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastAction {
    #[default]
    None,
    Play,
    Pause,
}

/// Which surface an action came from.
///
/// `Button` actions come from the control bar and do not show the
/// centered feedback animation; `Video` actions come from the video surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionSource {
    #[default]
    None,
    Video,
    Button,
}

/// Lifecycle phase derived from [`PlaybackState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// No play request has passed the gate yet.
    NeverPlayed,
    /// Playback committed but the first data has not loaded.
    Starting,
    Playing,
    Paused,
    /// Reached the natural end, awaiting replay.
    Ended,
    /// The media element reported an error.
    Error,
}

/// Playback state, mutated only by the lifecycle state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// True from the first granted play until the media ends.
    pub playback_started: bool,
    /// True once any play has been granted. Never resets.
    pub ever_played: bool,
    pub playing: bool,
    /// Buffering indicator committed (after debounce) or first load pending.
    pub loading: bool,
    pub last_action: LastAction,
    pub last_action_source: ActionSource,
    /// Media duration in seconds.
    pub duration: f64,
    /// Playhead position in seconds.
    pub current_time: f64,
    pub volume: Volume,
    pub buffered: Vec<TimeRange>,
    pub data_loaded: bool,
    pub error: Option<MediaError>,
    /// Mirror of the fullscreen capability.
    pub fullscreen: bool,
    /// Mirror of the picture-in-picture capability.
    pub picture_in_picture: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playback_started: false,
            ever_played: false,
            playing: false,
            loading: false,
            last_action: LastAction::None,
            last_action_source: ActionSource::None,
            duration: 0.0,
            current_time: 0.0,
            volume: Volume::default(),
            buffered: Vec::new(),
            data_loaded: false,
            error: None,
            fullscreen: false,
            picture_in_picture: false,
        }
    }
}

impl PlaybackState {
    /// Returns true after a natural end, while a replay is being offered.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        !self.playback_started && self.ever_played && self.current_time != 0.0
    }

    /// Buffering overlay on the `Starting` and `Playing` phases.
    #[must_use]
    pub fn is_buffering(&self) -> bool {
        self.playback_started && self.loading
    }

    /// Fullscreen as presented. Some platforms report picture-in-picture as
    /// fullscreen, so PiP masks it.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen && !self.picture_in_picture
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        if self.error.is_some() {
            return LifecyclePhase::Error;
        }
        match (self.playback_started, self.ever_played) {
            (false, false) => LifecyclePhase::NeverPlayed,
            (false, true) => LifecyclePhase::Ended,
            (true, _) if !self.playing => LifecyclePhase::Paused,
            (true, _) if !self.data_loaded => LifecyclePhase::Starting,
            (true, _) => LifecyclePhase::Playing,
        }
    }
}
