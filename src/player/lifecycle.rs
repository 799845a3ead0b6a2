// SPDX-License-Identifier: MPL-2.0
//! Playback lifecycle state machine.
//!
//! Owns the [`PlaybackState`] aggregate. Transitions are plain methods that
//! mutate the state and report what happened; talking to collaborators is
//! left to the core.
//!
//! Phases are derived, not stored:
//! `NeverPlayed → Starting → Playing ⇄ Paused → Ended → (replay) Starting`,
//! with `Error` reachable from anywhere and buffering as an overlay.

use super::gate::PlayOrigin;
use crate::domain::error::MediaError;
use crate::domain::video::{ActionSource, LastAction, PlaybackState, TimeRange, Volume};

/// Result of committing a granted play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCommit {
    /// This grant started a new playback run.
    pub first_start: bool,
    /// Playback restarts from the ended state and the playhead must go back
    /// to zero.
    pub rewind: bool,
    /// `playing` was already true before the commit.
    pub was_playing: bool,
}

/// Result of a pause request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    Applied,
    NotPlaying,
    /// Suppressed while the loading indicator is up.
    Loading,
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    state: PlaybackState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Applies a granted play, evaluated against the state at grant time.
    pub fn commit_play(&mut self, source: ActionSource, origin: PlayOrigin) -> PlayCommit {
        let first_start = !self.state.playback_started;
        let rewind = first_start && origin == PlayOrigin::Explicit && self.state.is_ended();
        let was_playing = self.state.playing;

        if first_start {
            self.state.playback_started = true;
            if !self.state.data_loaded {
                self.state.loading = true;
            }
        }
        self.state.playing = true;
        self.state.ever_played = true;
        self.state.last_action = LastAction::Play;
        self.state.last_action_source = source;
        self.state.error = None;

        PlayCommit {
            first_start,
            rewind,
            was_playing,
        }
    }

    pub fn apply_pause(&mut self, source: ActionSource) -> PauseOutcome {
        if !self.state.playing {
            return PauseOutcome::NotPlaying;
        }
        if self.state.loading {
            return PauseOutcome::Loading;
        }
        self.state.playing = false;
        self.state.last_action = LastAction::Pause;
        self.state.last_action_source = source;
        PauseOutcome::Applied
    }

    /// Mirrors a `play` event. Returns true if the state changed.
    pub fn media_play(&mut self) -> bool {
        self.mirror_playing(true)
    }

    /// Mirrors a `pause` event. Returns true if the state changed.
    pub fn media_pause(&mut self) -> bool {
        self.mirror_playing(false)
    }

    fn mirror_playing(&mut self, playing: bool) -> bool {
        if self.state.playing == playing {
            return false;
        }
        self.state.playing = playing;
        true
    }

    /// Natural end. `ever_played` and `current_time` are kept so
    /// presentation can offer a replay.
    pub fn media_ended(&mut self) {
        self.state.playback_started = false;
        self.state.last_action = LastAction::None;
        self.state.playing = false;
        self.state.loading = false;
    }

    pub fn media_loaded_data(&mut self) {
        self.state.data_loaded = true;
        self.state.loading = false;
    }

    pub fn media_error(&mut self, error: MediaError) {
        self.state.playing = false;
        self.state.loading = false;
        self.state.error = Some(error);
    }

    /// Later values overwrite earlier ones. Invalid durations are ignored.
    pub fn set_duration(&mut self, duration: f64) -> bool {
        if !duration.is_finite() || duration < 0.0 {
            return false;
        }
        self.state.duration = duration;
        true
    }

    /// Applies a media time update unless it must be suppressed.
    ///
    /// Returns false when the update was dropped (loading, or a seek in
    /// flight).
    pub fn time_update(&mut self, time: f64, seek_active: bool) -> bool {
        if self.state.loading || seek_active || !time.is_finite() {
            return false;
        }
        self.state.current_time = time.max(0.0);
        true
    }

    /// Optimistic playhead move for an explicit seek.
    pub fn move_playhead(&mut self, time: f64) {
        self.state.current_time = time;
    }

    /// Returns true if the flag changed.
    pub fn set_loading(&mut self, loading: bool) -> bool {
        if self.state.loading == loading {
            return false;
        }
        self.state.loading = loading;
        true
    }

    pub fn set_buffered(&mut self, ranges: Vec<TimeRange>) {
        self.state.buffered = ranges;
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.state.volume = volume;
    }

    /// Returns true if the mirrored flag changed.
    pub fn mirror_fullscreen(&mut self, active: bool) -> bool {
        let changed = self.state.fullscreen != active;
        self.state.fullscreen = active;
        changed
    }

    /// Returns true if the mirrored flag changed.
    pub fn mirror_pip(&mut self, active: bool) -> bool {
        let changed = self.state.picture_in_picture != active;
        self.state.picture_in_picture = active;
        changed
    }
}
