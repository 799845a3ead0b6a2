// SPDX-License-Identifier: MPL-2.0
//! Read-only view handed to presentation.

use super::visibility::{controller_visible, ControllerVisibilityState};
use crate::domain::video::{buffered_time, ActionSource, LastAction, LifecyclePhase, PlaybackState};

/// Everything presentation needs to render one frame of the player chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationSnapshot {
    pub playback: PlaybackState,
    pub controller: ControllerVisibilityState,
    pub phase: LifecyclePhase,
    pub controller_visible: bool,
    /// Buffering spinner.
    pub show_loader: bool,
    /// "Replay" cover after a natural end.
    pub show_replay: bool,
    /// Big play button before the first play.
    pub show_play_cover: bool,
    /// Control bar mounted (hidden during the first load at position zero).
    pub show_controller_bar: bool,
    /// Centered play/pause feedback icon. Control-bar actions skip it.
    pub show_action_feedback: bool,
    pub is_fullscreen: bool,
    /// End of the buffered range under the playhead.
    pub buffered_time: f64,
    /// A seek is in flight.
    pub seeking: bool,
}

impl PresentationSnapshot {
    pub fn new(
        playback: &PlaybackState,
        controller: ControllerVisibilityState,
        seeking: bool,
    ) -> Self {
        Self {
            phase: playback.phase(),
            controller_visible: controller_visible(playback, &controller),
            show_loader: playback.is_buffering(),
            show_replay: playback.is_ended(),
            show_play_cover: !playback.ever_played,
            show_controller_bar: playback.playback_started
                && (!playback.loading || playback.current_time != 0.0),
            show_action_feedback: playback.last_action != LastAction::None
                && playback.last_action_source != ActionSource::Button,
            is_fullscreen: playback.is_fullscreen(),
            buffered_time: buffered_time(playback.current_time, &playback.buffered),
            seeking,
            playback: playback.clone(),
            controller,
        }
    }
}

impl Default for PresentationSnapshot {
    fn default() -> Self {
        Self::new(
            &PlaybackState::default(),
            ControllerVisibilityState::default(),
            false,
        )
    }
}
