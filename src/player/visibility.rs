// SPDX-License-Identifier: MPL-2.0
//! Controller visibility policy.
//!
//! [`controller_visible`] is the pure decision. [`ControllerVisibility`]
//! feeds it: pointer activity force-shows the controller and restarts the
//! hide timer, leaving the surface hides at once, and a scrubber drag holds
//! the timer off until the drag ends.

use super::events::{Input, PointerActivity, TimerKind};
use super::timer::DebouncedTimer;
use crate::domain::video::PlaybackState;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pointer and timer inputs to the visibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerVisibilityState {
    /// Force-shown by recent pointer activity (hide timer running).
    pub shown: bool,
    pub hovered_over_controls: bool,
    pub dragging_scrubber: bool,
    /// Pointer pressed, or hovering the player surface.
    pub pointer_active: bool,
}

/// Whether the controller overlay should be visible.
///
/// - Never played: hidden
/// - Started and paused: visible
/// - Started and playing: visible while shown, hovered or dragging
/// - Ended (non-zero playhead): visible
#[must_use]
pub fn controller_visible(playback: &PlaybackState, controller: &ControllerVisibilityState) -> bool {
    let started = playback.playback_started
        && (!playback.playing
            || controller.shown
            || controller.hovered_over_controls
            || controller.dragging_scrubber);
    let ended = !playback.playback_started && playback.current_time != 0.0;
    started || ended
}

#[derive(Debug)]
pub struct ControllerVisibility {
    shown: bool,
    hovered_over_controls: bool,
    dragging_scrubber: bool,
    hovered: bool,
    pressed: bool,
    hide_timer: DebouncedTimer,
}

impl ControllerVisibility {
    pub fn new(hide_delay: Duration, inputs: mpsc::UnboundedSender<Input>) -> Self {
        Self {
            shown: false,
            hovered_over_controls: false,
            dragging_scrubber: false,
            hovered: false,
            pressed: false,
            hide_timer: DebouncedTimer::new(TimerKind::ControllerHide, hide_delay, inputs),
        }
    }

    pub fn state(&self) -> ControllerVisibilityState {
        ControllerVisibilityState {
            shown: self.shown,
            hovered_over_controls: self.hovered_over_controls,
            dragging_scrubber: self.dragging_scrubber,
            pointer_active: self.hovered || self.pressed,
        }
    }

    pub fn pointer(&mut self, activity: PointerActivity) {
        match activity {
            PointerActivity::Enter => {
                self.hovered = true;
                self.show();
            }
            PointerActivity::Move => self.show(),
            PointerActivity::Down => {
                self.pressed = true;
                self.show();
            }
            PointerActivity::Up => {
                self.pressed = false;
                self.show();
            }
            PointerActivity::Leave => {
                self.hovered = false;
                self.hide();
            }
        }
    }

    pub fn controls_hovered(&mut self, hovered: bool) {
        self.hovered_over_controls = hovered;
    }

    pub fn begin_scrubber_drag(&mut self) {
        self.dragging_scrubber = true;
        self.hide_timer.cancel();
    }

    /// Ends the drag and gives the viewer a full hide delay from here.
    pub fn end_scrubber_drag(&mut self) {
        if !self.dragging_scrubber {
            return;
        }
        self.dragging_scrubber = false;
        self.show();
    }

    /// Handles a hide-timer fire. Returns true if the controller hid.
    pub fn on_hide_timer(&mut self, generation: u64) -> bool {
        if !self.hide_timer.accept_fire(generation) || self.dragging_scrubber {
            return false;
        }
        self.shown = false;
        true
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    pub fn cancel_timer(&mut self) {
        self.hide_timer.cancel();
    }

    fn show(&mut self) {
        self.shown = true;
        if self.dragging_scrubber {
            return;
        }
        self.hide_timer.restart();
    }

    fn hide(&mut self) {
        self.hide_timer.cancel();
        self.shown = false;
    }
}
