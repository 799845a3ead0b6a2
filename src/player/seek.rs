// SPDX-License-Identifier: MPL-2.0
//! Seek coordination.
//!
//! Tracks the in-flight seek so stale time updates can be dropped, and
//! decides when a seek should restart playback (seeking out of the ended
//! state).

use crate::domain::video::PlaybackState;

/// In-flight seek. At most one exists; a newer seek replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekSession {
    pub target_time: f64,
    pub active: bool,
}

/// What the core should do for one seek request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPlan {
    /// Clamped target the playhead moves to.
    pub target: f64,
    /// The seek starts from the ended state and must be followed by a play
    /// request.
    pub replay: bool,
}

#[derive(Debug, Default)]
pub struct SeekCoordinator {
    session: Option<SeekSession>,
}

impl SeekCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for `target` and plans the seek against live state.
    pub fn begin(&mut self, target: f64, state: &PlaybackState) -> SeekPlan {
        let target = clamp_target(target, state.duration);
        self.session = Some(SeekSession {
            target_time: target,
            active: true,
        });
        SeekPlan {
            target,
            replay: state.is_ended(),
        }
    }

    /// Media element started seeking. Seeks the core did not issue (native
    /// controls) open a session at the current position.
    pub fn on_seeking(&mut self, current_time: f64) {
        match &mut self.session {
            Some(session) => session.active = true,
            None => {
                self.session = Some(SeekSession {
                    target_time: current_time,
                    active: true,
                })
            }
        }
    }

    /// Media element finished seeking. The session is settled and dropped.
    pub fn on_seeked(&mut self) {
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some_and(|session| session.active)
    }

    pub fn session(&self) -> Option<SeekSession> {
        self.session
    }

    /// Drops any session without waiting for the media element.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

/// Clamps to `[0, duration]`, or to `>= 0` while duration is unknown.
fn clamp_target(target: f64, duration: f64) -> f64 {
    if !target.is_finite() {
        return 0.0;
    }
    let target = target.max(0.0);
    if duration > 0.0 {
        target.min(duration)
    } else {
        target
    }
}
