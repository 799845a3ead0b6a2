// SPDX-License-Identifier: MPL-2.0
//! Inputs and outputs of the player core.
//!
//! Everything the core reacts to arrives as one [`Input`] on a single
//! ordered channel; everything it announces leaves as a [`Notification`].

use super::gate::{GateOutcome, RequestId};
use crate::domain::error::MediaError;
use crate::domain::video::{ActionSource, TimeRange};

/// Events emitted by the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    LoadedData,
    Error(MediaError),
    DurationChange(f64),
    /// Playhead position in seconds.
    TimeUpdate(f64),
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback resumed after a stall or start.
    Playing,
    Seeking,
    Seeked,
    /// Full buffered range set, ordered.
    Progress(Vec<TimeRange>),
}

/// State changes reported by the display capability providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityEvent {
    FullscreenChanged(bool),
    PipChanged(bool),
}

/// Pointer activity over the player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerActivity {
    Enter,
    Move,
    Down,
    Up,
    Leave,
}

/// Commands issued by presentation or the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RequestPlay(ActionSource),
    RequestPause(ActionSource),
    /// Pause requested by the host rather than the viewer.
    SystemPause {
        dont_apply_on_fullscreen: bool,
    },
    /// Play if paused, pause if playing (video surface click).
    Toggle,
    Seek(f64),
    SetVolume(f32),
    Pointer(PointerActivity),
    /// Pointer entered (`true`) or left (`false`) the control bar.
    ControlsHovered(bool),
    BeginScrubberDrag,
    EndScrubberDrag,
    ToggleFullscreen,
    TogglePip,
}

/// Which sub-component owns a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Buffering,
    ControllerHide,
}

/// Everything the core processes, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(Command),
    Media(MediaEvent),
    Capability(CapabilityEvent),
    TimerFired {
        timer: TimerKind,
        generation: u64,
    },
    PermissionResolved {
        request: RequestId,
        outcome: GateOutcome,
    },
    /// Stops the runtime loop and tears the core down.
    Shutdown,
}

impl From<Command> for Input {
    fn from(command: Command) -> Self {
        Input::Command(command)
    }
}

impl From<MediaEvent> for Input {
    fn from(event: MediaEvent) -> Self {
        Input::Media(event)
    }
}

impl From<CapabilityEvent> for Input {
    fn from(event: CapabilityEvent) -> Self {
        Input::Capability(event)
    }
}

/// Observable player events. Not retained: receivers that lag or subscribe
/// late miss them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    RequestPlay,
    RequestPause,
    /// First granted play of a playback run.
    PlayCount,
    PlayRejected,
    EnterFullscreen,
    ExitFullscreen,
    EnterPip,
    ExitPip,
}
