// SPDX-License-Identifier: MPL-2.0
//! Playback core and its runtime.
//!
//! - [`events`]: inputs the core reacts to and notifications it emits
//! - [`lifecycle`]: playback state transitions
//! - [`gate`]: permission-gated play requests
//! - [`seek`]: in-flight seek tracking and replay-on-seek
//! - [`timer`]: debounced one-shot timers
//! - [`visibility`]: controller overlay policy
//! - [`core`]: the dispatcher tying them together
//! - [`runtime`]: task and handle around the core

pub mod core;
pub mod events;
pub mod gate;
pub mod lifecycle;
pub mod runtime;
pub mod seek;
pub mod snapshot;
pub mod timer;
pub mod visibility;

pub use self::core::{Collaborators, PlayerCore};
pub use events::{CapabilityEvent, Command, Input, MediaEvent, Notification, PointerActivity};
pub use runtime::{spawn_player, PlayerHandle};
pub use snapshot::PresentationSnapshot;
pub use visibility::ControllerVisibilityState;
