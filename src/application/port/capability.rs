// SPDX-License-Identifier: MPL-2.0
//! Display capability port (fullscreen, picture-in-picture).
//!
//! Providers are injected per player. The core mirrors their active state as
//! a boolean and never caches anything else about them.

/// Query/command interface of a display mode the host can toggle.
pub trait DisplayCapability: Send {
    /// Whether the platform supports this mode at all.
    fn is_supported(&self) -> bool;

    /// Whether the mode is currently active for this player.
    fn is_active(&self) -> bool;

    /// Requests entering or leaving the mode.
    ///
    /// The provider reports the resulting state through a
    /// [`CapabilityEvent`](crate::player::CapabilityEvent).
    fn toggle(&mut self);
}

/// Capability for platforms without the mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl DisplayCapability for Unsupported {
    fn is_supported(&self) -> bool {
        false
    }

    fn is_active(&self) -> bool {
        false
    }

    fn toggle(&mut self) {}
}
