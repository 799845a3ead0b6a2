// SPDX-License-Identifier: MPL-2.0
//! Playback permission port.
//!
//! Starting playback may require user-gesture validation or ad/consent
//! gating that lives outside the core. The provider answers with a future;
//! `Ok(())` grants, `Err` denies.

use crate::domain::error::PermissionDenied;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Pending answer to one play request.
pub type PermissionFuture = BoxFuture<'static, Result<(), PermissionDenied>>;

/// Port for the "may I play" collaborator.
pub trait PermissionProvider: Send {
    /// Asks for permission to start playback.
    ///
    /// Each call must return an independent future; several may be pending
    /// at once.
    fn request_permission(&mut self) -> PermissionFuture;
}

/// Provider that grants every request immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGrant;

impl PermissionProvider for AlwaysGrant {
    fn request_permission(&mut self) -> PermissionFuture {
        futures_util::future::ready(Ok(())).boxed()
    }
}
