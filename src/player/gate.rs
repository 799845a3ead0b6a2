// SPDX-License-Identifier: MPL-2.0
//! Play-request gate.
//!
//! Every play request asks the [`PermissionProvider`] for permission. The
//! returned future runs in its own task and reports back as
//! [`Input::PermissionResolved`], so the core keeps processing other input
//! while permission is pending.
//!
//! Requests are never cancelled by newer ones. Instead each request records
//! the gate's intent epoch when issued; [`PlayGate::supersede`] advances the
//! epoch whenever the viewer expresses a contrary intent (a pause). A grant
//! carrying an old epoch is reported as stale and must not be applied.

use super::events::Input;
use crate::application::port::PermissionProvider;
use crate::domain::error::PermissionDenied;
use crate::domain::video::ActionSource;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Answer from the permission collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    Rejected(PermissionDenied),
}

impl From<Result<(), PermissionDenied>> for GateOutcome {
    fn from(result: Result<(), PermissionDenied>) -> Self {
        match result {
            Ok(()) => GateOutcome::Granted,
            Err(denied) => GateOutcome::Rejected(denied),
        }
    }
}

/// Why a play was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    /// Viewer or host asked to play.
    Explicit,
    /// Seek out of the ended state restarts playback.
    ReplayOnSeek,
}

/// One outstanding request.
struct PlayRequest {
    source: ActionSource,
    origin: PlayOrigin,
    epoch: u64,
    task: JoinHandle<()>,
}

/// A request taken off the gate on resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub source: ActionSource,
    pub origin: PlayOrigin,
    /// A contrary intent was expressed after the request was issued.
    pub stale: bool,
}

pub struct PlayGate {
    provider: Box<dyn PermissionProvider>,
    inputs: mpsc::UnboundedSender<Input>,
    next_id: u64,
    epoch: u64,
    outstanding: HashMap<RequestId, PlayRequest>,
}

impl PlayGate {
    pub fn new(provider: Box<dyn PermissionProvider>, inputs: mpsc::UnboundedSender<Input>) -> Self {
        Self {
            provider,
            inputs,
            next_id: 0,
            epoch: 0,
            outstanding: HashMap::new(),
        }
    }

    /// Issues a permission request. Must run inside a tokio runtime.
    pub fn request(&mut self, source: ActionSource, origin: PlayOrigin) -> RequestId {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        let permission = self.provider.request_permission();
        let inputs = self.inputs.clone();
        let task = tokio::spawn(async move {
            let outcome = GateOutcome::from(permission.await);
            let _ = inputs.send(Input::PermissionResolved {
                request: id,
                outcome,
            });
        });
        self.outstanding.insert(
            id,
            PlayRequest {
                source,
                origin,
                epoch: self.epoch,
                task,
            },
        );
        id
    }

    /// Marks every outstanding request as stale.
    pub fn supersede(&mut self) {
        self.epoch += 1;
    }

    /// Takes a resolved request off the gate.
    ///
    /// Returns `None` for requests the gate no longer tracks (aborted on
    /// teardown).
    pub fn resolve(&mut self, id: RequestId) -> Option<ResolvedRequest> {
        let request = self.outstanding.remove(&id)?;
        Some(ResolvedRequest {
            source: request.source,
            origin: request.origin,
            stale: request.epoch != self.epoch,
        })
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Aborts every pending permission task.
    pub fn cancel_all(&mut self) {
        for (_, request) in self.outstanding.drain() {
            request.task.abort();
        }
        self.epoch += 1;
    }
}

impl Drop for PlayGate {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for PlayGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayGate")
            .field("epoch", &self.epoch)
            .field("outstanding", &self.outstanding.len())
            .finish()
    }
}
