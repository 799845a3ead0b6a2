// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and collaborator fakes.
//!
//! Re-exports the `approx` crate's assertion macros for float comparison,
//! which handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::application::port::{
    DisplayCapability, MediaElement, PermissionFuture, PermissionProvider, PreferenceStore,
};
use crate::domain::error::PermissionDenied;
use crate::error::Result;
use crate::infrastructure::MemoryPreferenceStore;
use futures_util::FutureExt;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Lets every ready task run so timer fires and permission resolutions
/// reach their channels.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// A call the core made on the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCall {
    Play,
    Pause,
    SeekTo(f64),
    SetVolume(f32),
}

/// Media element that records calls.
#[derive(Debug, Clone, Default)]
pub struct FakeMedia {
    calls: Arc<Mutex<Vec<MediaCall>>>,
}

impl FakeMedia {
    pub fn calls(&self) -> Vec<MediaCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl MediaElement for FakeMedia {
    fn play(&mut self) {
        self.calls.lock().unwrap().push(MediaCall::Play);
    }

    fn pause(&mut self) {
        self.calls.lock().unwrap().push(MediaCall::Pause);
    }

    fn seek_to(&mut self, time_secs: f64) {
        self.calls.lock().unwrap().push(MediaCall::SeekTo(time_secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.lock().unwrap().push(MediaCall::SetVolume(volume));
    }
}

#[derive(Debug, Clone, Copy)]
enum PermissionMode {
    Grant,
    Deny,
    Manual,
}

/// Permission provider answering automatically or on demand.
#[derive(Debug, Clone)]
pub struct ScriptedPermission {
    mode: PermissionMode,
    pending: Arc<Mutex<VecDeque<oneshot::Sender<std::result::Result<(), PermissionDenied>>>>>,
}

impl ScriptedPermission {
    pub fn granting() -> Self {
        Self::with_mode(PermissionMode::Grant)
    }

    pub fn denying() -> Self {
        Self::with_mode(PermissionMode::Deny)
    }

    /// Requests stay pending until [`resolve_next`](Self::resolve_next).
    pub fn manual() -> Self {
        Self::with_mode(PermissionMode::Manual)
    }

    fn with_mode(mode: PermissionMode) -> Self {
        Self {
            mode,
            pending: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Answers the oldest pending request. Returns false if none is pending.
    pub fn resolve_next(&self, answer: std::result::Result<(), PermissionDenied>) -> bool {
        match self.pending.lock().unwrap().pop_front() {
            Some(sender) => sender.send(answer).is_ok(),
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

impl PermissionProvider for ScriptedPermission {
    fn request_permission(&mut self) -> PermissionFuture {
        match self.mode {
            PermissionMode::Grant => futures_util::future::ready(Ok(())).boxed(),
            PermissionMode::Deny => {
                futures_util::future::ready(Err(PermissionDenied::because("scripted"))).boxed()
            }
            PermissionMode::Manual => {
                let (tx, rx) = oneshot::channel();
                self.pending.lock().unwrap().push_back(tx);
                async move {
                    rx.await
                        .unwrap_or_else(|_| Err(PermissionDenied::because("cancelled")))
                }
                .boxed()
            }
        }
    }
}

/// Preference store shared between the core and the test.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MemoryPreferenceStore>>,
}

impl SharedStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryPreferenceStore::with_entry(key, value))),
        }
    }
}

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.lock().unwrap().set(key, value)
    }
}

/// Display capability whose active flag the test controls.
#[derive(Debug, Clone)]
pub struct FakeCapability {
    supported: bool,
    active: Arc<Mutex<bool>>,
    toggles: Arc<Mutex<usize>>,
}

impl FakeCapability {
    pub fn supported() -> Self {
        Self {
            supported: true,
            active: Arc::new(Mutex::new(false)),
            toggles: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_active(&self, active: bool) {
        *self.active.lock().unwrap() = active;
    }

    pub fn toggles(&self) -> usize {
        *self.toggles.lock().unwrap()
    }
}

impl DisplayCapability for FakeCapability {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn is_active(&self) -> bool {
        *self.active.lock().unwrap()
    }

    fn toggle(&mut self) {
        *self.toggles.lock().unwrap() += 1;
    }
}
