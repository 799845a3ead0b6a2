// SPDX-License-Identifier: MPL-2.0
//! Debounced one-shot timer.
//!
//! A [`DebouncedTimer`] fires once after its delay unless cancelled. Firing
//! does not touch any state directly: it posts [`Input::TimerFired`] back to
//! the core's input channel, tagged with a generation. The owner confirms the
//! fire with [`DebouncedTimer::accept_fire`], which rejects generations that
//! were cancelled or restarted after the message was queued.
//!
//! Dropping the timer aborts the pending task.

use super::events::{Input, TimerKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct DebouncedTimer {
    kind: TimerKind,
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    inputs: mpsc::UnboundedSender<Input>,
}

impl DebouncedTimer {
    pub fn new(kind: TimerKind, delay: Duration, inputs: mpsc::UnboundedSender<Input>) -> Self {
        Self {
            kind,
            delay,
            generation: 0,
            pending: None,
            inputs,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the timer unless one is already pending.
    ///
    /// Returns true if a new countdown started.
    pub fn arm(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.start();
        true
    }

    /// Cancels any pending countdown and starts a fresh one.
    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    /// Cancels the pending countdown. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Confirms a fire message. Returns false for stale generations.
    pub fn accept_fire(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && generation == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }

    fn start(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let timer = self.kind;
        let deadline = tokio::time::Instant::now() + self.delay;
        let inputs = self.inputs.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = inputs.send(Input::TimerFired { timer, generation });
        }));
    }
}

impl Drop for DebouncedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for DebouncedTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedTimer")
            .field("kind", &self.kind)
            .field("delay", &self.delay)
            .field("generation", &self.generation)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
