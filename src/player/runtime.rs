// SPDX-License-Identifier: MPL-2.0
//! Runtime task driving a [`PlayerCore`] and the handle used to talk to it.
//!
//! One task owns the core and drains a single unbounded input channel in
//! arrival order. After every input the presentation snapshot is refreshed
//! on a `watch` channel; notifications go out on a `broadcast` channel.

use super::core::{Collaborators, PlayerCore};
use super::events::{CapabilityEvent, Command, Input, MediaEvent, Notification, PointerActivity};
use super::snapshot::PresentationSnapshot;
use crate::config::PlayerConfig;
use crate::domain::video::ActionSource;
use crate::error::{Error, Result};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Notifications buffered per subscriber before the slowest one lags.
const NOTIFICATION_CAPACITY: usize = 64;

/// Starts a player on the current tokio runtime.
///
/// `autoplay` and the stored volume take effect before the first snapshot is
/// published.
pub fn spawn_player(config: PlayerConfig, collaborators: Collaborators) -> PlayerHandle {
    let (inputs, mut rx) = mpsc::unbounded_channel();
    let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);

    let mut core = PlayerCore::new(config, collaborators, inputs.clone(), notifications.clone());
    let (snapshots_tx, snapshots) = watch::channel(core.snapshot());

    let task = tokio::spawn(async move {
        while let Some(input) = rx.recv().await {
            let stop = matches!(input, Input::Shutdown);
            core.dispatch(input);
            let next = core.snapshot();
            snapshots_tx.send_if_modified(|current| {
                if *current == next {
                    false
                } else {
                    *current = next;
                    true
                }
            });
            if stop {
                break;
            }
        }
        core.shutdown();
        tracing::debug!("Player runtime stopped");
    });

    PlayerHandle {
        inputs,
        snapshots,
        notifications,
        task: Some(task),
    }
}

/// Handle to a running player. Dropping it stops the player.
#[derive(Debug)]
pub struct PlayerHandle {
    inputs: mpsc::UnboundedSender<Input>,
    snapshots: watch::Receiver<PresentationSnapshot>,
    notifications: broadcast::Sender<Notification>,
    task: Option<JoinHandle<()>>,
}

impl PlayerHandle {
    /// Latest published snapshot.
    pub fn snapshot(&self) -> PresentationSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe_snapshots(&self) -> watch::Receiver<PresentationSnapshot> {
        self.snapshots.clone()
    }

    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    pub fn request_play(&self, source: ActionSource) -> Result<()> {
        self.command(Command::RequestPlay(source))
    }

    pub fn request_pause(&self, source: ActionSource) -> Result<()> {
        self.command(Command::RequestPause(source))
    }

    /// Host-initiated pause. With `dont_apply_on_fullscreen` it is ignored
    /// while fullscreen is active.
    pub fn system_pause(&self, dont_apply_on_fullscreen: bool) -> Result<()> {
        self.command(Command::SystemPause {
            dont_apply_on_fullscreen,
        })
    }

    pub fn toggle(&self) -> Result<()> {
        self.command(Command::Toggle)
    }

    /// Seeks to `time_secs`. Also the entry point for host "jump to" time
    /// updates.
    pub fn seek(&self, time_secs: f64) -> Result<()> {
        self.command(Command::Seek(time_secs))
    }

    pub fn set_volume(&self, volume: f32) -> Result<()> {
        self.command(Command::SetVolume(volume))
    }

    pub fn notify_pointer_active(&self) -> Result<()> {
        self.pointer(PointerActivity::Move)
    }

    pub fn notify_pointer_inactive(&self) -> Result<()> {
        self.pointer(PointerActivity::Leave)
    }

    pub fn pointer(&self, activity: PointerActivity) -> Result<()> {
        self.command(Command::Pointer(activity))
    }

    pub fn controls_hovered(&self, hovered: bool) -> Result<()> {
        self.command(Command::ControlsHovered(hovered))
    }

    pub fn begin_scrubber_drag(&self) -> Result<()> {
        self.command(Command::BeginScrubberDrag)
    }

    pub fn end_scrubber_drag(&self) -> Result<()> {
        self.command(Command::EndScrubberDrag)
    }

    pub fn toggle_fullscreen(&self) -> Result<()> {
        self.command(Command::ToggleFullscreen)
    }

    pub fn toggle_pip(&self) -> Result<()> {
        self.command(Command::TogglePip)
    }

    /// Forwards an event from the media element.
    pub fn media_event(&self, event: MediaEvent) -> Result<()> {
        self.send(Input::Media(event))
    }

    /// Forwards a state change from a display capability.
    pub fn capability_event(&self, event: CapabilityEvent) -> Result<()> {
        self.send(Input::Capability(event))
    }

    /// Stops the runtime and waits for it to tear the core down.
    pub async fn shutdown(mut self) -> Result<()> {
        // Already stopped is fine.
        let _ = self.inputs.send(Input::Shutdown);
        if let Some(task) = self.task.take() {
            task.await.map_err(|_| Error::Shutdown)?;
        }
        Ok(())
    }

    fn command(&self, command: Command) -> Result<()> {
        self.send(Input::Command(command))
    }

    fn send(&self, input: Input) -> Result<()> {
        self.inputs.send(input).map_err(|_| Error::Shutdown)
    }
}

impl Drop for PlayerHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            let _ = self.inputs.send(Input::Shutdown);
        }
    }
}
