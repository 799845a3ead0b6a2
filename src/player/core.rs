// SPDX-License-Identifier: MPL-2.0
//! Player core: the single owner of playback state.
//!
//! [`PlayerCore::dispatch`] processes one [`Input`] at a time. Sub-components
//! (lifecycle, gate, seek coordinator, buffering timer, controller
//! visibility) only mutate their own state; the core is the only place that
//! talks to the media element, the preference store and the display
//! capabilities.

use super::events::{CapabilityEvent, Command, Input, MediaEvent, Notification, TimerKind};
use super::gate::{GateOutcome, PlayGate, PlayOrigin, RequestId};
use super::lifecycle::{Lifecycle, PauseOutcome};
use super::seek::SeekCoordinator;
use super::snapshot::PresentationSnapshot;
use super::timer::DebouncedTimer;
use super::visibility::ControllerVisibility;
use crate::application::port::{
    DisplayCapability, MediaElement, PermissionProvider, PreferenceStore, Unsupported,
};
use crate::config::PlayerConfig;
use crate::domain::video::{ActionSource, PlaybackState, Volume};
use tokio::sync::{broadcast, mpsc};

/// External collaborators injected into the core.
pub struct Collaborators {
    pub media: Box<dyn MediaElement>,
    pub permission: Box<dyn PermissionProvider>,
    pub store: Box<dyn PreferenceStore>,
    pub fullscreen: Box<dyn DisplayCapability>,
    pub pip: Box<dyn DisplayCapability>,
}

impl Collaborators {
    /// Collaborators without fullscreen or picture-in-picture support.
    pub fn new(
        media: impl MediaElement + 'static,
        permission: impl PermissionProvider + 'static,
        store: impl PreferenceStore + 'static,
    ) -> Self {
        Self {
            media: Box::new(media),
            permission: Box::new(permission),
            store: Box::new(store),
            fullscreen: Box::new(Unsupported),
            pip: Box::new(Unsupported),
        }
    }

    #[must_use]
    pub fn with_fullscreen(mut self, fullscreen: impl DisplayCapability + 'static) -> Self {
        self.fullscreen = Box::new(fullscreen);
        self
    }

    #[must_use]
    pub fn with_pip(mut self, pip: impl DisplayCapability + 'static) -> Self {
        self.pip = Box::new(pip);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("fullscreen_supported", &self.fullscreen.is_supported())
            .field("pip_supported", &self.pip.is_supported())
            .finish_non_exhaustive()
    }
}

pub struct PlayerCore {
    config: PlayerConfig,
    lifecycle: Lifecycle,
    gate: PlayGate,
    seek: SeekCoordinator,
    buffering: DebouncedTimer,
    visibility: ControllerVisibility,
    media: Box<dyn MediaElement>,
    store: Box<dyn PreferenceStore>,
    fullscreen: Box<dyn DisplayCapability>,
    pip: Box<dyn DisplayCapability>,
    notifications: broadcast::Sender<Notification>,
}

impl PlayerCore {
    /// Builds the core and runs initialization. Must run inside a tokio
    /// runtime: timers and permission requests spawn tasks that post back
    /// to `inputs`.
    pub fn new(
        config: PlayerConfig,
        collaborators: Collaborators,
        inputs: mpsc::UnboundedSender<Input>,
        notifications: broadcast::Sender<Notification>,
    ) -> Self {
        let Collaborators {
            media,
            permission,
            store,
            fullscreen,
            pip,
        } = collaborators;

        let mut core = Self {
            lifecycle: Lifecycle::new(),
            gate: PlayGate::new(permission, inputs.clone()),
            seek: SeekCoordinator::new(),
            buffering: DebouncedTimer::new(
                TimerKind::Buffering,
                config.buffering_debounce(),
                inputs.clone(),
            ),
            visibility: ControllerVisibility::new(config.controller_hide_delay(), inputs),
            media,
            store,
            fullscreen,
            pip,
            notifications,
            config,
        };
        core.initialize();
        core
    }

    fn initialize(&mut self) {
        let key = &self.config.volume_storage_key;
        let stored = match self.store.get(key) {
            Some(raw) => {
                let parsed = Volume::parse(&raw);
                if parsed.is_none() {
                    tracing::warn!(key = %key, value = %raw, "Ignoring unparseable stored volume");
                }
                parsed
            }
            None => None,
        };
        let volume = if self.config.muted {
            Volume::new(0.0)
        } else {
            stored.unwrap_or_default()
        };
        self.lifecycle.set_volume(volume);
        self.media.set_volume(volume.value());

        self.lifecycle.mirror_fullscreen(self.fullscreen.is_active());
        self.lifecycle.mirror_pip(self.pip.is_active());

        if self.config.autoplay {
            self.request_play(ActionSource::Video);
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn playback(&self) -> &PlaybackState {
        self.lifecycle.state()
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot::new(
            self.lifecycle.state(),
            self.visibility.state(),
            self.seek.is_active(),
        )
    }

    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::Command(command) => self.handle_command(command),
            Input::Media(event) => self.handle_media(event),
            Input::Capability(event) => self.handle_capability(event),
            Input::TimerFired { timer, generation } => self.handle_timer(timer, generation),
            Input::PermissionResolved { request, outcome } => {
                self.handle_permission(request, outcome)
            }
            Input::Shutdown => self.shutdown(),
        }
    }

    /// Cancels every timer and outstanding permission request.
    pub fn shutdown(&mut self) {
        self.buffering.cancel();
        self.visibility.cancel_timer();
        self.gate.cancel_all();
        self.seek.reset();
        tracing::debug!("Player core shut down");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::RequestPlay(source) => self.request_play(source),
            Command::RequestPause(source) => self.request_pause(source),
            Command::SystemPause {
                dont_apply_on_fullscreen,
            } => self.system_pause(dont_apply_on_fullscreen),
            Command::Toggle => {
                if self.lifecycle.state().playing {
                    self.request_pause(ActionSource::Video);
                } else {
                    self.request_play(ActionSource::Video);
                }
            }
            Command::Seek(target) => self.seek(target),
            Command::SetVolume(volume) => self.set_volume(volume),
            Command::Pointer(activity) => self.visibility.pointer(activity),
            Command::ControlsHovered(hovered) => self.visibility.controls_hovered(hovered),
            Command::BeginScrubberDrag => self.visibility.begin_scrubber_drag(),
            Command::EndScrubberDrag => self.visibility.end_scrubber_drag(),
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::TogglePip => self.toggle_pip(),
        }
    }

    fn request_play(&mut self, source: ActionSource) {
        self.issue_play(source, PlayOrigin::Explicit);
    }

    fn issue_play(&mut self, source: ActionSource, origin: PlayOrigin) {
        self.emit(Notification::RequestPlay);
        let request = self.gate.request(source, origin);
        tracing::debug!(?request, ?source, ?origin, "Play requested");
    }

    fn request_pause(&mut self, source: ActionSource) {
        self.emit(Notification::RequestPause);
        self.gate.supersede();
        self.pause(source);
    }

    fn system_pause(&mut self, dont_apply_on_fullscreen: bool) {
        if dont_apply_on_fullscreen && self.lifecycle.state().fullscreen {
            tracing::debug!("System pause ignored in fullscreen");
            return;
        }
        self.gate.supersede();
        if !self.lifecycle.state().playing {
            return;
        }
        self.emit(Notification::RequestPause);
        self.pause(ActionSource::Button);
    }

    fn pause(&mut self, source: ActionSource) {
        match self.lifecycle.apply_pause(source) {
            PauseOutcome::Applied => {
                self.media.pause();
                tracing::info!(?source, "Playback paused");
            }
            PauseOutcome::NotPlaying => tracing::debug!("Pause ignored: not playing"),
            PauseOutcome::Loading => tracing::debug!("Pause ignored while loading"),
        }
    }

    fn handle_permission(&mut self, request: RequestId, outcome: GateOutcome) {
        let Some(resolved) = self.gate.resolve(request) else {
            tracing::debug!(?request, "Dropping resolution for unknown request");
            return;
        };
        match outcome {
            GateOutcome::Rejected(denied) => {
                tracing::info!(?request, %denied, "Play rejected");
                self.emit(Notification::PlayRejected);
            }
            GateOutcome::Granted if resolved.stale => {
                tracing::debug!(?request, "Dropping stale play grant");
            }
            GateOutcome::Granted => {
                let commit = self.lifecycle.commit_play(resolved.source, resolved.origin);
                if commit.first_start {
                    self.emit(Notification::PlayCount);
                    tracing::info!(source = ?resolved.source, "Playback started");
                }
                if commit.rewind {
                    self.dispatch_seek(0.0);
                }
                if !commit.was_playing {
                    self.media.play();
                }
            }
        }
    }

    fn seek(&mut self, target: f64) {
        if self.dispatch_seek(target) {
            self.issue_play(ActionSource::None, PlayOrigin::ReplayOnSeek);
        }
    }

    /// Moves the playhead and tells the media element to seek. Returns true
    /// when the seek left the ended state and playback must restart.
    fn dispatch_seek(&mut self, target: f64) -> bool {
        let plan = self.seek.begin(target, self.lifecycle.state());
        self.lifecycle.move_playhead(plan.target);
        self.media.seek_to(plan.target);
        tracing::debug!(target = plan.target, replay = plan.replay, "Seek dispatched");
        plan.replay
    }

    fn set_volume(&mut self, volume: f32) {
        let volume = Volume::new(volume);
        self.lifecycle.set_volume(volume);
        self.media.set_volume(volume.value());
        let key = &self.config.volume_storage_key;
        if let Err(err) = self.store.set(key, &volume.value().to_string()) {
            tracing::warn!(key = %key, error = %err, "Failed to persist volume");
        }
    }

    fn toggle_fullscreen(&mut self) {
        if !self.fullscreen.is_supported() {
            tracing::debug!("Fullscreen unsupported");
            return;
        }
        self.fullscreen.toggle();
    }

    fn toggle_pip(&mut self) {
        if self.config.disable_picture_in_picture || !self.pip.is_supported() {
            tracing::debug!("Picture-in-picture unavailable");
            return;
        }
        self.pip.toggle();
    }

    fn handle_media(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => {
                self.lifecycle.media_play();
            }
            MediaEvent::Pause => {
                self.lifecycle.media_pause();
            }
            MediaEvent::Ended => {
                self.buffering.cancel();
                self.lifecycle.media_ended();
                tracing::info!(at = self.lifecycle.state().current_time, "Playback ended");
            }
            MediaEvent::LoadedData => self.lifecycle.media_loaded_data(),
            MediaEvent::Error(error) => {
                self.buffering.cancel();
                tracing::warn!(%error, "Media element reported an error");
                self.lifecycle.media_error(error);
            }
            MediaEvent::DurationChange(duration) => {
                if !self.lifecycle.set_duration(duration) {
                    tracing::debug!(duration, "Ignoring invalid duration");
                }
            }
            MediaEvent::TimeUpdate(time) => {
                if !self.lifecycle.time_update(time, self.seek.is_active()) {
                    tracing::debug!(time, "Dropping time update");
                }
            }
            MediaEvent::Waiting => {
                self.buffering.arm();
            }
            MediaEvent::Playing => {
                self.buffering.cancel();
                self.lifecycle.set_loading(false);
            }
            MediaEvent::Seeking => self.seek.on_seeking(self.lifecycle.state().current_time),
            MediaEvent::Seeked => self.seek.on_seeked(),
            MediaEvent::Progress(ranges) => self.lifecycle.set_buffered(ranges),
        }
    }

    fn handle_capability(&mut self, event: CapabilityEvent) {
        match event {
            CapabilityEvent::FullscreenChanged(active) => {
                if self.lifecycle.mirror_fullscreen(active) {
                    self.emit(if active {
                        Notification::EnterFullscreen
                    } else {
                        Notification::ExitFullscreen
                    });
                }
            }
            CapabilityEvent::PipChanged(active) => {
                if self.lifecycle.mirror_pip(active) {
                    self.emit(if active {
                        Notification::EnterPip
                    } else {
                        Notification::ExitPip
                    });
                }
            }
        }
    }

    fn handle_timer(&mut self, timer: TimerKind, generation: u64) {
        let accepted = match timer {
            TimerKind::Buffering => {
                let fired = self.buffering.accept_fire(generation);
                if fired {
                    self.lifecycle.set_loading(true);
                }
                fired
            }
            TimerKind::ControllerHide => self.visibility.on_hide_timer(generation),
        };
        if !accepted {
            tracing::debug!(?timer, generation, "Dropping stale timer fire");
        }
    }

    fn emit(&self, notification: Notification) {
        // No subscribers is fine.
        let _ = self.notifications.send(notification);
    }
}

impl std::fmt::Debug for PlayerCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerCore")
            .field("playback", self.lifecycle.state())
            .field("gate", &self.gate)
            .field("seek", &self.seek)
            .field("buffering", &self.buffering)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}
