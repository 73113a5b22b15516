//! The public facade composing the dispatcher, normalizer, and subscription
//! lifecycle.
//!
//! To use it, construct the struct with [`RoomBridge::new`], call
//! [`activate()`][RoomBridge::activate] when the owning UI element mounts and
//! [`deactivate()`][RoomBridge::deactivate] when it unmounts, and issue room
//! operations in between.  The bridge holds no native-facing state beyond the
//! forwarded configuration; all room, participant, and track state lives in
//! the native runtime and is observed through events.

use crate::command::Command;
use crate::dispatch::{value_as_bool, CommandDispatcher};
use crate::host::{HostBinding, NativeModule, ViewHandle};
use crate::normalizer::{EventNormalizer, RoomEventHandlers};
use crate::subscription::SubscriptionLifecycle;
use anyhow::Result;
use log::debug;
use roomlink_types::{Callback, CameraSource, ConnectOptions};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

const DEFAULT_LOCAL_VIDEO_TRACK_NAME: &str = "camera";

/// Options struct for constructing a bridge via [`RoomBridge::new`].
pub struct RoomBridgeOptions {
    /// The injected native surface for this platform.
    pub binding: HostBinding,

    /// Handlers for the events the caller cares about; all optional.
    pub handlers: RoomEventHandlers,

    /// Name given to the local video track.  Defaults to `"camera"`.
    pub local_video_track_name: String,

    /// Start the local camera automatically at activation (module platform).
    /// Defaults to `true`.
    pub auto_initialize_camera: bool,
}

impl RoomBridgeOptions {
    pub fn new(binding: HostBinding, handlers: RoomEventHandlers) -> Self {
        Self {
            binding,
            handlers,
            local_video_track_name: DEFAULT_LOCAL_VIDEO_TRACK_NAME.to_string(),
            auto_initialize_camera: true,
        }
    }
}

/// Platform-agnostic handle to the native room runtime.
pub struct RoomBridge {
    dispatcher: CommandDispatcher,
    normalizer: Rc<EventNormalizer>,
    lifecycle: RefCell<SubscriptionLifecycle>,
    // Present on the module platform only; used for the lifecycle calls that
    // are not part of the command table (start/stop of local capture).
    module: Option<Rc<dyn NativeModule>>,
    local_video_track_name: RefCell<String>,
    auto_initialize_camera: bool,
}

impl RoomBridge {
    /// Construct a bridge bound to one platform's native surface.
    ///
    /// The delivery strategy for commands and events is fixed here, once; no
    /// per-call platform branching happens afterwards.
    pub fn new(options: RoomBridgeOptions) -> Self {
        let (dispatcher, module, lifecycle) = match options.binding {
            HostBinding::View(channel) => (
                CommandDispatcher::view(channel),
                None,
                SubscriptionLifecycle::passive(),
            ),
            HostBinding::Module { module, events } => (
                CommandDispatcher::module(Rc::clone(&module)),
                Some(module),
                SubscriptionLifecycle::for_stream(events),
            ),
        };
        Self {
            dispatcher,
            normalizer: Rc::new(EventNormalizer::new(options.handlers)),
            lifecycle: RefCell::new(lifecycle),
            module,
            local_video_track_name: RefCell::new(options.local_video_track_name),
            auto_initialize_camera: options.auto_initialize_camera,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Activation entry point, invoked by the host lifecycle integration when
    /// the owning UI element mounts.  Idempotent.
    pub fn activate(&self) {
        let deliver = {
            let normalizer = Rc::clone(&self.normalizer);
            Callback::from(move |(native_name, payload): (&'static str, Value)| {
                normalizer.deliver(native_name, payload)
            })
        };
        if !self.lifecycle.borrow_mut().activate(deliver) {
            return;
        }
        if let Some(module) = &self.module {
            module.invoke(
                "setLocalVideoTrackName",
                vec![json!(*self.local_video_track_name.borrow())],
            );
            if self.auto_initialize_camera {
                module.invoke("startLocalVideo", Vec::new());
            }
            module.invoke("startLocalAudio", Vec::new());
        }
    }

    /// Deactivation entry point, invoked at unmount.  Stops further event
    /// delivery and releases native resources; in-flight commands are not
    /// cancelled and any still-pending result must be treated as stale by the
    /// caller.  Idempotent, and a no-op if never activated.
    pub fn deactivate(&self) {
        if !self.lifecycle.borrow_mut().deactivate() {
            return;
        }
        match &self.module {
            Some(module) => {
                module.invoke("stopLocalVideo", Vec::new());
                module.invoke("stopLocalAudio", Vec::new());
            }
            None => self.dispatcher.dispatch(Command::Release),
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.borrow().is_active()
    }

    /// Point the bridge at a freshly mounted native view (view platform).
    pub fn attach_view(&self, handle: ViewHandle) {
        self.dispatcher.attach_view(handle);
    }

    /// Forget the native view.  Subsequent commands no-op until re-attached.
    pub fn detach_view(&self) {
        self.dispatcher.detach_view();
    }

    /// Entry point for the view platform's host integration: feed one native
    /// event into the normalizer.  Also usable for injecting synthetic events
    /// in tests.
    pub fn deliver_native_event(&self, native_name: &str, payload: Value) {
        self.normalizer.deliver(native_name, payload);
    }

    // ── Room operations ──────────────────────────────────────────────────────

    /// Join a room.  Success or failure arrives later as `roomDidConnect` or
    /// `roomDidFailToConnect`; nothing is reported synchronously.
    pub fn connect(&self, options: ConnectOptions) {
        self.dispatcher.dispatch(Command::Connect(options));
    }

    /// Leave the current room.
    pub fn disconnect(&self) {
        self.dispatcher.dispatch(Command::Disconnect);
    }

    /// Flip between the front and back camera.
    pub fn flip_camera(&self) {
        self.dispatcher.dispatch(Command::SwitchCamera);
    }

    /// Enable or disable the local video track.
    ///
    /// Disabling is sequenced as stop-capture-then-notify: the capture device
    /// release is observably asynchronous on the module platform, so the stop
    /// request must complete before the disable notification is issued.
    /// Enabling has no such ordering requirement.
    ///
    /// The resolved boolean is an optimistic echo on the view platform.
    pub async fn set_local_video_enabled(
        &self,
        enabled: bool,
        camera_source: Option<CameraSource>,
    ) -> Result<bool> {
        if !enabled {
            if let Some(module) = &self.module {
                module.invoke_deferred("stopLocalVideo", Vec::new()).await?;
            }
        }
        let value = self
            .dispatcher
            .dispatch_deferred(
                Command::ToggleVideo {
                    enabled,
                    camera_source,
                },
                json!(enabled),
            )
            .await?;
        Ok(value_as_bool("setLocalVideoEnabled", value)?)
    }

    /// Enable or disable the local audio track.
    ///
    /// The resolved boolean is an optimistic echo on the view platform.
    pub async fn set_local_audio_enabled(&self, enabled: bool) -> Result<bool> {
        let value = self
            .dispatcher
            .dispatch_deferred(Command::ToggleAudio(enabled), json!(enabled))
            .await?;
        Ok(value_as_bool("setLocalAudioEnabled", value)?)
    }

    /// Enable or disable playback of all remote audio tracks.
    ///
    /// The resolved boolean is an optimistic echo on both platforms; the
    /// module platform additionally exposes per-participant control through
    /// [`set_remote_audio_playback`][Self::set_remote_audio_playback].
    pub async fn set_remote_audio_enabled(&self, enabled: bool) -> Result<bool> {
        let value = self
            .dispatcher
            .dispatch_deferred(Command::ToggleRemoteAudio(enabled), json!(enabled))
            .await?;
        Ok(value_as_bool("setRemoteAudioEnabled", value)?)
    }

    /// Locally mute or unmute all remote audio tracks from one participant
    /// (module platform only).
    pub fn set_remote_audio_playback(&self, participant_sid: &str, enabled: bool) {
        match &self.module {
            Some(module) => module.invoke(
                "setRemoteAudioPlayback",
                vec![json!(participant_sid), json!(enabled)],
            ),
            None => debug!("setRemoteAudioPlayback is not available on the view platform"),
        }
    }

    /// Route audio through a connected bluetooth headset.
    ///
    /// The resolved boolean is an optimistic echo on both platforms.
    pub async fn set_bluetooth_headset_connected(&self, enabled: bool) -> Result<bool> {
        let value = self
            .dispatcher
            .dispatch_deferred(Command::ToggleBluetoothHeadset(enabled), json!(enabled))
            .await?;
        Ok(value_as_bool("setBluetoothHeadsetConnected", value)?)
    }

    /// Publish the local audio track to the room.
    pub fn publish_local_audio(&self) {
        self.dispatcher.dispatch(Command::PublishAudio(true));
    }

    /// Unpublish the local audio track.
    pub fn unpublish_local_audio(&self) {
        self.dispatcher.dispatch(Command::PublishAudio(false));
    }

    /// Publish the local video track to the room.
    pub fn publish_local_video(&self) {
        self.dispatcher.dispatch(Command::PublishVideo(true));
    }

    /// Unpublish the local video track.
    pub fn unpublish_local_video(&self) {
        self.dispatcher.dispatch(Command::PublishVideo(false));
    }

    /// Send a string over the local data track.  No event is synthesized
    /// locally; remote delivery surfaces as `dataTrackMessageReceived` on the
    /// other side.
    pub fn send_data(&self, message: &str) {
        self.dispatcher.dispatch(Command::SendData(message.to_string()));
    }

    /// Request connection stats; results arrive as a `statsReceived` event.
    pub fn get_stats(&self) {
        self.dispatcher.dispatch(Command::GetStats);
    }

    /// Toggle the camera torch; the outcome arrives as
    /// `onFlashlightStatusChanged`.
    pub fn set_flashlight(&self, enabled: bool) {
        self.dispatcher.dispatch(Command::SetFlashlight(enabled));
    }

    /// Capture one local video frame to `filename`.
    pub fn capture_frame(&self, filename: &str) {
        self.dispatcher
            .dispatch(Command::CaptureFrame(filename.to_string()));
    }

    /// Route sound to the speaker (`true`) or the headset (`false`).
    pub fn toggle_sound_routing(&self, speaker: bool) {
        self.dispatcher
            .dispatch(Command::ToggleSoundRouting(speaker));
    }

    /// Disable the runtime's low-level audio effects path (view platform).
    pub fn disable_audio_effects(&self) {
        self.dispatcher.dispatch(Command::DisableAudioEffects);
    }

    /// Rename the local video track without rebuilding it.  The new name is
    /// remembered and reused by later activations and rebuilds.
    pub fn set_local_video_track_name(&self, track_name: &str) {
        *self.local_video_track_name.borrow_mut() = track_name.to_string();
        if let Some(module) = &self.module {
            module.invoke("setLocalVideoTrackName", vec![json!(track_name)]);
        }
    }

    /// Prepare the local video track to be rebuilt under a new name.  The
    /// track should be unpublished and disabled first; enable and publish it
    /// again afterwards for the rename to take effect.
    pub fn prepare_to_rebuild_local_video_track(&self, track_name: &str) {
        *self.local_video_track_name.borrow_mut() = track_name.to_string();
        if let Some(module) = &self.module {
            module.invoke("setLocalVideoTrackName", vec![json!(track_name)]);
        }
        self.dispatcher
            .dispatch(Command::PrepareToRebuildLocalVideoTrack(
                track_name.to_string(),
            ));
    }
}
