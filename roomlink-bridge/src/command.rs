/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! The closed command table.
//!
//! Every operation the facade issues maps to one [`Command`].  A command
//! knows both of its wire forms: the numeric view-command code with its
//! positional argument list, and the module method name with its own
//! argument list.  The two argument orders differ for `connect` and that is
//! deliberate; each matches what its native surface expects.

use roomlink_types::{CameraSource, ConnectOptions};
use serde_json::{json, Value};

/// A typed command addressed to the native room runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Connect(ConnectOptions),
    Disconnect,
    SwitchCamera,
    ToggleVideo {
        enabled: bool,
        camera_source: Option<CameraSource>,
    },
    ToggleAudio(bool),
    ToggleRemoteAudio(bool),
    GetStats,
    /// Disables the runtime's low-level audio effects path (view platform
    /// only; "disableOpenSLES" on the wire).
    DisableAudioEffects,
    /// `true` routes sound to the speaker, `false` to the headset.
    ToggleSoundRouting(bool),
    /// Releases the native view's resources at teardown (view platform only).
    Release,
    ToggleBluetoothHeadset(bool),
    SendData(String),
    /// `true` publishes the local video track, `false` unpublishes it.
    PublishVideo(bool),
    /// `true` publishes the local audio track, `false` unpublishes it.
    PublishAudio(bool),
    PrepareToRebuildLocalVideoTrack(String),
    CaptureFrame(String),
    SetFlashlight(bool),
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Connect(_) => "connect",
            Command::Disconnect => "disconnect",
            Command::SwitchCamera => "switchCamera",
            Command::ToggleVideo { .. } => "toggleVideo",
            Command::ToggleAudio(_) => "toggleAudio",
            Command::ToggleRemoteAudio(_) => "toggleRemoteAudio",
            Command::GetStats => "getStats",
            Command::DisableAudioEffects => "disableAudioEffects",
            Command::ToggleSoundRouting(_) => "toggleSoundRouting",
            Command::Release => "release",
            Command::ToggleBluetoothHeadset(_) => "toggleBluetoothHeadset",
            Command::SendData(_) => "sendData",
            Command::PublishVideo(_) => "publishVideo",
            Command::PublishAudio(_) => "publishAudio",
            Command::PrepareToRebuildLocalVideoTrack(_) => "prepareToRebuildLocalVideoTrack",
            Command::CaptureFrame(_) => "captureFrame",
            Command::SetFlashlight(_) => "setFlashlight",
        }
    }

    /// The numeric code of the view-command address space.
    pub fn view_code(&self) -> u8 {
        match self {
            Command::Connect(_) => 1,
            Command::Disconnect => 2,
            Command::SwitchCamera => 3,
            Command::ToggleVideo { .. } => 4,
            Command::ToggleAudio(_) => 5,
            Command::GetStats => 6,
            Command::DisableAudioEffects => 7,
            Command::ToggleSoundRouting(_) => 8,
            Command::ToggleRemoteAudio(_) => 9,
            Command::Release => 10,
            Command::ToggleBluetoothHeadset(_) => 11,
            Command::SendData(_) => 12,
            Command::PublishVideo(_) => 13,
            Command::PublishAudio(_) => 14,
            Command::PrepareToRebuildLocalVideoTrack(_) => 15,
            Command::CaptureFrame(_) => 16,
            Command::SetFlashlight(_) => 17,
        }
    }

    /// Positional arguments for the view-command address space.
    pub fn view_args(&self) -> Vec<Value> {
        match self {
            Command::Connect(options) => vec![
                json!(options.room_name),
                json!(options.access_token),
                json!(options.enable_audio),
                json!(options.enable_video),
                json!(options.enable_remote_audio),
                json!(options.enable_network_quality_reporting),
                json!(options.dominant_speaker_enabled),
                json!(options.maintain_video_track_in_background),
                json!(options.camera_source.as_str()),
                serde_json::to_value(&options.encoding_parameters).unwrap_or_default(),
            ],
            Command::Disconnect
            | Command::SwitchCamera
            | Command::GetStats
            | Command::DisableAudioEffects
            | Command::Release => Vec::new(),
            Command::ToggleVideo {
                enabled,
                camera_source,
            } => vec![
                json!(enabled),
                camera_source
                    .map(|source| json!(source.as_str()))
                    .unwrap_or(Value::Null),
            ],
            Command::ToggleAudio(enabled)
            | Command::ToggleRemoteAudio(enabled)
            | Command::ToggleSoundRouting(enabled)
            | Command::ToggleBluetoothHeadset(enabled)
            | Command::PublishVideo(enabled)
            | Command::PublishAudio(enabled)
            | Command::SetFlashlight(enabled) => vec![json!(enabled)],
            Command::SendData(message) => vec![json!(message)],
            Command::PrepareToRebuildLocalVideoTrack(track_name) => vec![json!(track_name)],
            Command::CaptureFrame(filename) => vec![json!(filename)],
        }
    }

    /// Method name and arguments for the module-call address space, or
    /// `None` for commands that surface has no counterpart for.
    ///
    /// Commands without a counterpart are either view-platform plumbing
    /// (`release`, `disableAudioEffects`) or operations the module platform
    /// answers with an optimistic echo alone (`toggleRemoteAudio`,
    /// `toggleBluetoothHeadset`).
    pub fn module_call(&self) -> Option<(&'static str, Vec<Value>)> {
        match self {
            Command::Connect(options) => Some((
                "connect",
                vec![
                    json!(options.access_token),
                    json!(options.room_name),
                    json!(options.enable_audio),
                    json!(options.enable_video),
                    serde_json::to_value(&options.encoding_parameters).unwrap_or_default(),
                    json!(options.enable_network_quality_reporting),
                    json!(options.dominant_speaker_enabled),
                    json!(options.camera_source.as_str()),
                ],
            )),
            Command::Disconnect => Some(("disconnect", Vec::new())),
            Command::SwitchCamera => Some(("flipCamera", Vec::new())),
            Command::ToggleVideo {
                enabled,
                camera_source,
            } => Some((
                "setLocalVideoEnabled",
                vec![
                    json!(enabled),
                    camera_source
                        .map(|source| json!(source.as_str()))
                        .unwrap_or(Value::Null),
                ],
            )),
            Command::ToggleAudio(enabled) => Some(("setLocalAudioEnabled", vec![json!(enabled)])),
            Command::GetStats => Some(("getStats", Vec::new())),
            Command::ToggleSoundRouting(speaker) => {
                Some(("toggleSoundSetup", vec![json!(speaker)]))
            }
            Command::SendData(message) => Some(("sendString", vec![json!(message)])),
            Command::PublishVideo(true) => Some(("publishLocalVideo", Vec::new())),
            Command::PublishVideo(false) => Some(("unpublishLocalVideo", Vec::new())),
            Command::PublishAudio(true) => Some(("publishLocalAudio", Vec::new())),
            Command::PublishAudio(false) => Some(("unpublishLocalAudio", Vec::new())),
            // The module refreshes the track name through a separate
            // setLocalVideoTrackName call issued by the facade.
            Command::PrepareToRebuildLocalVideoTrack(_) => {
                Some(("prepareToRebuildLocalVideoTrack", Vec::new()))
            }
            Command::CaptureFrame(filename) => Some(("captureFrame", vec![json!(filename)])),
            Command::SetFlashlight(enabled) => {
                Some(("setFlashlightStatus", vec![json!(enabled)]))
            }
            Command::ToggleRemoteAudio(_)
            | Command::ToggleBluetoothHeadset(_)
            | Command::DisableAudioEffects
            | Command::Release => None,
        }
    }
}
