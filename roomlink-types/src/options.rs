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

//! Connection configuration.
//!
//! [`ConnectOptions`] is built by the caller immediately before
//! `RoomBridge::connect` and is immutable for the duration of one connection
//! attempt.  Nothing in it is persisted by the bridge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which device camera feeds the local video track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraSource {
    #[default]
    Front,
    Back,
}

impl CameraSource {
    /// Wire form understood by the native runtime.
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraSource::Front => "front",
            CameraSource::Back => "back",
        }
    }
}

impl fmt::Display for CameraSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized camera source {0:?} (expected \"front\" or \"back\")")]
pub struct ParseCameraSourceError(String);

impl FromStr for CameraSource {
    type Err = ParseCameraSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(CameraSource::Front),
            "back" => Ok(CameraSource::Back),
            other => Err(ParseCameraSourceError(other.to_string())),
        }
    }
}

/// Codec preference and target bitrates forwarded verbatim to the native
/// runtime.  If `audio_bitrate` or `video_bitrate` is set, set both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_h264_codec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_bitrate: Option<u32>,
}

/// Options struct for joining a room via `RoomBridge::connect`.
///
/// The `enable_remote_audio` and `maintain_video_track_in_background` fields
/// only have an effect on the view-command platform; the module platform does
/// not accept them and they are not forwarded there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    /// The room to join.
    pub room_name: String,

    /// Access credential (JWT) minted by the application backend.
    pub access_token: String,

    /// Camera used for the local video track.
    pub camera_source: CameraSource,

    /// Whether the local audio track starts enabled.
    pub enable_audio: bool,

    /// Whether the local video track starts enabled.
    pub enable_video: bool,

    /// Whether remote audio tracks start enabled (view-command platform only).
    pub enable_remote_audio: bool,

    /// Ask the runtime to report per-participant network quality levels.
    pub enable_network_quality_reporting: bool,

    /// Ask the runtime to emit dominant speaker changes.
    pub dominant_speaker_enabled: bool,

    /// Keep capturing video while backgrounded (view-command platform only).
    pub maintain_video_track_in_background: bool,

    /// Codec preference and target bitrates.
    pub encoding_parameters: EncodingParameters,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            room_name: String::new(),
            access_token: String::new(),
            camera_source: CameraSource::Front,
            enable_audio: true,
            enable_video: true,
            enable_remote_audio: true,
            enable_network_quality_reporting: false,
            dominant_speaker_enabled: false,
            maintain_video_track_in_background: false,
            encoding_parameters: EncodingParameters::default(),
        }
    }
}
