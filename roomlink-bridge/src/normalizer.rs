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

//! Event normalization.
//!
//! Maps raw native event names onto the [`RoomEvent`] taxonomy and forwards
//! each payload to the handler the caller registered for it, if any.  The
//! transform is identity for every event except the binary data-track
//! message, whose base64 `message` field is decoded to raw bytes.
//!
//! Delivery is a direct synchronous call-through: native emission order is
//! preserved, each occurrence is delivered at most once, and a panicking
//! handler propagates to the host's default error path.

use crate::codec;
use crate::event::RoomEvent;
use anyhow::{bail, Context, Result};
use log::{debug, warn};
use roomlink_types::{BinaryMessage, Callback};
use serde_json::Value;

/// Declarative handler configuration.
///
/// Every field is optional; an absent handler means the corresponding event
/// is simply never delivered upward, which is not an error.  Payloads are the
/// native JSON values, untouched, except
/// [`on_data_track_binary_message_received`](Self::on_data_track_binary_message_received)
/// which receives the decoded [`BinaryMessage`].
#[derive(Clone, Debug, Default)]
pub struct RoomEventHandlers {
    pub on_room_did_connect: Option<Callback<Value>>,
    pub on_room_did_disconnect: Option<Callback<Value>>,
    pub on_room_did_fail_to_connect: Option<Callback<Value>>,
    pub on_room_participant_did_connect: Option<Callback<Value>>,
    pub on_room_participant_did_disconnect: Option<Callback<Value>>,
    pub on_participant_added_video_track: Option<Callback<Value>>,
    pub on_participant_removed_video_track: Option<Callback<Value>>,
    pub on_participant_added_audio_track: Option<Callback<Value>>,
    pub on_participant_removed_audio_track: Option<Callback<Value>>,
    pub on_participant_added_data_track: Option<Callback<Value>>,
    pub on_participant_removed_data_track: Option<Callback<Value>>,
    pub on_participant_enabled_video_track: Option<Callback<Value>>,
    pub on_participant_disabled_video_track: Option<Callback<Value>>,
    pub on_participant_enabled_audio_track: Option<Callback<Value>>,
    pub on_participant_disabled_audio_track: Option<Callback<Value>>,
    pub on_data_track_message_received: Option<Callback<Value>>,
    pub on_data_track_binary_message_received: Option<Callback<BinaryMessage>>,
    pub on_camera_did_start: Option<Callback<Value>>,
    pub on_camera_was_interrupted: Option<Callback<Value>>,
    pub on_camera_interruption_ended: Option<Callback<Value>>,
    pub on_camera_did_stop_running: Option<Callback<Value>>,
    pub on_camera_switched: Option<Callback<Value>>,
    pub on_video_changed: Option<Callback<Value>>,
    pub on_audio_changed: Option<Callback<Value>>,
    pub on_stats_received: Option<Callback<Value>>,
    pub on_network_quality_levels_changed: Option<Callback<Value>>,
    pub on_dominant_speaker_did_change: Option<Callback<Value>>,
    pub on_flashlight_status_changed: Option<Callback<Value>>,
    pub on_local_participant_supported_codecs: Option<Callback<Value>>,
}

impl RoomEventHandlers {
    /// The registered pass-through handler for `event`, if any.
    ///
    /// The binary data-track message is not reachable here; it has its own
    /// typed handler and is special-cased in [`EventNormalizer::deliver`].
    fn handler_for(&self, event: RoomEvent) -> Option<&Callback<Value>> {
        match event {
            RoomEvent::RoomDidConnect => self.on_room_did_connect.as_ref(),
            RoomEvent::RoomDidDisconnect => self.on_room_did_disconnect.as_ref(),
            RoomEvent::RoomDidFailToConnect => self.on_room_did_fail_to_connect.as_ref(),
            RoomEvent::RoomParticipantDidConnect => self.on_room_participant_did_connect.as_ref(),
            RoomEvent::RoomParticipantDidDisconnect => {
                self.on_room_participant_did_disconnect.as_ref()
            }
            RoomEvent::ParticipantAddedVideoTrack => {
                self.on_participant_added_video_track.as_ref()
            }
            RoomEvent::ParticipantRemovedVideoTrack => {
                self.on_participant_removed_video_track.as_ref()
            }
            RoomEvent::ParticipantAddedAudioTrack => {
                self.on_participant_added_audio_track.as_ref()
            }
            RoomEvent::ParticipantRemovedAudioTrack => {
                self.on_participant_removed_audio_track.as_ref()
            }
            RoomEvent::ParticipantAddedDataTrack => self.on_participant_added_data_track.as_ref(),
            RoomEvent::ParticipantRemovedDataTrack => {
                self.on_participant_removed_data_track.as_ref()
            }
            RoomEvent::ParticipantEnabledVideoTrack => {
                self.on_participant_enabled_video_track.as_ref()
            }
            RoomEvent::ParticipantDisabledVideoTrack => {
                self.on_participant_disabled_video_track.as_ref()
            }
            RoomEvent::ParticipantEnabledAudioTrack => {
                self.on_participant_enabled_audio_track.as_ref()
            }
            RoomEvent::ParticipantDisabledAudioTrack => {
                self.on_participant_disabled_audio_track.as_ref()
            }
            RoomEvent::DataTrackMessageReceived => self.on_data_track_message_received.as_ref(),
            RoomEvent::DataTrackBinaryMessageReceived => None,
            RoomEvent::CameraDidStart => self.on_camera_did_start.as_ref(),
            RoomEvent::CameraWasInterrupted => self.on_camera_was_interrupted.as_ref(),
            RoomEvent::CameraInterruptionEnded => self.on_camera_interruption_ended.as_ref(),
            RoomEvent::CameraDidStopRunning => self.on_camera_did_stop_running.as_ref(),
            RoomEvent::CameraSwitched => self.on_camera_switched.as_ref(),
            RoomEvent::VideoChanged => self.on_video_changed.as_ref(),
            RoomEvent::AudioChanged => self.on_audio_changed.as_ref(),
            RoomEvent::StatsReceived => self.on_stats_received.as_ref(),
            RoomEvent::NetworkQualityLevelsChanged => {
                self.on_network_quality_levels_changed.as_ref()
            }
            RoomEvent::DominantSpeakerDidChange => self.on_dominant_speaker_did_change.as_ref(),
            RoomEvent::FlashlightStatusChanged => self.on_flashlight_status_changed.as_ref(),
            RoomEvent::LocalParticipantSupportedCodecs => {
                self.on_local_participant_supported_codecs.as_ref()
            }
        }
    }
}

/// Routes native events to the caller's registered handlers.
#[derive(Debug)]
pub struct EventNormalizer {
    handlers: RoomEventHandlers,
}

impl EventNormalizer {
    pub fn new(handlers: RoomEventHandlers) -> Self {
        Self { handlers }
    }

    /// Deliver one native event occurrence.
    ///
    /// Unrecognized names and unregistered events are dropped silently; a
    /// malformed binary payload drops that one delivery with a warning and
    /// does not affect later ones.
    pub fn deliver(&self, native_name: &str, payload: Value) {
        let Some(event) = RoomEvent::from_native_name(native_name) else {
            debug!("ignoring unrecognized native event {native_name:?}");
            return;
        };

        if event == RoomEvent::DataTrackBinaryMessageReceived {
            if let Some(handler) = &self.handlers.on_data_track_binary_message_received {
                match decode_binary_payload(payload) {
                    Ok(message) => handler.emit(message),
                    Err(e) => warn!("dropping binary data-track message: {e:#}"),
                }
            }
            return;
        }

        if let Some(handler) = self.handlers.handler_for(event) {
            handler.emit(payload);
        }
    }
}

/// Replace the base64 `message` field with the decoded byte sequence, keeping
/// every other field as-is.
fn decode_binary_payload(payload: Value) -> Result<BinaryMessage> {
    let Value::Object(mut fields) = payload else {
        bail!("payload is not an object");
    };
    let encoded = match fields.remove("message") {
        Some(Value::String(encoded)) => encoded,
        _ => bail!("payload has no string `message` field"),
    };
    let message = codec::decode_binary_message(&encoded).context("decoding `message` field")?;
    Ok(BinaryMessage {
        message,
        extra: fields,
    })
}
