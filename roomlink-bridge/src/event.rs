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

//! The fixed event taxonomy the bridge relays from the native room runtime.
//!
//! Each variant corresponds to exactly one native event name.  The two
//! `on`-prefixed native names are historical oddities of the runtime's wire
//! protocol and are preserved as-is.

/// Events emitted by the native room runtime that UI integrations can
/// subscribe to through `RoomEventHandlers`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomEvent {
    // === Room events ===
    RoomDidConnect,
    RoomDidDisconnect,
    RoomDidFailToConnect,
    RoomParticipantDidConnect,
    RoomParticipantDidDisconnect,

    // === Track lifecycle events ===
    ParticipantAddedVideoTrack,
    ParticipantRemovedVideoTrack,
    ParticipantAddedAudioTrack,
    ParticipantRemovedAudioTrack,
    ParticipantAddedDataTrack,
    ParticipantRemovedDataTrack,
    ParticipantEnabledVideoTrack,
    ParticipantDisabledVideoTrack,
    ParticipantEnabledAudioTrack,
    ParticipantDisabledAudioTrack,

    // === Data-track messages ===
    DataTrackMessageReceived,
    /// Payload's `message` field is base64 on the wire; the normalizer
    /// decodes it to raw bytes before delivery.
    DataTrackBinaryMessageReceived,

    // === Camera events ===
    CameraDidStart,
    CameraWasInterrupted,
    CameraInterruptionEnded,
    CameraDidStopRunning,
    CameraSwitched,

    // === Local track toggles ===
    VideoChanged,
    AudioChanged,

    // === Telemetry ===
    StatsReceived,
    NetworkQualityLevelsChanged,
    DominantSpeakerDidChange,
    FlashlightStatusChanged,
    LocalParticipantSupportedCodecs,
}

impl RoomEvent {
    /// Every recognized event, in a fixed order.  The subscription lifecycle
    /// manager registers one native listener per entry.
    pub const ALL: [RoomEvent; 29] = [
        RoomEvent::RoomDidConnect,
        RoomEvent::RoomDidDisconnect,
        RoomEvent::RoomDidFailToConnect,
        RoomEvent::RoomParticipantDidConnect,
        RoomEvent::RoomParticipantDidDisconnect,
        RoomEvent::ParticipantAddedVideoTrack,
        RoomEvent::ParticipantRemovedVideoTrack,
        RoomEvent::ParticipantAddedAudioTrack,
        RoomEvent::ParticipantRemovedAudioTrack,
        RoomEvent::ParticipantAddedDataTrack,
        RoomEvent::ParticipantRemovedDataTrack,
        RoomEvent::ParticipantEnabledVideoTrack,
        RoomEvent::ParticipantDisabledVideoTrack,
        RoomEvent::ParticipantEnabledAudioTrack,
        RoomEvent::ParticipantDisabledAudioTrack,
        RoomEvent::DataTrackMessageReceived,
        RoomEvent::DataTrackBinaryMessageReceived,
        RoomEvent::CameraDidStart,
        RoomEvent::CameraWasInterrupted,
        RoomEvent::CameraInterruptionEnded,
        RoomEvent::CameraDidStopRunning,
        RoomEvent::CameraSwitched,
        RoomEvent::VideoChanged,
        RoomEvent::AudioChanged,
        RoomEvent::StatsReceived,
        RoomEvent::NetworkQualityLevelsChanged,
        RoomEvent::DominantSpeakerDidChange,
        RoomEvent::FlashlightStatusChanged,
        RoomEvent::LocalParticipantSupportedCodecs,
    ];

    /// The event name the native runtime emits on its wire.
    pub fn native_name(&self) -> &'static str {
        match self {
            RoomEvent::RoomDidConnect => "roomDidConnect",
            RoomEvent::RoomDidDisconnect => "roomDidDisconnect",
            RoomEvent::RoomDidFailToConnect => "roomDidFailToConnect",
            RoomEvent::RoomParticipantDidConnect => "roomParticipantDidConnect",
            RoomEvent::RoomParticipantDidDisconnect => "roomParticipantDidDisconnect",
            RoomEvent::ParticipantAddedVideoTrack => "participantAddedVideoTrack",
            RoomEvent::ParticipantRemovedVideoTrack => "participantRemovedVideoTrack",
            RoomEvent::ParticipantAddedAudioTrack => "participantAddedAudioTrack",
            RoomEvent::ParticipantRemovedAudioTrack => "participantRemovedAudioTrack",
            RoomEvent::ParticipantAddedDataTrack => "participantAddedDataTrack",
            RoomEvent::ParticipantRemovedDataTrack => "participantRemovedDataTrack",
            RoomEvent::ParticipantEnabledVideoTrack => "participantEnabledVideoTrack",
            RoomEvent::ParticipantDisabledVideoTrack => "participantDisabledVideoTrack",
            RoomEvent::ParticipantEnabledAudioTrack => "participantEnabledAudioTrack",
            RoomEvent::ParticipantDisabledAudioTrack => "participantDisabledAudioTrack",
            RoomEvent::DataTrackMessageReceived => "dataTrackMessageReceived",
            RoomEvent::DataTrackBinaryMessageReceived => "dataTrackBinaryMessageReceived",
            RoomEvent::CameraDidStart => "cameraDidStart",
            RoomEvent::CameraWasInterrupted => "cameraWasInterrupted",
            RoomEvent::CameraInterruptionEnded => "cameraInterruptionEnded",
            RoomEvent::CameraDidStopRunning => "cameraDidStopRunning",
            RoomEvent::CameraSwitched => "cameraSwitched",
            RoomEvent::VideoChanged => "videoChanged",
            RoomEvent::AudioChanged => "audioChanged",
            RoomEvent::StatsReceived => "statsReceived",
            RoomEvent::NetworkQualityLevelsChanged => "networkQualityLevelsChanged",
            // Wire oddities: these two carry an "on" prefix on the native side.
            RoomEvent::DominantSpeakerDidChange => "onDominantSpeakerDidChange",
            RoomEvent::FlashlightStatusChanged => "onFlashlightStatusChanged",
            RoomEvent::LocalParticipantSupportedCodecs => "localParticipantSupportedCodecs",
        }
    }

    /// Map a native event name back onto the taxonomy.  Unrecognized names
    /// yield `None` and are dropped by the normalizer.
    pub fn from_native_name(name: &str) -> Option<RoomEvent> {
        RoomEvent::ALL
            .into_iter()
            .find(|event| event.native_name() == name)
    }
}
