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

//! Records carried inside native event payloads.
//!
//! These deserialize from the camelCase JSON the native runtime emits.  The
//! runtime owns all of them; the bridge only relays transient references.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A remote or local endpoint inside a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique session identifier assigned by the runtime.
    pub sid: String,
    /// Human-readable identity from the access credential.
    pub identity: String,
}

/// A single audio, video, or data stream published by a participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub enabled: bool,
    pub track_name: String,
    pub track_sid: String,
}

/// Lookup key addressing a specific remote video feed to a rendering surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackIdentifier {
    pub participant_sid: String,
    pub video_track_sid: String,
}

/// A decoded binary data-track message.
///
/// The native runtime delivers binary payloads base64-encoded inside the
/// `message` field; the bridge decodes that field and passes every other
/// payload field through untouched in `extra`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BinaryMessage {
    /// The decoded byte sequence.
    pub message: Vec<u8>,
    /// All remaining payload fields (e.g. `trackSid`), unmodified.
    pub extra: Map<String, Value>,
}

impl BinaryMessage {
    /// Convenience accessor for the `trackSid` field, when present.
    pub fn track_sid(&self) -> Option<&str> {
        self.extra.get("trackSid").and_then(Value::as_str)
    }
}
