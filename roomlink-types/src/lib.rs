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

//! Shared data types for the roomlink bridge.
//!
//! Everything here is either write-once configuration supplied by the caller
//! (e.g. [`ConnectOptions`]) or a transient record carried inside native event
//! payloads (e.g. [`Participant`], [`Track`]).  The bridge never holds an
//! authoritative copy of any of it; the native room runtime does.

pub mod callback;
pub mod options;
pub mod room;
pub mod view;

pub use callback::Callback;
pub use options::{CameraSource, ConnectOptions, EncodingParameters};
pub use room::{BinaryMessage, Participant, Track, TrackIdentifier};
pub use view::{LocalVideoViewProps, RemoteVideoViewProps, ScaleMode};
