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

//! Binary data-track payload codec.
//!
//! Binary data-track messages cross the native boundary as base64 text; this
//! module converts them to raw bytes at the edge of the event normalizer.
//! Only the decode direction is exercised in production; encoding belongs to
//! the native side and is kept here for host test doubles.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Decode the wire form of a binary data-track message.
pub fn decode_binary_message(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(encoded)?)
}

/// Encode a byte sequence the way the native side does.
pub fn encode_binary_message(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
