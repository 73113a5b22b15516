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

//! Descriptors for the two native rendering surfaces.
//!
//! The bridge does not render anything itself; the host UI integration passes
//! these to whatever native view it mounts.

use crate::room::TrackIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a video feed is fitted into its surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Letterbox: the whole frame is visible.
    #[default]
    Fit,
    /// Crop: the surface is fully covered.
    Fill,
}

impl ScaleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleMode::Fit => "fit",
            ScaleMode::Fill => "fill",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized scale mode {0:?} (expected \"fit\" or \"fill\")")]
pub struct ParseScaleModeError(String);

impl FromStr for ScaleMode {
    type Err = ParseScaleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(ScaleMode::Fit),
            "fill" => Ok(ScaleMode::Fill),
            other => Err(ParseScaleModeError(other.to_string())),
        }
    }
}

/// Surface showing one remote participant's video track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVideoViewProps {
    pub track_identifier: TrackIdentifier,
    pub scale_mode: ScaleMode,
}

/// Surface previewing the local camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalVideoViewProps {
    pub enabled: bool,
    pub scale_mode: ScaleMode,
}
