//! Device capabilities that sit behind an OS permission prompt

use serde::{Deserialize, Serialize};
use std::fmt;

/// A permission-gated device feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCapability {
    Location,
    Camera,
    MediaLibrary,
}

impl fmt::Display for DeviceCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Location => "location",
            Self::Camera => "camera",
            Self::MediaLibrary => "media library",
        })
    }
}
