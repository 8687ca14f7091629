//! Media metadata probing module
//!
//! Best-effort metadata extraction via ffprobe. Probe failures never block
//! transcoding; they degrade to sentinel values instead.

use serde::{Deserialize, Serialize};

pub mod inspector;

pub use inspector::MetadataProber;

/// Sentinel reported when a field is missing from an otherwise valid probe
pub const UNKNOWN: &str = "unknown";

/// Sentinel reported when the probe itself failed
pub const NOT_AVAILABLE: &str = "N/A";

/// Metadata extracted from the first video stream of an input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Formatted duration (`HH:MM:SS.ss`) or a sentinel
    pub duration: String,
    /// Frame count as reported by the probe, or a sentinel
    pub frames: String,
}

impl VideoMetadata {
    /// Metadata for a probe that parsed but reported no usable video stream
    pub fn unknown() -> Self {
        Self {
            duration: UNKNOWN.to_string(),
            frames: UNKNOWN.to_string(),
        }
    }

    /// Metadata for a probe that failed outright
    pub fn not_available() -> Self {
        Self {
            duration: NOT_AVAILABLE.to_string(),
            frames: NOT_AVAILABLE.to_string(),
        }
    }
}
