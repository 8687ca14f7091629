//! FFprobe-based metadata extraction

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{TranscodeError, TranscodeResult};
use crate::probe::VideoMetadata;
use crate::utils::time::format_duration;

/// Name of the probe executable looked up on PATH
pub const PROBE_TOOL: &str = "ffprobe";

/// Top-level shape of the ffprobe JSON report
#[derive(Debug, Deserialize)]
struct ProbeReport {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

/// Per-stream fields requested from ffprobe
#[derive(Debug, Deserialize)]
struct ProbeStream {
    duration: Option<String>,
    nb_frames: Option<String>,
}

/// Metadata prober for video files
pub struct MetadataProber;

impl MetadataProber {
    /// Create a new metadata prober
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }

    /// Probe the first video stream of `input` for duration and frame count.
    ///
    /// This is a best-effort operation: every failure mode (missing ffprobe,
    /// non-zero probe exit, malformed output) is reported to the console and
    /// converted to sentinel values. No error crosses this boundary.
    pub fn probe(&self, input: &Path) -> VideoMetadata {
        match self.try_probe(input) {
            Ok(metadata) => metadata,
            Err(TranscodeError::ToolNotFound { tool }) => {
                warn!("{} not found on PATH", tool);
                eprintln!(
                    "Warning: {} not found. Make sure FFmpeg is installed and on your PATH.",
                    tool
                );
                VideoMetadata::not_available()
            }
            Err(err) => {
                warn!("Metadata probe failed: {}", err);
                eprintln!("Warning: failed to read metadata: {}", err);
                VideoMetadata::not_available()
            }
        }
    }

    /// Run ffprobe and parse its JSON report.
    fn try_probe(&self, input: &Path) -> TranscodeResult<VideoMetadata> {
        let output = Command::new(PROBE_TOOL)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=duration,nb_frames",
                "-of",
                "json",
            ])
            .arg(input)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TranscodeError::ToolNotFound {
                    tool: PROBE_TOOL.to_string(),
                },
                _ => TranscodeError::Io(e),
            })?;

        if !output.status.success() {
            return Err(TranscodeError::ProbeFailed {
                message: format!(
                    "{} exited with code {}: {}",
                    PROBE_TOOL,
                    output.status.code().unwrap_or(-1),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        debug!("ffprobe report: {}", String::from_utf8_lossy(&output.stdout));
        parse_probe_report(&output.stdout)
    }
}

/// Parse a raw ffprobe JSON report into stream metadata.
///
/// A report without streams is valid output (not every container has a video
/// stream) and maps to the `unknown` sentinels.
fn parse_probe_report(raw: &[u8]) -> TranscodeResult<VideoMetadata> {
    let report: ProbeReport =
        serde_json::from_slice(raw).map_err(|e| TranscodeError::ProbeFailed {
            message: format!("invalid {} output: {}", PROBE_TOOL, e),
        })?;

    let Some(stream) = report.streams.first() else {
        return Ok(VideoMetadata::unknown());
    };

    let duration = stream
        .duration
        .as_deref()
        .and_then(|raw| raw.parse::<f64>().ok())
        .map(format_duration)
        .unwrap_or_else(|| crate::probe::UNKNOWN.to_string());

    let frames = stream
        .nb_frames
        .clone()
        .unwrap_or_else(|| crate::probe::UNKNOWN.to_string());

    Ok(VideoMetadata { duration, frames })
}
