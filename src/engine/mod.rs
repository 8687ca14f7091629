//! Core transcoding engine module
//!
//! The engine owns the fixed 1080p/30fps target profile, turns it into an
//! ffmpeg argument list, and runs ffmpeg as a child process with throttled
//! progress echoing.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod progress;
pub mod transcoder;

pub use transcoder::Transcoder;

/// Target video codec
pub const VIDEO_CODEC: &str = "libx264";

/// Target video bitrate
pub const VIDEO_BITRATE: &str = "4500k";

/// Target frame rate
pub const FRAME_RATE: &str = "30";

/// Aspect-preserving scale to 1920x1080 with centered padding
pub const SCALE_PAD_FILTER: &str =
    "scale=1920:1080:force_original_aspect_ratio=decrease,pad=1920:1080:(ow-iw)/2:(oh-ih)/2";

/// Encoder preset (effort/quality tradeoff)
pub const PRESET: &str = "medium";

/// Target audio codec
pub const AUDIO_CODEC: &str = "aac";

/// Target audio bitrate
pub const AUDIO_BITRATE: &str = "128k";

/// Transcoding engine configuration
///
/// Built once per invocation and immutable afterwards. Everything besides the
/// paths and the thread-count hint is fixed by the target profile above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Input file path
    pub input_path: PathBuf,
    /// Output file path
    pub output_path: PathBuf,
    /// Thread-count hint passed to the encoder (detected logical CPUs).
    /// An optimization hint only; ffmpeg may ignore or reinterpret it.
    pub threads: usize,
}

impl EngineConfig {
    /// Create a configuration for the fixed target profile.
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            threads: num_cpus::get(),
        }
    }

    /// Build the ordered ffmpeg argument list for this configuration.
    ///
    /// `-y` force-overwrites any existing output without prompting.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        args.push("-i".into());
        args.push(self.input_path.clone().into_os_string());
        for arg in [
            "-c:v",
            VIDEO_CODEC,
            "-b:v",
            VIDEO_BITRATE,
            "-r",
            FRAME_RATE,
            "-vf",
            SCALE_PAD_FILTER,
            "-preset",
            PRESET,
        ] {
            args.push(arg.into());
        }
        args.push("-threads".into());
        args.push(self.threads.to_string().into());
        for arg in ["-c:a", AUDIO_CODEC, "-b:a", AUDIO_BITRATE, "-y"] {
            args.push(arg.into());
        }
        args.push(self.output_path.clone().into_os_string());
        args
    }
}
