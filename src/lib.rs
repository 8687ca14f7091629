//! TranscodeX CLI Video Transcoder Library
//!
//! A command-line tool that converts an input video into a fixed-format
//! 1080p/30fps H.264/AAC MP4 beside the source, delegating all processing to
//! external FFmpeg tools. The library covers the thin orchestration around
//! them: ffprobe metadata extraction, ffmpeg command construction, and
//! rate-limited progress streaming.

pub mod cli;
pub mod engine;
pub mod error;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use engine::{EngineConfig, Transcoder};
pub use error::{TranscodeError, TranscodeResult};
pub use error::{EXIT_MISSING_INPUT, EXIT_SUCCESS, EXIT_TOOL_NOT_FOUND, EXIT_UNEXPECTED};
pub use probe::{MetadataProber, VideoMetadata};
