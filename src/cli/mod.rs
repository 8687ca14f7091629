//! CLI module for TranscodeX
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;

/// TranscodeX CLI Video Transcoder
///
/// Converts a video into a 1080p/30fps H.264 MP4 placed beside the source,
/// delegating all processing to FFmpeg.
#[derive(Parser)]
#[command(name = "transcodex")]
#[command(about = "TranscodeX CLI - transcode a video to 1080p/30fps next to the source")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Input video file path
    pub input: PathBuf,
}
