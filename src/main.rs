//! TranscodeX CLI Video Transcoder
//!
//! Converts an input video into a 1080p/30fps H.264/AAC MP4 placed beside the
//! source file. All processing is delegated to FFmpeg; this program builds the
//! commands, streams progress, and maps outcomes to exit codes.
//!
//! # Usage
//!
//! ```bash
//! transcodex "video.mkv"
//! # writes video_1080p30fps.mp4 next to the input
//! ```
//!
//! # Exit codes
//!
//! - `0` success
//! - `2` input file does not exist
//! - `3` ffmpeg not found on PATH
//! - `4` unexpected error during transcoding
//! - any other value: the ffmpeg child's own exit code

use clap::Parser;
use tracing::{error, info};

use transcodex_cli::cli::{commands, Cli};
use transcodex_cli::error::EXIT_SUCCESS;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting TranscodeX CLI");

    // Parse command line arguments
    let cli = Cli::parse();

    let code = match commands::transcode(&cli.input) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            error!("Transcode failed: {}", e);
            eprintln!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
