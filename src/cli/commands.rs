//! Command implementations

use std::path::{Path, PathBuf};

use tracing::info;

use crate::engine::progress::ConsoleProgressSink;
use crate::engine::{EngineConfig, Transcoder};
use crate::error::{TranscodeError, TranscodeResult};
use crate::probe::MetadataProber;
use crate::utils::path::derive_output_path;

/// Execute the transcode command.
///
/// Drives the whole run: validate the input, derive the output path, probe
/// metadata (best-effort), and hand off to the engine. Returns the resolved
/// output path on success.
pub fn transcode(input: &Path) -> TranscodeResult<PathBuf> {
    info!("Starting transcode operation");
    info!("Input: {}", input.display());

    // Validate input file exists before anything is launched
    if !input.is_file() {
        return Err(TranscodeError::InputFileNotFound {
            path: input.display().to_string(),
        });
    }

    let output = derive_output_path(input);
    println!("Input:  {}", input.display());
    println!("Output: {}", output.display());

    // Best-effort metadata report; failures degrade to sentinels
    let metadata = MetadataProber::new().probe(input);
    println!("------------------------------------------------");
    println!(
        "Video metadata: duration={}, frames={}",
        metadata.duration, metadata.frames
    );
    println!("------------------------------------------------");

    let config = EngineConfig::new(input.to_path_buf(), output.clone());
    println!(
        "Detected {} logical CPUs, passed to FFmpeg as -threads.",
        config.threads
    );

    println!("Transcoding...");
    let transcoder = Transcoder::new();
    let mut sink = ConsoleProgressSink::new();
    transcoder.run(&config, &mut sink)?;

    println!("\nTranscode complete!");
    println!("Saved to: {}", output.display());

    info!("Transcode operation completed successfully");
    Ok(output)
}
