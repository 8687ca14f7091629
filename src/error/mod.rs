//! Error handling module for TranscodeX

use thiserror::Error;

/// Process exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code when the input file does not exist
pub const EXIT_MISSING_INPUT: i32 = 2;

/// Process exit code when the ffmpeg executable cannot be found on PATH
pub const EXIT_TOOL_NOT_FOUND: i32 = 3;

/// Process exit code for any other error during orchestration
pub const EXIT_UNEXPECTED: i32 = 4;

/// Main error type for TranscodeX operations
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// External tool missing from the execution path
    #[error("{tool} not found. Make sure FFmpeg is installed and on your PATH")]
    ToolNotFound { tool: String },

    /// The ffmpeg child process exited with a non-zero status
    #[error("FFmpeg exited with code {code}")]
    TranscodeFailed { code: i32 },

    /// Media probe error (always absorbed inside the prober)
    #[error("Failed to probe media file: {message}")]
    ProbeFailed { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    /// Map this error to the process exit code documented in the CLI contract.
    ///
    /// A failed transcode propagates the child's own exit code; every other
    /// category gets a fixed code.
    pub fn exit_code(&self) -> i32 {
        match self {
            TranscodeError::InputFileNotFound { .. } => EXIT_MISSING_INPUT,
            TranscodeError::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            TranscodeError::TranscodeFailed { code } => *code,
            TranscodeError::ProbeFailed { .. } | TranscodeError::Io(_) => EXIT_UNEXPECTED,
        }
    }
}

/// Result type alias for TranscodeX operations
pub type TranscodeResult<T> = std::result::Result<T, TranscodeError>;
