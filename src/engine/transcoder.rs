//! FFmpeg child process orchestration

use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, error, info};

use crate::engine::progress::{pump_progress, ProgressSink, ProgressThrottle};
use crate::engine::EngineConfig;
use crate::error::{TranscodeError, TranscodeResult};

/// Name of the transcode executable looked up on PATH
pub const TRANSCODE_TOOL: &str = "ffmpeg";

/// Number of transcript lines echoed when the child fails
const FAILURE_TAIL_LINES: usize = 15;

/// FFmpeg transcode runner
pub struct Transcoder;

impl Transcoder {
    /// Create a new transcoder
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }

    /// Run the transcode described by `config`, echoing throttled progress to
    /// `sink`.
    ///
    /// The child's stdout and stderr are merged into a single line stream and
    /// drained completely; the child is always reaped before this returns.
    /// A missing ffmpeg binary maps to [`TranscodeError::ToolNotFound`]; a
    /// non-zero child exit echoes the transcript tail and carries the child's
    /// own exit code.
    pub fn run(&self, config: &EngineConfig, sink: &mut dyn ProgressSink) -> TranscodeResult<()> {
        info!("Launching {} with {} threads", TRANSCODE_TOOL, config.threads);
        debug!("Arguments: {:?}", config.to_args());

        let mut child = Command::new(TRANSCODE_TOOL)
            .args(config.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TranscodeError::ToolNotFound {
                    tool: TRANSCODE_TOOL.to_string(),
                },
                _ => TranscodeError::Io(e),
            })?;

        // Merge both pipes into one ordered line stream. The forwarding
        // threads end when the child closes its pipes, which also closes the
        // channel once both senders are dropped.
        let (tx, rx) = mpsc::channel::<String>();
        let stdout_reader = child.stdout.take().map(|out| forward_lines(out, tx.clone()));
        let stderr_reader = child.stderr.take().map(|err| forward_lines(err, tx));

        let mut throttle = ProgressThrottle::new();
        let transcript = pump_progress(rx, &mut throttle, sink);

        if let Some(handle) = stdout_reader {
            let _ = handle.join();
        }
        if let Some(handle) = stderr_reader {
            let _ = handle.join();
        }

        let status = child.wait()?;
        sink.clear();

        if status.success() {
            info!("{} finished successfully", TRANSCODE_TOOL);
            return Ok(());
        }

        let code = status.code().unwrap_or(-1);
        error!("{} exited with code {}", TRANSCODE_TOOL, code);
        for line in transcript.iter().rev().take(FAILURE_TAIL_LINES).rev() {
            eprintln!("{}", line);
        }

        Err(TranscodeError::TranscodeFailed { code })
    }
}

/// Forward lines from a child pipe into the merged channel.
fn forward_lines<R>(pipe: R, tx: mpsc::Sender<String>) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(pipe);
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    })
}
