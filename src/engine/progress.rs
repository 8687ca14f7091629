//! Progress filtering, throttling, and console redraw
//!
//! ffmpeg reports encoding progress as free-form status lines on its combined
//! output. The engine filters those lines, throttles them to at most one echo
//! per second, and hands them to a [`ProgressSink`] so terminal formatting
//! stays separate from the rate-limiting policy.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Minimum interval between two echoed progress lines
pub const ECHO_INTERVAL: Duration = Duration::from_secs(1);

/// Width of the blank used to clear the progress line
const CLEAR_WIDTH: usize = 80;

/// Destination for throttled progress lines
pub trait ProgressSink {
    /// Show a progress line, replacing the previously shown one
    fn display(&mut self, line: &str);

    /// Remove the progress line from view
    fn clear(&mut self);
}

/// Console sink that redraws the progress line in place.
///
/// Uses a carriage return instead of a newline so successive updates
/// overwrite each other rather than scrolling the terminal.
pub struct ConsoleProgressSink;

impl ConsoleProgressSink {
    /// Create a new console sink
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for ConsoleProgressSink {
    fn display(&mut self, line: &str) {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\r{}", line);
        let _ = stdout.flush();
    }

    fn clear(&mut self) {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\r{}\r", " ".repeat(CLEAR_WIDTH));
        let _ = stdout.flush();
    }
}

/// Sink that collects displayed lines instead of printing them.
///
/// The swap point for a structured progress callback, and the test double.
#[derive(Debug, Default)]
pub struct BufferedProgressSink {
    /// Displayed lines in arrival order
    pub lines: Vec<String>,
    /// Number of times the progress line was cleared
    pub clears: usize,
}

impl BufferedProgressSink {
    /// Create an empty buffered sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for BufferedProgressSink {
    fn display(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

/// Whether a line of ffmpeg output carries encoding progress.
///
/// ffmpeg's status lines contain a `frame=` counter and/or a `time=` marker;
/// everything else (banners, stream maps, warnings) is not progress.
pub fn is_progress_line(line: &str) -> bool {
    line.contains("frame=") || line.contains("time=")
}

/// One-per-second echo rate limiter.
///
/// The current time is passed in by the caller so the policy is testable
/// without sleeping.
#[derive(Debug)]
pub struct ProgressThrottle {
    interval: Duration,
    last_echo: Option<Instant>,
}

impl ProgressThrottle {
    /// Create a throttle with the standard one-second interval
    pub fn new() -> Self {
        Self::with_interval(ECHO_INTERVAL)
    }

    /// Create a throttle with a custom interval
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_echo: None,
        }
    }

    /// Whether a candidate line arriving at `now` should be echoed.
    ///
    /// The first candidate is always echoed; afterwards at most one echo per
    /// interval. Returning `true` arms the throttle at `now`.
    pub fn should_echo(&mut self, now: Instant) -> bool {
        match self.last_echo {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_echo = Some(now);
                true
            }
        }
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a line stream through the progress filter and throttle.
///
/// Every line is kept in the returned transcript; only progress-bearing lines
/// that pass the throttle reach the sink.
pub fn pump_progress<I>(
    lines: I,
    throttle: &mut ProgressThrottle,
    sink: &mut dyn ProgressSink,
) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut transcript = Vec::new();
    for line in lines {
        if is_progress_line(&line) && throttle.should_echo(Instant::now()) {
            sink.display(line.trim());
        }
        transcript.push(line);
    }
    transcript
}
