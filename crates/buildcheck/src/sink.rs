//! Diagnostic sinks.
//!
//! A sink is where failed checks write their diagnostic line:
//! - Stderr: unbuffered, one `write` per line (default for programs)
//! - Buffer: captured in memory for assertions in tests
//! - Silent: discarded, only the line count is kept
//!
//! Every sink counts the lines it received. Under the continue policy that
//! count is how a caller learns whether anything failed.
//!
//! Uses enum dispatch instead of trait objects, matching the small closed set
//! of destinations.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Sink that writes each line straight to the process's stderr.
#[derive(Default)]
pub struct StderrSink {
    lines: AtomicUsize,
}

impl StderrSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line (newline appended).
    pub fn report_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        // Nowhere left to report a failing stderr.
        let _ = writeln!(stderr, "{line}");
        let _ = stderr.flush();
        self.lines.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lines_reported(&self) -> usize {
        self.lines.load(Ordering::Relaxed)
    }

    /// Reset the line count. Already-written output is unaffected.
    pub fn clear(&self) {
        self.lines.store(0, Ordering::Relaxed);
    }
}

/// Sink that captures lines into a buffer.
#[derive(Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
    lines: AtomicUsize,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line (newline appended).
    pub fn report_line(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
        self.lines.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines_reported(&self) -> usize {
        self.lines.load(Ordering::Relaxed)
    }

    /// Clear captured output and the line count.
    pub fn clear(&self) {
        self.buffer.lock().clear();
        self.lines.store(0, Ordering::Relaxed);
    }
}

/// Sink implementation using enum dispatch.
pub enum SinkImpl {
    /// Writes to stderr (default).
    Stderr(StderrSink),
    /// Captures to a buffer (tests).
    Buffer(BufferSink),
    /// Discards text, counts lines.
    Silent(AtomicUsize),
}

impl SinkImpl {
    /// Report one diagnostic line.
    pub fn report_line(&self, line: &str) {
        match self {
            Self::Stderr(s) => s.report_line(line),
            Self::Buffer(s) => s.report_line(line),
            Self::Silent(lines) => {
                lines.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Diagnostics captured so far.
    ///
    /// Only a buffer keeps the text; lines sent to stderr or discarded are
    /// not recoverable, so those sinks yield an empty string.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(s) => s.get_output(),
            Self::Stderr(_) | Self::Silent(_) => String::new(),
        }
    }

    /// Number of lines reported since creation or the last [`clear`](Self::clear).
    pub fn lines_reported(&self) -> usize {
        match self {
            Self::Stderr(s) => s.lines_reported(),
            Self::Buffer(s) => s.lines_reported(),
            Self::Silent(lines) => lines.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Stderr(s) => s.clear(),
            Self::Buffer(s) => s.clear(),
            Self::Silent(lines) => lines.store(0, Ordering::Relaxed),
        }
    }
}

/// Shared sink handle passed to checkers.
pub type SharedSink = Arc<SinkImpl>;

/// Create a sink writing to stderr.
pub fn stderr_sink() -> SharedSink {
    Arc::new(SinkImpl::Stderr(StderrSink::new()))
}

/// Create a buffer sink for capturing diagnostics.
pub fn buffer_sink() -> SharedSink {
    Arc::new(SinkImpl::Buffer(BufferSink::new()))
}

/// Create a silent sink that discards text but still counts lines.
pub fn silent_sink() -> SharedSink {
    Arc::new(SinkImpl::Silent(AtomicUsize::new(0)))
}

#[cfg(test)]
mod tests;
