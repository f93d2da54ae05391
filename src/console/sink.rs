//! Destinations for console lines.

use crate::console::{LogLevel, Stream};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// Receives one tagged line per logger call.
///
/// The structured object, when present, arrives as its own argument so a sink
/// can render it distinctly from the message.
pub trait ConsoleSink: Send + Sync {
    fn write(&self, level: LogLevel, message: &str, object: Option<&Value>) -> io::Result<()>;
}

/// Render a message and optional object as a single line (without newline).
///
/// The object is appended as compact JSON after one space.
pub fn render_line(message: &str, object: Option<&Value>) -> String {
    match object {
        Some(value) => format!("{} {}", message, value),
        None => message.to_string(),
    }
}

/// Writes debug/info to stdout and warn/error to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStreams;

impl ConsoleSink for StdStreams {
    fn write(&self, level: LogLevel, message: &str, object: Option<&Value>) -> io::Result<()> {
        let line = render_line(message, object);
        match level.stream() {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)?;
                out.flush()
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                writeln!(err, "{}", line)?;
                err.flush()
            }
        }
    }
}

/// A captured console line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleRecord {
    pub level: LogLevel,
    pub message: String,
    pub object: Option<Value>,
}

impl ConsoleRecord {
    pub fn stream(&self) -> Stream {
        self.level.stream()
    }

    /// The line as `StdStreams` would print it.
    pub fn rendered(&self) -> String {
        render_line(&self.message, self.object.as_ref())
    }
}

/// In-memory sink that keeps every line written to it.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<ConsoleRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ConsoleRecord> {
        self.lock().clone()
    }

    /// Records written to one stream, in write order.
    pub fn on_stream(&self, stream: Stream) -> Vec<ConsoleRecord> {
        self.lock()
            .iter()
            .filter(|record| record.stream() == stream)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ConsoleRecord>> {
        // Pushes are all-or-nothing, so a poisoned lock is still consistent.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConsoleSink for MemorySink {
    fn write(&self, level: LogLevel, message: &str, object: Option<&Value>) -> io::Result<()> {
        self.lock().push(ConsoleRecord {
            level,
            message: message.to_string(),
            object: object.cloned(),
        });
        Ok(())
    }
}
