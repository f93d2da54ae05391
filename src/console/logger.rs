//! The product-tagged console logger.

use crate::config::DebugSettings;
use crate::console::{ConsoleSink, LogLevel, StdStreams};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Failure to emit a console line.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to write console line: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize console object: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Severity-tagged logger writing `[<product> <Level>] message` lines.
///
/// The debug gate is read from the injected settings on every `debug` call.
#[derive(Clone)]
pub struct ConsoleLogger {
    product: String,
    settings: Arc<dyn DebugSettings>,
    sink: Arc<dyn ConsoleSink>,
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("product", &self.product)
            .field("debug_enabled", &self.settings.is_enable_debug())
            .finish()
    }
}

impl ConsoleLogger {
    /// Create a logger writing to the standard streams.
    pub fn new(product: impl Into<String>, settings: Arc<dyn DebugSettings>) -> Self {
        Self::with_sink(product, settings, Arc::new(StdStreams))
    }

    /// Create a logger writing to the given sink.
    pub fn with_sink(
        product: impl Into<String>,
        settings: Arc<dyn DebugSettings>,
        sink: Arc<dyn ConsoleSink>,
    ) -> Self {
        Self {
            product: product.into(),
            settings,
            sink,
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Bracketed tag for a level, e.g. `[gofire Debug]`.
    pub fn tag(&self, level: LogLevel) -> String {
        format!("[{} {}]", self.product, level.label())
    }

    /// Whether a `debug` call would currently produce output.
    pub fn is_debug_enabled(&self) -> bool {
        self.settings.is_enable_debug()
    }

    pub fn debug(&self, msg: &str) -> Result<(), ConsoleError> {
        if !self.is_debug_enabled() {
            return Ok(());
        }
        self.emit(LogLevel::Debug, msg, None)
    }

    pub fn debug_with<T: Serialize + ?Sized>(
        &self,
        msg: &str,
        obj: &T,
    ) -> Result<(), ConsoleError> {
        if !self.is_debug_enabled() {
            return Ok(());
        }
        let value = serde_json::to_value(obj)?;
        self.emit(LogLevel::Debug, msg, Some(&value))
    }

    pub fn info(&self, msg: &str) -> Result<(), ConsoleError> {
        self.emit(LogLevel::Info, msg, None)
    }

    pub fn info_with<T: Serialize + ?Sized>(&self, msg: &str, obj: &T) -> Result<(), ConsoleError> {
        self.emit_object(LogLevel::Info, msg, obj)
    }

    pub fn warn(&self, msg: &str) -> Result<(), ConsoleError> {
        self.emit(LogLevel::Warn, msg, None)
    }

    pub fn warn_with<T: Serialize + ?Sized>(&self, msg: &str, obj: &T) -> Result<(), ConsoleError> {
        self.emit_object(LogLevel::Warn, msg, obj)
    }

    pub fn error(&self, msg: &str) -> Result<(), ConsoleError> {
        self.emit(LogLevel::Error, msg, None)
    }

    pub fn error_with<T: Serialize + ?Sized>(
        &self,
        msg: &str,
        obj: &T,
    ) -> Result<(), ConsoleError> {
        self.emit_object(LogLevel::Error, msg, obj)
    }

    fn emit_object<T: Serialize + ?Sized>(
        &self,
        level: LogLevel,
        msg: &str,
        obj: &T,
    ) -> Result<(), ConsoleError> {
        let value = serde_json::to_value(obj)?;
        self.emit(level, msg, Some(&value))
    }

    fn emit(&self, level: LogLevel, msg: &str, obj: Option<&Value>) -> Result<(), ConsoleError> {
        let line = format!("{} {}", self.tag(level), escape_line_breaks(msg));
        self.sink.write(level, &line, obj)?;
        Ok(())
    }
}

/// Render `\r` and `\n` as escapes so a message never spans two lines.
fn escape_line_breaks(msg: &str) -> Cow<'_, str> {
    if !msg.contains(['\r', '\n']) {
        return Cow::Borrowed(msg);
    }
    let mut escaped = String::with_capacity(msg.len() + 2);
    for c in msg.chars() {
        match c {
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
