//! Console severity levels.

use std::fmt;

/// Standard stream a level is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Severity of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Diagnostic output, gated by the debug flag
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl LogLevel {
    /// Label rendered inside the bracketed tag (e.g. "Warn").
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
        }
    }

    pub fn stream(self) -> Stream {
        match self {
            LogLevel::Debug | LogLevel::Info => Stream::Stdout,
            LogLevel::Warn | LogLevel::Error => Stream::Stderr,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Debug.label(), "Debug");
        assert_eq!(LogLevel::Info.label(), "Info");
        assert_eq!(LogLevel::Warn.label(), "Warn");
        assert_eq!(LogLevel::Error.label(), "Error");
    }

    #[test]
    fn test_streams() {
        assert_eq!(LogLevel::Debug.stream(), Stream::Stdout);
        assert_eq!(LogLevel::Info.stream(), Stream::Stdout);
        assert_eq!(LogLevel::Warn.stream(), Stream::Stderr);
        assert_eq!(LogLevel::Error.stream(), Stream::Stderr);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(LogLevel::Warn.to_string(), "Warn");
    }
}
