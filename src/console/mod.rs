//! Tagged console logging.
//!
//! A single logger parameterized by the product tag writes severity-tagged
//! lines such as `[gofire Info] Ready` to the standard streams. Debug lines
//! are only written while the injected debug gate is open.
//!
//! # Architecture
//!
//! - `level`: severity levels, their labels and target streams
//! - `sink`: where a formatted line ends up (`StdStreams`, `MemorySink`)
//! - `logger`: `ConsoleLogger`, the four print operations
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use gofire_console::config::Settings;
//! use gofire_console::console::ConsoleLogger;
//!
//! let settings = Arc::new(Settings::new(false));
//! let logger = ConsoleLogger::new("gofire", settings);
//! logger.info("Application started").unwrap();
//! ```

mod level;
mod logger;
mod sink;

pub use level::{LogLevel, Stream};
pub use logger::{ConsoleError, ConsoleLogger};
pub use sink::{ConsoleRecord, ConsoleSink, MemorySink, StdStreams};
