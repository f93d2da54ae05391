use anyhow::{bail, Context, Result};
use std::env::VarError;
use std::sync::atomic::{AtomicBool, Ordering};

/// Default product tag rendered inside the console brackets.
pub const DEFAULT_PRODUCT: &str = "gofire";

/// Source of the debug gate consulted by the console logger.
///
/// Implementations are read on every debug call, so a toggled value takes
/// effect on the next call.
pub trait DebugSettings: Send + Sync {
    fn is_enable_debug(&self) -> bool;
}

/// A fixed gate, handy when nothing needs to toggle it.
impl DebugSettings for bool {
    fn is_enable_debug(&self) -> bool {
        *self
    }
}

/// Runtime settings shared between the logger and whoever owns the toggle.
#[derive(Debug, Default)]
pub struct Settings {
    enable_debug: AtomicBool,
}

impl Settings {
    pub fn new(enable_debug: bool) -> Self {
        Self {
            enable_debug: AtomicBool::new(enable_debug),
        }
    }

    pub fn set_enable_debug(&self, enabled: bool) {
        self.enable_debug.store(enabled, Ordering::Relaxed);
    }
}

impl DebugSettings for Settings {
    fn is_enable_debug(&self) -> bool {
        self.enable_debug.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Console
    pub product: String,
    pub enable_debug: bool,

    // Locale
    pub language: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            product: std::env::var("GOFIRE_PRODUCT")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PRODUCT.to_string()),
            enable_debug: match std::env::var("GOFIRE_DEBUG") {
                Ok(raw) => parse_flag(&raw).context("GOFIRE_DEBUG is not a valid boolean")?,
                Err(VarError::NotPresent) => false,
                Err(e) => return Err(e).context("GOFIRE_DEBUG is not a valid boolean"),
            },
            language: std::env::var("GOFIRE_LANGUAGE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    /// Settings seeded from this config.
    pub fn settings(&self) -> Settings {
        Settings::new(self.enable_debug)
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected true/false, got '{}'", other),
    }
}
