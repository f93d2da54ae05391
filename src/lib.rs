//! Product-tagged console logging and the gofire locale registry.

pub mod config;
pub mod console;
pub mod i18n;
