//! Configuration management
//!
//! Figment-based loading of [`AppConfig`]: defaults, then a TOML file, then
//! `FSB_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
