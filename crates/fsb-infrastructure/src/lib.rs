//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the switchboard.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`di`] | Composition root and component listing |
//! | [`error_ext`] | Context helpers mapping foreign errors to domain errors |
//! | [`logging`] | Structured logging with tracing |

// Force linkme registration of every override variant and engine
extern crate fsb_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use di::{AppContext, AvailableComponents, init_switchboard, list_available_components};
pub use error_ext::ErrorContext;
