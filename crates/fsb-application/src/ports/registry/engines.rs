//! Formatting Engine Registry

use fsb_domain::error::{Error, Result};
use fsb_domain::ports::FormattingEngine;
use fsb_domain::value_objects::FormatterConfig;
use std::sync::Arc;

/// Registry entry for formatting engines
pub struct FormattingEngineEntry {
    /// Unique engine name (e.g. "whitespace", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory building a configured engine
    pub factory: fn(&FormatterConfig) -> Result<Arc<dyn FormattingEngine>>,
}

#[linkme::distributed_slice]
pub static FORMATTING_ENGINES: [FormattingEngineEntry] = [..];

/// Resolve the engine named by `config.engine`
///
/// # Returns
/// * `Ok(Arc<dyn FormattingEngine>)` - Configured engine instance
/// * `Err(Error::UnsupportedCapability)` - No engine registered under that name
pub fn resolve_formatting_engine(config: &FormatterConfig) -> Result<Arc<dyn FormattingEngine>> {
    if let Some(entry) = FORMATTING_ENGINES
        .iter()
        .find(|entry| entry.name == config.engine)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = FORMATTING_ENGINES.iter().map(|e| e.name).collect();
    Err(Error::unsupported_capability(format!(
        "Unknown formatting engine '{}'. Available engines: {:?}",
        config.engine, available
    )))
}

/// List all registered engines as (name, description)
pub fn list_formatting_engines() -> Vec<(&'static str, &'static str)> {
    FORMATTING_ENGINES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
