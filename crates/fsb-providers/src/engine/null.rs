//! Null formatting engine
//!
//! Returns text unchanged. Useful for testing the switchboard wiring
//! without changing any file.

use fsb_domain::error::Result;
use fsb_domain::ports::FormattingEngine;
use fsb_domain::value_objects::{FormatterConfig, SourceFile, TextRange};
use std::sync::Arc;

/// Engine that never changes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormattingEngine;

impl NullFormattingEngine {
    /// Create a new null engine
    pub fn new() -> Self {
        Self
    }
}

impl FormattingEngine for NullFormattingEngine {
    fn engine_name(&self) -> &str {
        "null"
    }

    fn format(&self, file: &SourceFile, _ranges: &[TextRange]) -> Result<String> {
        Ok(file.text.clone())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use fsb_application::ports::registry::{FORMATTING_ENGINES, FormattingEngineEntry};

fn null_engine_factory(_config: &FormatterConfig) -> Result<Arc<dyn FormattingEngine>> {
    Ok(Arc::new(NullFormattingEngine::new()))
}

#[linkme::distributed_slice(FORMATTING_ENGINES)]
static NULL_ENGINE: FormattingEngineEntry = FormattingEngineEntry {
    name: "null",
    description: "Null engine (returns text unchanged)",
    factory: null_engine_factory,
};
