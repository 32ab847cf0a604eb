//! Engine-backed formatting shared by every override variant

use fsb_application::ports::registry::resolve_formatting_engine;
use fsb_domain::error::Result;
use fsb_domain::ports::{CodeStyleService, FormattingEngine, OverrideVariant};
use fsb_domain::value_objects::{FormatterConfig, SourceFile, TextRange};
use std::sync::Arc;
use tracing::trace;

/// Original service, configured engine and the config snapshot taken at install time
#[derive(Debug)]
pub(crate) struct EngineDelegate {
    original: Arc<dyn CodeStyleService>,
    engine: Arc<dyn FormattingEngine>,
    config: FormatterConfig,
    name: String,
}

impl EngineDelegate {
    pub(crate) fn new(
        variant: OverrideVariant,
        original: Arc<dyn CodeStyleService>,
        config: &FormatterConfig,
    ) -> Result<Self> {
        let engine = resolve_formatting_engine(config)?;
        let name = format!("{} ({variant})", engine.engine_name());
        Ok(Self {
            original,
            engine,
            config: config.clone(),
            name,
        })
    }

    pub(crate) fn original(&self) -> &Arc<dyn CodeStyleService> {
        &self.original
    }

    pub(crate) fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    fn handles(&self, file: &SourceFile) -> bool {
        self.config.enables_language(&file.language) && self.engine.supports(file)
    }

    /// Format `ranges` of `file` with the engine, or hand the call to the
    /// original service when the engine is not enabled for the file
    ///
    /// An empty `ranges` slice formats the whole file.
    pub(crate) fn format_or_else<F>(
        &self,
        file: &SourceFile,
        ranges: &[TextRange],
        fallback: F,
    ) -> Result<String>
    where
        F: FnOnce(&dyn CodeStyleService) -> Result<String>,
    {
        if !self.handles(file) {
            trace!(
                path = %file.path.display(),
                language = %file.language,
                "Engine not enabled for file, using original service"
            );
            return fallback(self.original.as_ref());
        }
        for range in ranges {
            file.check_range(*range)?;
        }
        self.engine.format(file, ranges)
    }

    /// Format an explicit set of ranges; an empty set leaves the text alone
    pub(crate) fn format_ranges_or_else<F>(
        &self,
        file: &SourceFile,
        ranges: &[TextRange],
        fallback: F,
    ) -> Result<String>
    where
        F: FnOnce(&dyn CodeStyleService) -> Result<String>,
    {
        if ranges.is_empty() && self.handles(file) {
            return Ok(file.text.clone());
        }
        self.format_or_else(file, ranges, fallback)
    }
}
