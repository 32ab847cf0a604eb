//! Changed-ranges override variant
//!
//! For hosts exposing `ChangedRangesInfo`: "reformat changed code" formats
//! the inserted and changed ranges with the engine.

use super::engine_delegate::EngineDelegate;
use super::forward_host_operations;
use crate::constants::CHANGED_RANGES_PRIORITY;
use fsb_domain::constants::CHANGED_RANGES_SYMBOL;
use fsb_domain::error::Result;
use fsb_domain::ports::{CodeStyleOverride, CodeStyleService, OverrideVariant, StyleOperation};
use fsb_domain::value_objects::{ChangedRanges, FormatterConfig, SourceFile, TextRange};
use std::sync::Arc;

/// Override that also handles the changed-ranges API
#[derive(Debug)]
pub struct ChangedRangesOverride {
    delegate: EngineDelegate,
}

impl ChangedRangesOverride {
    /// Build the override around `original`
    ///
    /// # Errors
    /// `Error::UnsupportedCapability` if the configured engine is unknown.
    pub fn new(original: Arc<dyn CodeStyleService>, config: &FormatterConfig) -> Result<Self> {
        Ok(Self {
            delegate: EngineDelegate::new(OverrideVariant::ChangedRanges, original, config)?,
        })
    }

    /// Config snapshot taken at install time
    pub fn config(&self) -> &FormatterConfig {
        self.delegate.config()
    }
}

impl CodeStyleService for ChangedRangesOverride {
    fn reformat(&self, file: &SourceFile) -> Result<String> {
        self.delegate
            .format_or_else(file, &[], |original| original.reformat(file))
    }

    fn reformat_range(&self, file: &SourceFile, range: TextRange) -> Result<String> {
        self.delegate
            .format_or_else(file, &[range], |original| original.reformat_range(file, range))
    }

    fn reformat_text(&self, file: &SourceFile, ranges: &[TextRange]) -> Result<String> {
        self.delegate
            .format_ranges_or_else(file, ranges, |original| original.reformat_text(file, ranges))
    }

    fn reformat_changed_ranges(
        &self,
        file: &SourceFile,
        changes: &ChangedRanges,
    ) -> Result<String> {
        let ranges = changes.all();
        self.delegate.format_ranges_or_else(file, &ranges, |original| {
            original.reformat_changed_ranges(file, changes)
        })
    }

    forward_host_operations!();
}

impl CodeStyleOverride for ChangedRangesOverride {
    fn variant(&self) -> OverrideVariant {
        OverrideVariant::ChangedRanges
    }

    fn original(&self) -> &Arc<dyn CodeStyleService> {
        self.delegate.original()
    }

    fn overrides(&self, operation: StyleOperation) -> bool {
        operation.is_formatting()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use fsb_application::ports::registry::{FORMATTER_OVERRIDES, FormatterOverrideEntry};

fn changed_ranges_override_factory(
    original: Arc<dyn CodeStyleService>,
    config: &FormatterConfig,
) -> Result<Arc<dyn CodeStyleOverride>> {
    Ok(Arc::new(ChangedRangesOverride::new(original, config)?))
}

#[linkme::distributed_slice(FORMATTER_OVERRIDES)]
static CHANGED_RANGES_OVERRIDE: FormatterOverrideEntry = FormatterOverrideEntry {
    variant: OverrideVariant::ChangedRanges,
    description: "Changed-ranges override (adds reformat of changed code)",
    requires_symbol: Some(CHANGED_RANGES_SYMBOL),
    priority: CHANGED_RANGES_PRIORITY,
    factory: changed_ranges_override_factory,
};
