//! Legacy override variant
//!
//! For hosts without the changed-ranges API. "Reformat changed code" is
//! left to the original service.

use super::engine_delegate::EngineDelegate;
use super::forward_host_operations;
use crate::constants::LEGACY_PRIORITY;
use fsb_domain::error::Result;
use fsb_domain::ports::{CodeStyleOverride, CodeStyleService, OverrideVariant, StyleOperation};
use fsb_domain::value_objects::{ChangedRanges, FormatterConfig, SourceFile, TextRange};
use std::sync::Arc;

/// Override intercepting whole-file, single-range and multi-range reformatting
#[derive(Debug)]
pub struct LegacyOverride {
    delegate: EngineDelegate,
}

impl LegacyOverride {
    /// Build the override around `original`
    ///
    /// # Errors
    /// `Error::UnsupportedCapability` if the configured engine is unknown.
    pub fn new(original: Arc<dyn CodeStyleService>, config: &FormatterConfig) -> Result<Self> {
        Ok(Self {
            delegate: EngineDelegate::new(OverrideVariant::Legacy, original, config)?,
        })
    }

    /// Config snapshot taken at install time
    pub fn config(&self) -> &FormatterConfig {
        self.delegate.config()
    }
}

impl CodeStyleService for LegacyOverride {
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
        self.delegate
            .original()
            .reformat_changed_ranges(file, changes)
    }

    forward_host_operations!();
}

impl CodeStyleOverride for LegacyOverride {
    fn variant(&self) -> OverrideVariant {
        OverrideVariant::Legacy
    }

    fn original(&self) -> &Arc<dyn CodeStyleService> {
        self.delegate.original()
    }

    fn overrides(&self, operation: StyleOperation) -> bool {
        matches!(
            operation,
            StyleOperation::Reformat | StyleOperation::ReformatRange | StyleOperation::ReformatText
        )
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use fsb_application::ports::registry::{FORMATTER_OVERRIDES, FormatterOverrideEntry};

fn legacy_override_factory(
    original: Arc<dyn CodeStyleService>,
    config: &FormatterConfig,
) -> Result<Arc<dyn CodeStyleOverride>> {
    Ok(Arc::new(LegacyOverride::new(original, config)?))
}

#[linkme::distributed_slice(FORMATTER_OVERRIDES)]
static LEGACY_OVERRIDE: FormatterOverrideEntry = FormatterOverrideEntry {
    variant: OverrideVariant::Legacy,
    description: "Legacy override (whole file and range reformatting)",
    requires_symbol: None,
    priority: LEGACY_PRIORITY,
    factory: legacy_override_factory,
};
