//! Override Variant Registry

use fsb_domain::error::Result;
use fsb_domain::ports::{CodeStyleOverride, CodeStyleService, OverrideVariant};
use fsb_domain::value_objects::FormatterConfig;
use std::sync::Arc;

/// Builds an override around the original service with the given config
pub type OverrideFactory =
    fn(Arc<dyn CodeStyleService>, &FormatterConfig) -> Result<Arc<dyn CodeStyleOverride>>;

/// Registry entry for override variants
///
/// Each variant states which host symbol it needs; the capability selector
/// picks the highest-priority variant the running host satisfies.
pub struct FormatterOverrideEntry {
    /// Variant built by the factory
    pub variant: OverrideVariant,
    /// Human-readable description
    pub description: &'static str,
    /// Host API type that must exist for this variant, if any
    pub requires_symbol: Option<&'static str>,
    /// Preference among compatible variants; higher wins
    pub priority: u32,
    /// Factory function to create the override
    pub factory: OverrideFactory,
}

impl std::fmt::Debug for FormatterOverrideEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterOverrideEntry")
            .field("variant", &self.variant)
            .field("requires_symbol", &self.requires_symbol)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

#[linkme::distributed_slice]
pub static FORMATTER_OVERRIDES: [FormatterOverrideEntry] = [..];

/// List all registered override variants as (name, description)
pub fn list_formatter_overrides() -> Vec<(&'static str, &'static str)> {
    FORMATTER_OVERRIDES
        .iter()
        .map(|e| (e.variant.as_str(), e.description))
        .collect()
}
