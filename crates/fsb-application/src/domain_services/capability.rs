//! Capability Selector
//!
//! Picks the override variant compatible with the running host by probing
//! for host API symbols. Selection is a pure function of the registered
//! entries and the injected probe.

use crate::ports::registry::{FORMATTER_OVERRIDES, FormatterOverrideEntry};
use fsb_domain::error::{Error, Result};
use fsb_domain::ports::{CapabilityProbe, CodeStyleOverride, CodeStyleService};
use fsb_domain::value_objects::FormatterConfig;
use std::sync::Arc;
use tracing::debug;

/// Highest-priority entry whose required symbol (if any) the host exposes
pub fn select_entry<'a>(
    entries: &'a [FormatterOverrideEntry],
    probe: &dyn CapabilityProbe,
) -> Option<&'a FormatterOverrideEntry> {
    entries
        .iter()
        .filter(|entry| entry.requires_symbol.is_none_or(|symbol| probe.has_symbol(symbol)))
        .max_by_key(|entry| entry.priority)
}

/// Chooses and builds the override variant for the running host
#[derive(Debug, Clone)]
pub struct CapabilitySelector {
    probe: Arc<dyn CapabilityProbe>,
    entries: &'static [FormatterOverrideEntry],
}

impl CapabilitySelector {
    /// Selector over every variant registered in [`FORMATTER_OVERRIDES`]
    pub fn new(probe: Arc<dyn CapabilityProbe>) -> Self {
        Self::with_entries(probe, FORMATTER_OVERRIDES.static_slice())
    }

    /// Selector over an explicit set of variants
    pub fn with_entries(
        probe: Arc<dyn CapabilityProbe>,
        entries: &'static [FormatterOverrideEntry],
    ) -> Self {
        Self { probe, entries }
    }

    /// The host capability probe
    pub fn probe(&self) -> &dyn CapabilityProbe {
        self.probe.as_ref()
    }

    /// Variants this selector chooses from
    pub fn entries(&self) -> &'static [FormatterOverrideEntry] {
        self.entries
    }

    /// True if the host satisfies the entry's symbol requirement
    pub fn is_compatible(&self, entry: &FormatterOverrideEntry) -> bool {
        entry
            .requires_symbol
            .is_none_or(|symbol| self.probe.has_symbol(symbol))
    }

    /// The entry [`Self::select`] would build from
    pub fn compatible_entry(&self) -> Option<&'static FormatterOverrideEntry> {
        select_entry(self.entries, self.probe.as_ref())
    }

    /// Build the override compatible with the host around `original`
    ///
    /// # Errors
    /// * `Error::UnsupportedCapability` - no registered variant fits the host
    /// * `Error::ConstructionFailure` - the factory built a different variant
    pub fn select(
        &self,
        original: Arc<dyn CodeStyleService>,
        config: &FormatterConfig,
    ) -> Result<Arc<dyn CodeStyleOverride>> {
        let entry = self.compatible_entry().ok_or_else(|| {
            Error::unsupported_capability(format!(
                "no override variant is compatible with host API {} ({} registered)",
                self.probe.api_version().unwrap_or("unknown"),
                self.entries.len()
            ))
        })?;

        debug!(
            variant = %entry.variant,
            api_version = self.probe.api_version().unwrap_or("unknown"),
            "Selected code style override variant"
        );

        let overriding = (entry.factory)(original, config)?;
        if overriding.variant() != entry.variant {
            return Err(Error::construction_failure(format!(
                "factory for '{}' built a '{}' override",
                entry.variant,
                overriding.variant()
            )));
        }
        Ok(overriding)
    }
}
