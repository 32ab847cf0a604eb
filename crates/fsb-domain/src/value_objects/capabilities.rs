//! Host capability descriptor

use crate::ports::CapabilityProbe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Description of the running host's API surface
///
/// Resolved once at startup (usually from configuration) and injected into
/// the capability selector. Symbol presence is what selection relies on; the
/// version string is only reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    /// Host API version tag, informational
    pub api_version: Option<String>,
    /// Names of host API types known to exist
    pub symbols: BTreeSet<String>,
}

impl HostCapabilities {
    /// Descriptor with no known symbols
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version tag
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Declare a host symbol as present
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.insert(symbol.into());
        self
    }
}

impl CapabilityProbe for HostCapabilities {
    fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}
