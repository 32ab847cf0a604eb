//! Host capability probing port

/// Narrow view of the host API surface used for variant selection
///
/// Absence of a symbol is a normal answer, never an error.
pub trait CapabilityProbe: Send + Sync + std::fmt::Debug {
    /// True if the host exposes the named API type
    fn has_symbol(&self, symbol: &str) -> bool;

    /// Host API version tag, if known
    fn api_version(&self) -> Option<&str> {
        None
    }
}
