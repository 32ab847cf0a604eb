//! # Formatter Switchboard - Provider Implementations
//!
//! User-selectable implementations of the switchboard ports. Override
//! variants and engines register themselves in the linkme slices declared
//! by `fsb-application`; linking this crate is enough to make them
//! resolvable.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Override | `CodeStyleOverride` | Legacy, ChangedRanges |
//! | Engine | `FormattingEngine` | Null, Whitespace |
//! | Registry | `ServiceRegistry` | InMemory |

// Re-export fsb-domain types commonly used with providers
pub use fsb_domain::error::{Error, Result};
pub use fsb_domain::ports::{CodeStyleOverride, CodeStyleService, FormattingEngine};

/// Provider-specific constants
pub mod constants;

/// Formatting engine implementations
pub mod engine;

/// Override variant implementations
pub mod overrides;

/// Service registry implementations
pub mod registry;

pub use engine::{NullFormattingEngine, WhitespaceFormattingEngine};
pub use overrides::{ChangedRangesOverride, LegacyOverride};
pub use registry::InMemoryServiceRegistry;
