//! # Formatter Switchboard - Domain Layer
//!
//! Core types shared by every layer: the host's code style capability
//! interface, the override and engine ports, value objects and errors.
//!
//! Nothing here touches a registry or performs I/O.

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port traits (capability interface, overrides, engines, probes)
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    CapabilityProbe, CodeStyleOverride, CodeStyleService, FormattingEngine, OverrideVariant,
    StyleOperation,
};
pub use value_objects::{
    ChangedRanges, FormatterConfig, FormatterKind, HostCapabilities, Session, SessionId,
    SourceFile, TextRange,
};
