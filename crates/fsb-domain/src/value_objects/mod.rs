//! Value Objects
//!
//! Immutable values passed across the switchboard boundary.

pub mod capabilities;
pub mod formatter;
pub mod session;
pub mod text;

pub use capabilities::HostCapabilities;
pub use formatter::{FormatterConfig, FormatterKind};
pub use session::{Session, SessionId};
pub use text::{ChangedRanges, SourceFile, TextRange};
