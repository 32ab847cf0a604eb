//! Formatting Engine Port
//!
//! Boundary to the alternate formatting engine. How text is actually
//! reformatted is the engine's business; the switchboard only routes calls.

use crate::error::Result;
use crate::value_objects::{SourceFile, TextRange};

/// An alternate formatting engine, configured at construction time
pub trait FormattingEngine: Send + Sync + std::fmt::Debug {
    /// Registered engine name
    fn engine_name(&self) -> &str;

    /// True if the engine can handle this file at all
    fn supports(&self, _file: &SourceFile) -> bool {
        true
    }

    /// Format the given ranges of `file` and return the full new text
    ///
    /// An empty `ranges` slice means the whole file.
    fn format(&self, file: &SourceFile, ranges: &[TextRange]) -> Result<String>;
}
