//! Code Style Capability Interface
//!
//! The operation set every service registered in the host's code style slot
//! must support. The host's native implementation, the alternate-engine
//! overrides and the switchboard proxy all implement [`CodeStyleService`].
//!
//! ## Routing
//!
//! ```text
//! host consumer → CodeStyleProxy ─┬─ formatting subset ──→ CodeStyleOverride
//!                                 └─ everything else ────→ original service
//! ```

use crate::error::Result;
use crate::value_objects::{ChangedRanges, SourceFile, TextRange};
use std::fmt;
use std::sync::Arc;

/// Tag for each operation of [`CodeStyleService`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleOperation {
    /// [`CodeStyleService::service_name`]
    ServiceName,
    /// [`CodeStyleService::reformat`]
    Reformat,
    /// [`CodeStyleService::reformat_range`]
    ReformatRange,
    /// [`CodeStyleService::reformat_text`]
    ReformatText,
    /// [`CodeStyleService::reformat_changed_ranges`]
    ReformatChangedRanges,
    /// [`CodeStyleService::adjust_line_indent`]
    AdjustLineIndent,
    /// [`CodeStyleService::line_indent`]
    LineIndent,
    /// [`CodeStyleService::optimize_imports`]
    OptimizeImports,
    /// [`CodeStyleService::is_sequential_processing_allowed`]
    SequentialProcessing,
}

impl StyleOperation {
    /// Every operation of the capability interface
    pub const ALL: [StyleOperation; 9] = [
        Self::ServiceName,
        Self::Reformat,
        Self::ReformatRange,
        Self::ReformatText,
        Self::ReformatChangedRanges,
        Self::AdjustLineIndent,
        Self::LineIndent,
        Self::OptimizeImports,
        Self::SequentialProcessing,
    ];

    /// True for operations an override is allowed to intercept
    pub fn is_formatting(self) -> bool {
        matches!(
            self,
            Self::Reformat | Self::ReformatRange | Self::ReformatText | Self::ReformatChangedRanges
        )
    }
}

/// The host's code style capability interface
pub trait CodeStyleService: Send + Sync + fmt::Debug {
    /// Name used to identify the implementation in logs and conflicts
    fn service_name(&self) -> &str;

    /// Reformat the whole file
    fn reformat(&self, file: &SourceFile) -> Result<String>;

    /// Reformat a single range
    fn reformat_range(&self, file: &SourceFile, range: TextRange) -> Result<String>;

    /// Reformat several ranges at once
    fn reformat_text(&self, file: &SourceFile, ranges: &[TextRange]) -> Result<String>;

    /// Reformat only what the user changed (newer host API)
    fn reformat_changed_ranges(&self, file: &SourceFile, changes: &ChangedRanges)
    -> Result<String>;

    /// Fix the indentation of the line containing `offset`, returning the new caret offset
    fn adjust_line_indent(&self, file: &SourceFile, offset: usize) -> Result<usize>;

    /// Indentation the line containing `offset` should have
    fn line_indent(&self, file: &SourceFile, offset: usize) -> Option<String>;

    /// Remove unused and sort imports
    fn optimize_imports(&self, file: &SourceFile) -> Result<String>;

    /// Whether the host may format several files sequentially in one batch
    fn is_sequential_processing_allowed(&self) -> bool;
}

/// Closed set of override implementations, one per host API generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideVariant {
    /// Hosts without the changed-ranges API
    Legacy,
    /// Hosts exposing the changed-ranges API
    ChangedRanges,
}

impl OverrideVariant {
    /// Stable name used in registries and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::ChangedRanges => "changed-ranges",
        }
    }
}

impl fmt::Display for OverrideVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternate-engine adapter consulted by the proxy for formatting operations
///
/// An override is a complete [`CodeStyleService`]; [`Self::overrides`] names
/// the operations it implements itself, and the proxy only routes those here.
pub trait CodeStyleOverride: CodeStyleService {
    /// Which generation of the override this is
    fn variant(&self) -> OverrideVariant;

    /// The service this override was built around
    fn original(&self) -> &Arc<dyn CodeStyleService>;

    /// True if the override explicitly implements `operation`
    fn overrides(&self, operation: StyleOperation) -> bool;
}
