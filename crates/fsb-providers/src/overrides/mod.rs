//! Override variant implementations
//!
//! One override per host API generation. Both format through the engine
//! named in the config and fall back to the original service for files the
//! engine is not enabled for.
//!
//! | Variant | Intercepts | Requires |
//! |---------|------------|----------|
//! | `legacy` | reformat, reformat_range, reformat_text | nothing |
//! | `changed-ranges` | the above + reformat_changed_ranges | `ChangedRangesInfo` |

/// Implements the non-formatting part of `CodeStyleService` by forwarding
/// to `self.delegate.original()`.
macro_rules! forward_host_operations {
    () => {
        fn service_name(&self) -> &str {
            self.delegate.name()
        }

        fn adjust_line_indent(
            &self,
            file: &fsb_domain::value_objects::SourceFile,
            offset: usize,
        ) -> fsb_domain::error::Result<usize> {
            self.delegate.original().adjust_line_indent(file, offset)
        }

        fn line_indent(
            &self,
            file: &fsb_domain::value_objects::SourceFile,
            offset: usize,
        ) -> Option<String> {
            self.delegate.original().line_indent(file, offset)
        }

        fn optimize_imports(
            &self,
            file: &fsb_domain::value_objects::SourceFile,
        ) -> fsb_domain::error::Result<String> {
            self.delegate.original().optimize_imports(file)
        }

        fn is_sequential_processing_allowed(&self) -> bool {
            self.delegate.original().is_sequential_processing_allowed()
        }
    };
}

pub(crate) use forward_host_operations;

mod engine_delegate;

pub mod changed_ranges;
pub mod legacy;

pub use changed_ranges::ChangedRangesOverride;
pub use legacy::LegacyOverride;
