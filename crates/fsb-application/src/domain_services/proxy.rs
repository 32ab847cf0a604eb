//! Delegating Proxy
//!
//! [`CodeStyleProxy`] is what actually sits in the host's code style slot
//! while the alternate formatter is active. It implements the whole
//! capability interface: formatting operations the override explicitly
//! implements go to the override, everything else goes to the original
//! service untouched.
//!
//! The proxy is recognized through [`ServiceSlot::Switchboard`], never
//! through a method of the capability interface.

use crate::ports::host::ServiceSlot;
use fsb_domain::error::{Error, Result};
use fsb_domain::ports::{CodeStyleOverride, CodeStyleService, OverrideVariant, StyleOperation};
use fsb_domain::value_objects::{ChangedRanges, SourceFile, TextRange};
use std::sync::Arc;

/// Delegating wrapper registered in place of the host service
#[derive(Debug)]
pub struct CodeStyleProxy {
    original: Arc<dyn CodeStyleService>,
    overriding: Arc<dyn CodeStyleOverride>,
}

impl CodeStyleProxy {
    /// The wrapped host service
    pub fn original(&self) -> &Arc<dyn CodeStyleService> {
        &self.original
    }

    /// The override consulted for formatting operations
    pub fn overriding(&self) -> &Arc<dyn CodeStyleOverride> {
        &self.overriding
    }

    /// Variant of the installed override
    pub fn variant(&self) -> OverrideVariant {
        self.overriding.variant()
    }

    /// True if calls to `operation` reach the override
    pub fn routes_to_override(&self, operation: StyleOperation) -> bool {
        operation.is_formatting() && self.overriding.overrides(operation)
    }

    fn route(&self, operation: StyleOperation) -> &dyn CodeStyleService {
        if self.routes_to_override(operation) {
            self.overriding.as_ref()
        } else {
            self.original.as_ref()
        }
    }
}

impl CodeStyleService for CodeStyleProxy {
    fn service_name(&self) -> &str {
        self.route(StyleOperation::ServiceName).service_name()
    }

    fn reformat(&self, file: &SourceFile) -> Result<String> {
        self.route(StyleOperation::Reformat).reformat(file)
    }

    fn reformat_range(&self, file: &SourceFile, range: TextRange) -> Result<String> {
        self.route(StyleOperation::ReformatRange)
            .reformat_range(file, range)
    }

    fn reformat_text(&self, file: &SourceFile, ranges: &[TextRange]) -> Result<String> {
        self.route(StyleOperation::ReformatText)
            .reformat_text(file, ranges)
    }

    fn reformat_changed_ranges(
        &self,
        file: &SourceFile,
        changes: &ChangedRanges,
    ) -> Result<String> {
        self.route(StyleOperation::ReformatChangedRanges)
            .reformat_changed_ranges(file, changes)
    }

    fn adjust_line_indent(&self, file: &SourceFile, offset: usize) -> Result<usize> {
        self.route(StyleOperation::AdjustLineIndent)
            .adjust_line_indent(file, offset)
    }

    fn line_indent(&self, file: &SourceFile, offset: usize) -> Option<String> {
        self.route(StyleOperation::LineIndent)
            .line_indent(file, offset)
    }

    fn optimize_imports(&self, file: &SourceFile) -> Result<String> {
        self.route(StyleOperation::OptimizeImports)
            .optimize_imports(file)
    }

    fn is_sequential_processing_allowed(&self) -> bool {
        self.route(StyleOperation::SequentialProcessing)
            .is_sequential_processing_allowed()
    }
}

/// Builds [`CodeStyleProxy`] instances
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegatingProxyFactory;

impl DelegatingProxyFactory {
    /// Wrap the host service in `original` with `overriding`
    ///
    /// # Errors
    /// `Error::ConstructionFailure` if `original` is not the host's own
    /// service, or if `overriding` was built around a different service.
    pub fn wrap(
        original: &ServiceSlot,
        overriding: Arc<dyn CodeStyleOverride>,
    ) -> Result<CodeStyleProxy> {
        let original = match original {
            ServiceSlot::Native(service) => Arc::clone(service),
            ServiceSlot::Switchboard(_) => {
                return Err(Error::construction_failure(
                    "refusing to wrap a switchboard proxy in another proxy",
                ));
            }
            ServiceSlot::Foreign { owner, .. } => {
                return Err(Error::construction_failure(format!(
                    "cannot wrap service owned by '{owner}'"
                )));
            }
        };

        if !Arc::ptr_eq(overriding.original(), &original) {
            return Err(Error::construction_failure(format!(
                "override '{}' was built around '{}', not '{}'",
                overriding.variant(),
                overriding.original().service_name(),
                original.service_name()
            )));
        }

        Ok(CodeStyleProxy {
            original,
            overriding,
        })
    }
}
