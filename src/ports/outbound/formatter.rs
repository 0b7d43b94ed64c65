use crate::flag_audit::domain::AuditResult;
use crate::shared::Result;

/// AuditFormatter port for rendering an audit result
///
/// Implementations produce a complete document (text, JSON, Markdown)
/// that an OutputPresenter writes out unchanged.
pub trait AuditFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, result: &AuditResult) -> Result<String>;
}
