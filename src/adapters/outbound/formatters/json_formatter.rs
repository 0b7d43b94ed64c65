use crate::flag_audit::domain::AuditResult;
use crate::ports::outbound::AuditFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the whole audit result, keeping field order stable so the
/// output diffs cleanly between runs.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditFormatter for JsonFormatter {
    fn format(&self, result: &AuditResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
