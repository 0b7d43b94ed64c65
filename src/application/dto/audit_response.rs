use crate::flag_audit::domain::AuditResult;

/// AuditResponse - Internal response DTO from the audit use case
#[derive(Debug, Clone)]
pub struct AuditResponse {
    pub result: AuditResult,
}

impl AuditResponse {
    pub fn new(result: AuditResult) -> Self {
        Self { result }
    }

    /// True when `--fail-on-findings` should turn the run into exit code 1
    pub fn has_blocking_findings(&self) -> bool {
        self.result.has_blocking_findings()
    }
}
