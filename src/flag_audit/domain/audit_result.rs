use super::{
    DependencyReport, Environment, Priority, Recommendation, ResourceProfile, Scripts,
    SynthesizedFlags,
};
use serde::Serialize;

/// Immutable outcome of one audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    pub audit_id: String,
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub environment: Environment,
    pub resource_profile: ResourceProfile,
    pub flags: SynthesizedFlags,
    pub scripts: Scripts,
    pub recommendations: Vec<Recommendation>,
    pub dependencies: DependencyReport,
}

impl AuditResult {
    pub fn recommendations_with_priority(
        &self,
        priority: Priority,
    ) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.priority == priority)
    }

    /// True when something a CI gate should fail on was found
    pub fn has_blocking_findings(&self) -> bool {
        self.recommendations_with_priority(Priority::High)
            .next()
            .is_some()
            || !self.dependencies.vulnerable.is_empty()
    }
}
