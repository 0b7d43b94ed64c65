use crate::flag_audit::domain::{
    AuditResult, DependencyReport, Environment, Priority, Recommendation, ResourceProfile,
    Scripts, SynthesizedFlags,
};
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "node-flag-audit";

/// ReportAssembler service for building the final audit result
///
/// This is the only core component that logs: it summarises what the run
/// found once the result is complete.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Assembles the audit result with a capture-time timestamp and audit id
    ///
    /// # Arguments
    /// * `environment` - Environment the audit targeted
    /// * `profile` - Resource profile of the host
    /// * `flags` - Synthesized flag tree
    /// * `scripts` - Declared scripts
    /// * `recommendations` - Output of the script analysis
    /// * `dependencies` - Dependency check findings (`not_checked` when skipped)
    pub fn assemble(
        environment: Environment,
        profile: ResourceProfile,
        flags: SynthesizedFlags,
        scripts: Scripts,
        recommendations: Vec<Recommendation>,
        dependencies: DependencyReport,
    ) -> AuditResult {
        let result = AuditResult {
            audit_id: format!("urn:uuid:{}", Uuid::new_v4()),
            timestamp: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            environment,
            resource_profile: profile,
            flags,
            scripts,
            recommendations,
            dependencies,
        };

        Self::log_summary(&result);
        result
    }

    fn log_summary(result: &AuditResult) {
        let count = |p: Priority| result.recommendations_with_priority(p).count();

        tracing::info!(
            audit_id = %result.audit_id,
            environment = %result.environment,
            cpus = result.resource_profile.cpu_count(),
            memory_available = result.resource_profile.is_available(),
            high_performance = result.resource_profile.is_high_performance(),
            "Resource profile"
        );
        tracing::info!(
            high = count(Priority::High),
            medium = count(Priority::Medium),
            low = count(Priority::Low),
            "Recommendations assembled"
        );
        if result.dependencies.checked {
            tracing::info!(
                vulnerable = result.dependencies.vulnerable.len(),
                outdated = result.dependencies.outdated.len(),
                failed = result.dependencies.failed.len(),
                "Dependency check summary"
            );
        }
        if !result.resource_profile.is_available() {
            tracing::warn!("Host memory unavailable; no flags were synthesized");
        }
    }
}
