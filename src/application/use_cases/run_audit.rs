use crate::application::dto::{AuditRequest, AuditResponse};
use crate::application::use_cases::CheckDependenciesUseCase;
use crate::flag_audit::domain::{DependencyReport, HostFacts};
use crate::flag_audit::services::{
    FlagSynthesizer, ReportAssembler, ResourceProfiler, ScriptAnalyzer,
};
use crate::ports::inbound::AuditPort;
use crate::ports::outbound::{
    HostFactsProvider, ManifestReader, PackageManifest, PackageRegistry, ProgressReporter,
    VulnerabilityRepository,
};
use crate::shared::{AuditError, Result};
use async_trait::async_trait;

/// RunAuditUseCase - Core use case for one flag audit
///
/// Orchestrates the pipeline using generic dependency injection for all
/// infrastructure dependencies:
/// manifest → host facts → profile → flags → recommendations →
/// (dependency check) → result.
///
/// # Type Parameters
/// * `H` - HostFactsProvider implementation
/// * `M` - ManifestReader implementation
/// * `R` - PackageRegistry implementation (dependency check)
/// * `V` - VulnerabilityRepository implementation (dependency check)
/// * `P` - ProgressReporter implementation
pub struct RunAuditUseCase<H, M, R, V, P> {
    host_facts_provider: H,
    manifest_reader: M,
    dependency_check: Option<CheckDependenciesUseCase<R, V>>,
    progress_reporter: P,
    analyzer: ScriptAnalyzer,
}

impl<H, M, R, V, P> RunAuditUseCase<H, M, R, V, P>
where
    H: HostFactsProvider,
    M: ManifestReader,
    R: PackageRegistry,
    V: VulnerabilityRepository,
    P: ProgressReporter,
{
    /// Creates a new RunAuditUseCase with injected dependencies
    ///
    /// `dependency_check` may be `None` when the run never checks
    /// dependencies; requests asking for the check then get an unchecked
    /// report and a warning.
    pub fn new(
        host_facts_provider: H,
        manifest_reader: M,
        dependency_check: Option<CheckDependenciesUseCase<R, V>>,
        progress_reporter: P,
    ) -> Self {
        Self {
            host_facts_provider,
            manifest_reader,
            dependency_check,
            progress_reporter,
            analyzer: ScriptAnalyzer::default(),
        }
    }

    /// Executes the audit
    ///
    /// # Errors
    /// Returns an error only when the project path is invalid or the
    /// manifest cannot be loaded. Everything after that degrades instead of
    /// failing.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Load the manifest
        let manifest = self.load_manifest(&request)?;

        // Step 2: Profile the host
        let host_facts = self.collect_host_facts();
        let profile = ResourceProfiler::profile(host_facts.as_ref(), &manifest.scripts);

        // Step 3: Synthesize flags and analyze scripts
        let flags = FlagSynthesizer::synthesize(&profile);
        let recommendations =
            self.analyzer.analyze(&manifest.scripts, request.environment, &profile);
        tracing::debug!(
            recommendations = recommendations.len(),
            "Script analysis finished"
        );

        // Step 4: Dependency check if requested
        let dependencies = self.check_dependencies_if_requested(&request, &manifest).await;

        // Step 5: Assemble
        let result = ReportAssembler::assemble(
            request.environment,
            profile,
            flags,
            manifest.scripts,
            recommendations,
            dependencies,
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Audit complete: {} recommendation(s)",
            result.recommendations.len()
        ));

        Ok(AuditResponse::new(result))
    }

    fn load_manifest(&self, request: &AuditRequest) -> Result<PackageManifest> {
        validate_project_path(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "📖 Loading package.json from: {}",
            request.project_path.display()
        ));

        let manifest = self.manifest_reader.read_manifest(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} script(s), {} dependency(ies)",
            manifest.scripts.len(),
            manifest.dependencies.len()
        ));
        tracing::info!(
            project = manifest.name.as_deref().unwrap_or("<unnamed>"),
            environment = %request.environment,
            "Manifest loaded"
        );

        Ok(manifest)
    }

    fn collect_host_facts(&self) -> Option<HostFacts> {
        match self.host_facts_provider.collect() {
            Ok(facts) => Some(facts),
            Err(e) => {
                tracing::warn!(error = %e, "Host facts unavailable; using a conservative profile");
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: could not read host resources ({}). No flags will be recommended.",
                    e
                ));
                None
            }
        }
    }

    async fn check_dependencies_if_requested(
        &self,
        request: &AuditRequest,
        manifest: &PackageManifest,
    ) -> DependencyReport {
        if !request.check_dependencies {
            return DependencyReport::not_checked();
        }

        let Some(checker) = &self.dependency_check else {
            tracing::warn!("Dependency check requested but no registry clients are configured");
            return DependencyReport::not_checked();
        };

        self.progress_reporter.report(&format!(
            "🔍 Checking {} dependency(ies) against the npm registry and OSV...",
            manifest.dependencies.len()
        ));

        let report = checker
            .execute(
                &manifest.dependencies,
                &request.ignore_packages,
                &self.progress_reporter,
            )
            .await;

        if !report.failed.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} lookup(s) failed; results may be incomplete",
                report.failed.len()
            ));
        }

        report
    }
}

#[async_trait]
impl<H, M, R, V, P> AuditPort for RunAuditUseCase<H, M, R, V, P>
where
    H: HostFactsProvider,
    M: ManifestReader,
    R: PackageRegistry,
    V: VulnerabilityRepository,
    P: ProgressReporter,
{
    async fn run_audit(&self, request: AuditRequest) -> Result<AuditResponse> {
        self.execute(request).await
    }
}

fn validate_project_path(path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
