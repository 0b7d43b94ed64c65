use crate::flag_audit::domain::{
    Advisory, Dependency, DependencyReport, FailedLookup, OutdatedDependency, UpdateType,
    VulnerableDependency,
};
use crate::ports::outbound::{PackageRegistry, ProgressReporter, VulnerabilityRepository};
use futures::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Result of looking up a single dependency
#[derive(Debug, Default)]
struct LookupOutcome {
    vulnerable: Option<VulnerableDependency>,
    outdated: Option<OutdatedDependency>,
    failed: Vec<FailedLookup>,
}

/// CheckDependenciesUseCase - Best-effort outdated/vulnerable dependency check
///
/// Every dependency is looked up concurrently. A failed lookup never aborts
/// the check: it is logged and recorded in `DependencyReport::failed`.
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
/// * `V` - VulnerabilityRepository implementation
pub struct CheckDependenciesUseCase<R, V> {
    registry: R,
    vulnerability_repository: V,
}

impl<R, V> CheckDependenciesUseCase<R, V>
where
    R: PackageRegistry,
    V: VulnerabilityRepository,
{
    pub fn new(registry: R, vulnerability_repository: V) -> Self {
        Self {
            registry,
            vulnerability_repository,
        }
    }

    /// Checks every dependency not listed in `ignore_packages`
    ///
    /// Findings keep the order of `dependencies`.
    pub async fn execute<P: ProgressReporter>(
        &self,
        dependencies: &[Dependency],
        ignore_packages: &[String],
        progress: &P,
    ) -> DependencyReport {
        let selected: Vec<&Dependency> = dependencies
            .iter()
            .filter(|d| !ignore_packages.iter().any(|ignored| ignored == &d.name))
            .collect();
        let skipped = dependencies.len() - selected.len();
        if skipped > 0 {
            tracing::info!(skipped, "Ignoring dependencies listed in config");
        }

        let total = selected.len();
        let completed = AtomicUsize::new(0);

        let lookups = selected.into_iter().map(|dependency| {
            let completed = &completed;
            async move {
                let outcome = self.check_one(dependency).await;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                progress.report_progress(done, total, Some(&dependency.name));
                outcome
            }
        });

        let mut report = DependencyReport {
            checked: true,
            ..DependencyReport::default()
        };
        for outcome in join_all(lookups).await {
            report.vulnerable.extend(outcome.vulnerable);
            report.outdated.extend(outcome.outdated);
            report.failed.extend(outcome.failed);
        }
        report
    }

    async fn check_one(&self, dependency: &Dependency) -> LookupOutcome {
        let current_version = dependency.current_version();
        let (latest, advisories) = futures::join!(
            self.registry.latest_version(&dependency.name),
            self.vulnerability_repository
                .advisories(&dependency.name, &current_version),
        );

        let mut outcome = LookupOutcome::default();

        match latest {
            Ok(latest) if latest != current_version => {
                outcome.outdated = Some(OutdatedDependency {
                    package: dependency.name.clone(),
                    update_type: UpdateType::classify(&current_version, &latest),
                    recommendation: format!("Update to {} recommended", latest),
                    current_version: current_version.clone(),
                    latest_version: latest,
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(package = %dependency.name, error = %e, "Registry lookup failed");
                outcome.failed.push(FailedLookup {
                    package: dependency.name.clone(),
                    error: format!("registry: {}", e),
                });
            }
        }

        match advisories {
            Ok(advisories) if !advisories.is_empty() => {
                outcome.vulnerable = Some(VulnerableDependency {
                    package: dependency.name.clone(),
                    recommendation: fix_recommendation(&dependency.name, &advisories),
                    current_version,
                    advisories,
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(package = %dependency.name, error = %e, "Advisory lookup failed");
                outcome.failed.push(FailedLookup {
                    package: dependency.name.clone(),
                    error: format!("advisories: {}", e),
                });
            }
        }

        outcome
    }
}

/// Names the first fixed version any advisory reports, if there is one
fn fix_recommendation(package: &str, advisories: &[Advisory]) -> String {
    match advisories.iter().find_map(|a| a.fixed_version.as_deref()) {
        Some(fixed) => format!("Update {} to {} or later", package, fixed),
        None => format!("No fixed release known; review the advisories for {}", package),
    }
}
