/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (operating system, file system,
/// network registries, console).
pub mod formatter;
pub mod host_facts_provider;
pub mod manifest_reader;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod vulnerability_repository;

pub use formatter::AuditFormatter;
pub use host_facts_provider::HostFactsProvider;
pub use manifest_reader::{ManifestReader, PackageManifest};
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use vulnerability_repository::VulnerabilityRepository;
