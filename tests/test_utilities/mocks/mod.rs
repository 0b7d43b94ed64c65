/// Mock implementations for testing
mod mock_host_facts_provider;
mod mock_manifest_reader;
mod mock_package_registry;
mod mock_progress_reporter;
mod mock_vulnerability_repository;

pub use mock_host_facts_provider::MockHostFactsProvider;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_package_registry::MockPackageRegistry;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vulnerability_repository::MockVulnerabilityRepository;
