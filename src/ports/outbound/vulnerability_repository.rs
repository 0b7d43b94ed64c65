use crate::flag_audit::domain::Advisory;
use crate::shared::Result;
use async_trait::async_trait;

/// VulnerabilityRepository port for querying known advisories
#[async_trait]
pub trait VulnerabilityRepository: Send + Sync {
    /// Returns the advisories affecting one version of a package
    ///
    /// An empty vector means the version has no known advisories.
    ///
    /// # Arguments
    /// * `package_name` - npm package name
    /// * `version` - Exact version (range operators already stripped)
    ///
    /// # Errors
    /// Returns an error if the network request fails or the response cannot
    /// be parsed.
    async fn advisories(&self, package_name: &str, version: &str) -> Result<Vec<Advisory>>;
}
