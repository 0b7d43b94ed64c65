use crate::shared::Result;
use async_trait::async_trait;

/// PackageRegistry port for looking up published package versions
///
/// All methods are async so lookups for many dependencies can run
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Returns the version tagged `latest` for a package
    ///
    /// # Errors
    /// Returns an error if the request fails, the package is unknown or the
    /// response carries no `latest` tag.
    async fn latest_version(&self, package_name: &str) -> Result<String>;
}
