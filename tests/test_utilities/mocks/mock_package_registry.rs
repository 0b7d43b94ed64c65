use async_trait::async_trait;
use node_flag_audit::prelude::*;
use std::collections::HashMap;

/// Mock PackageRegistry with fixed latest versions
///
/// Unknown packages fail the lookup, like a 404 from the registry.
#[derive(Default)]
pub struct MockPackageRegistry {
    latest: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(mut self, package: &str, version: &str) -> Self {
        self.latest.insert(package.to_string(), version.to_string());
        self
    }
}

#[async_trait]
impl PackageRegistry for MockPackageRegistry {
    async fn latest_version(&self, package_name: &str) -> Result<String> {
        self.latest
            .get(package_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("npm registry returned status code 404 Not Found"))
    }
}
