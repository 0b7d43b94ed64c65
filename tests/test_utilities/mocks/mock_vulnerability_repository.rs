use async_trait::async_trait;
use node_flag_audit::flag_audit::domain::Advisory;
use node_flag_audit::prelude::*;
use std::collections::HashMap;

/// Mock VulnerabilityRepository with per-package advisories
#[derive(Default)]
pub struct MockVulnerabilityRepository {
    advisories: HashMap<String, Vec<Advisory>>,
}

#[allow(dead_code)]
impl MockVulnerabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advisory(
        mut self,
        package: &str,
        id: &str,
        severity: &str,
        fixed: Option<&str>,
    ) -> Self {
        self.advisories
            .entry(package.to_string())
            .or_default()
            .push(Advisory {
                id: id.to_string(),
                summary: Some(format!("Advisory {} for {}", id, package)),
                severity: Some(severity.to_string()),
                fixed_version: fixed.map(str::to_string),
            });
        self
    }
}

#[async_trait]
impl VulnerabilityRepository for MockVulnerabilityRepository {
    async fn advisories(&self, package_name: &str, _version: &str) -> Result<Vec<Advisory>> {
        Ok(self
            .advisories
            .get(package_name)
            .cloned()
            .unwrap_or_default())
    }
}
