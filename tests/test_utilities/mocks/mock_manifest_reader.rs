use node_flag_audit::prelude::*;
use std::path::Path;

/// Mock ManifestReader serving an in-memory package.json
pub struct MockManifestReader {
    manifest: PackageManifest,
}

#[allow(dead_code)]
impl MockManifestReader {
    pub fn new(scripts: &[(&str, &str)]) -> Self {
        Self {
            manifest: PackageManifest {
                name: Some("mock-app".to_string()),
                version: Some("1.0.0".to_string()),
                scripts: Scripts::from_pairs(scripts.iter().copied()),
                dependencies: Vec::new(),
            },
        }
    }

    pub fn with_dependency(mut self, name: &str, version_range: &str) -> Self {
        self.manifest
            .dependencies
            .push(Dependency::new(name, version_range));
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _project_path: &Path) -> Result<PackageManifest> {
        Ok(self.manifest.clone())
    }
}
