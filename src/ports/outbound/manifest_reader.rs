use crate::flag_audit::domain::{Dependency, Scripts};
use crate::shared::Result;
use std::path::Path;

/// The parts of a `package.json` the audit consumes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Declared scripts in file order
    pub scripts: Scripts,
    /// Runtime dependencies in file order
    pub dependencies: Vec<Dependency>,
}

/// ManifestReader port for loading the project manifest
pub trait ManifestReader: Send + Sync {
    /// Reads `package.json` from the project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing package.json
    ///
    /// # Errors
    /// Returns an error if:
    /// - package.json does not exist
    /// - The file fails the read safety checks
    /// - The content is not valid JSON or has an unexpected shape
    fn read_manifest(&self, project_path: &Path) -> Result<PackageManifest>;
}
