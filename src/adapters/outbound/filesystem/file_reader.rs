use crate::flag_audit::domain::{Dependency, Scripts};
use crate::ports::outbound::{ManifestReader, PackageManifest};
use crate::shared::security::ensure_readable_file;
use crate::shared::{AuditError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Shape of package.json as far as the audit cares
///
/// Maps are `serde_json::Map`, which keeps file order with the
/// `preserve_order` feature.
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    scripts: Map<String, Value>,
    #[serde(default)]
    dependencies: Map<String, Value>,
}

/// Keeps string entries, dropping (and logging) anything else
fn string_entries<'a>(
    section: &'static str,
    map: &'a Map<String, Value>,
) -> impl Iterator<Item = (&'a String, &'a str)> + 'a {
    map.iter().filter_map(move |(key, value)| match value.as_str() {
        Some(text) => Some((key, text)),
        None => {
            tracing::warn!(section, key = %key, "Ignoring non-string entry in package.json");
            None
        }
    })
}

/// FileSystemReader adapter for reading package.json
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the symlink, file-type and size checks
    fn safe_read_file(&self, path: &Path, label: &str) -> Result<String> {
        ensure_readable_file(path, label)?;
        let content = fs::read_to_string(path).map_err(|e| AuditError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{}: {}", label, e),
        })?;
        Ok(content)
    }

    fn parse(content: &str, path: &Path) -> Result<PackageManifest> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| AuditError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let scripts = Scripts::from_pairs(
            string_entries("scripts", &raw.scripts).map(|(name, command)| (name.clone(), command)),
        );
        let dependencies = string_entries("dependencies", &raw.dependencies)
            .map(|(name, range)| Dependency::new(name.clone(), range))
            .collect();

        Ok(PackageManifest {
            name: raw.name,
            version: raw.version,
            scripts,
            dependencies,
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<PackageManifest> {
        let manifest_path = project_path.join(MANIFEST_FILE_NAME);

        if !manifest_path.exists() && manifest_path.symlink_metadata().is_err() {
            return Err(AuditError::ManifestNotFound {
                path: manifest_path,
            }
            .into());
        }

        let content = self.safe_read_file(&manifest_path, MANIFEST_FILE_NAME)?;
        Self::parse(&content, &manifest_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), content).unwrap();
        temp_dir
    }

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = write_manifest(
            r#"{
                "name": "api",
                "version": "1.0.0",
                "scripts": {
                    "start": "node --zero-fill-buffers app.js",
                    "debug": "node --inspect app.js",
                    "test": "jest"
                },
                "dependencies": {
                    "express": "^4.18.2",
                    "mongoose": "~7.0.0"
                }
            }"#,
        );

        let manifest = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("api"));
        let names: Vec<&str> = manifest.scripts.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["start", "debug", "test"]);
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.dependencies[0].name, "express");
        assert_eq!(manifest.dependencies[1].current_version(), "7.0.0");
    }

    #[test]
    fn test_script_order_is_file_order() {
        let temp_dir = write_manifest(
            r#"{"scripts": {"z": "node z.js", "a": "node a.js", "start": "node app.js"}}"#,
        );
        let manifest = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap();
        let names: Vec<&str> = manifest.scripts.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["z", "a", "start"]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let temp_dir = write_manifest(r#"{"name": "bare"}"#);
        let manifest = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap();
        assert!(manifest.scripts.is_empty());
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_non_string_entries_are_skipped() {
        let temp_dir = write_manifest(r#"{"scripts": {"start": "node app.js", "odd": 42}}"#);
        let manifest = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap();
        assert_eq!(manifest.scripts.len(), 1);
    }

    #[test]
    fn test_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("package.json not found"));
    }

    #[test]
    fn test_manifest_invalid_json() {
        let temp_dir = write_manifest("{ not json");
        let err = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse package.json"));
    }

    #[test]
    fn test_manifest_with_invalid_utf8_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), [0xff, 0xfe, 0x7b]).unwrap();

        let err = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::FileReadError { .. })
        ));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_manifest_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("package.json")).unwrap();
        let err = FileSystemReader::new()
            .read_manifest(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }
}
