//! Configuration file support for node-flag-audit.
//!
//! Provides YAML-based configuration through `node-flag-audit.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::flag_audit::domain::Environment;
use crate::shared::{AuditError, Result};

pub const CONFIG_FILENAME: &str = "node-flag-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub environment: Option<String>,
    pub format: Option<String>,
    pub check_dependencies: Option<bool>,
    /// Dependency names skipped by the dependency check
    pub ignore_packages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Validated view of a config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditConfig {
    pub environment: Option<Environment>,
    pub format: Option<OutputFormat>,
    pub check_dependencies: Option<bool>,
    pub ignore_packages: Vec<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<AuditConfig> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);
    validate_config(config, path)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<AuditConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration and convert it to typed values.
fn validate_config(config: ConfigFile, path: &Path) -> Result<AuditConfig> {
    let invalid = |details: String| AuditError::ConfigError {
        path: PathBuf::from(path),
        details,
    };

    let environment = config
        .environment
        .as_deref()
        .map(str::parse::<Environment>)
        .transpose()
        .map_err(invalid)?;

    let format = config
        .format
        .as_deref()
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(invalid)?;

    let ignore_packages = config.ignore_packages.unwrap_or_default();
    if let Some(i) = ignore_packages.iter().position(|p| p.trim().is_empty()) {
        return Err(invalid(format!("ignore_packages[{}] must not be empty", i)).into());
    }

    Ok(AuditConfig {
        environment,
        format,
        check_dependencies: config.check_dependencies,
        ignore_packages,
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Picks the target environment.
///
/// Precedence: `--env`, then the config file, then `NODE_ENV`, then
/// development.
pub fn resolve_environment(
    cli: Option<Environment>,
    config: Option<Environment>,
    node_env: Option<&str>,
) -> Environment {
    cli.or(config)
        .unwrap_or_else(|| Environment::from_node_env(node_env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
environment: production
format: markdown
check_dependencies: true
ignore_packages:
  - left-pad
  - "@types/node"
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.environment, Some(Environment::Production));
        assert_eq!(config.format, Some(OutputFormat::Markdown));
        assert_eq!(config.check_dependencies, Some(true));
        assert_eq!(config.ignore_packages, vec!["left-pad", "@types/node"]);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.environment, None);
        assert!(config.ignore_packages.is_empty());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_environment_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "environment: staging\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid configuration"));
        assert!(message.contains("staging"));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_empty_ignored_package_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "ignore_packages:\n  - \"  \"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_resolve_environment_precedence() {
        use Environment::*;

        assert_eq!(resolve_environment(Some(Production), Some(Development), None), Production);
        assert_eq!(resolve_environment(None, Some(Production), Some("development")), Production);
        assert_eq!(resolve_environment(None, None, Some("production")), Production);
        assert_eq!(resolve_environment(None, None, Some("test")), Development);
        assert_eq!(resolve_environment(None, None, None), Development);
    }
}
