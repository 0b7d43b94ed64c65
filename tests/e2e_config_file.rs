/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a test project directory with a package.json.
fn create_test_project(dir: &Path) {
    let package_json = r#"{
  "name": "config-test",
  "version": "0.1.0",
  "scripts": {
    "start": "node index.js"
  }
}
"#;
    fs::write(dir.join("package.json"), package_json).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn audit_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("node-flag-audit");
    cmd.env_remove("NODE_ENV")
        .env_remove("NODE_FLAG_AUDIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Auto-discovery
// ============================================================================

mod auto_discovery {
    use super::*;

    #[test]
    fn test_discovered_config_sets_format_and_environment() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("node-flag-audit.config.yml"),
            "environment: production\nformat: json\n",
        );

        let output = audit_cmd()
            .args(["-p", dir.path().to_str().unwrap()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["environment"], "production");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());

        let output = audit_cmd()
            .args(["-p", dir.path().to_str().unwrap(), "--no-color"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Environment: development"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit --config
// ============================================================================

mod explicit_config {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: markdown\n");

        let output = audit_cmd()
            .args([
                "-p",
                dir.path().to_str().unwrap(),
                "-c",
                config_path.to_str().unwrap(),
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Node.js Launch Flag Audit"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());

        audit_cmd()
            .args([
                "-p",
                dir.path().to_str().unwrap(),
                "-c",
                "/nonexistent/node-flag-audit.config.yml",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// CLI precedence and validation
// ============================================================================

mod merging {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("node-flag-audit.config.yml"),
            "environment: production\nformat: markdown\n",
        );

        let output = audit_cmd()
            .args([
                "-p",
                dir.path().to_str().unwrap(),
                "-e",
                "development",
                "-f",
                "json",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["environment"], "development");
    }

    #[test]
    fn test_config_beats_node_env() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("node-flag-audit.config.yml"),
            "environment: development\nformat: json\n",
        );

        let output = audit_cmd()
            .env("NODE_ENV", "production")
            .args(["-p", dir.path().to_str().unwrap()])
            .output()
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["environment"], "development");
    }

    #[test]
    fn test_invalid_config_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("node-flag-audit.config.yml"),
            "environment: staging\n",
        );

        audit_cmd()
            .args(["-p", dir.path().to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("node-flag-audit.config.yml"),
            "format: json\nseverity_threshold: HIGH\n",
        );

        audit_cmd()
            .args(["-p", dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'severity_threshold'",
            ));
    }
}
