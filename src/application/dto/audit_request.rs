use crate::flag_audit::domain::Environment;
use std::path::PathBuf;

/// AuditRequest - Internal request DTO for the audit use case
///
/// Already resolved from CLI arguments, config file and `NODE_ENV`.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Project directory containing package.json
    pub project_path: PathBuf,
    pub environment: Environment,
    /// Whether to query registries for outdated and vulnerable dependencies
    pub check_dependencies: bool,
    /// Dependency names excluded from the dependency check
    pub ignore_packages: Vec<String>,
}

impl AuditRequest {
    pub fn new(project_path: PathBuf, environment: Environment) -> Self {
        Self {
            project_path,
            environment,
            check_dependencies: false,
            ignore_packages: Vec::new(),
        }
    }

    pub fn with_dependency_check(mut self, ignore_packages: Vec<String>) -> Self {
        self.check_dependencies = true;
        self.ignore_packages = ignore_packages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_skips_dependency_check() {
        let request = AuditRequest::new(PathBuf::from("."), Environment::Production);
        assert!(!request.check_dependencies);
        assert!(request.ignore_packages.is_empty());
    }

    #[test]
    fn test_with_dependency_check() {
        let request = AuditRequest::new(PathBuf::from("."), Environment::Development)
            .with_dependency_check(vec!["left-pad".to_string()]);
        assert!(request.check_dependencies);
        assert_eq!(request.ignore_packages, vec!["left-pad"]);
    }
}
