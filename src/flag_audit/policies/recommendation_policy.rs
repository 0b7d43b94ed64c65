use crate::flag_audit::domain::{Category, Priority, ResourceProfile, DEBUG_SCRIPT};

/// Priority and reason text attached to each recommendation
pub struct RecommendationPolicy;

impl RecommendationPolicy {
    /// Determines how urgent a category of missing flags is.
    ///
    /// The `debug` script is never urgent, whatever its flags are about.
    pub fn priority(category: Category, script_name: &str) -> Priority {
        if script_name == DEBUG_SCRIPT {
            return Priority::Low;
        }

        match category {
            Category::Security => Priority::High,
            Category::Performance | Category::Production => Priority::Medium,
            Category::Debug => Priority::Low,
        }
    }

    pub fn reason(category: Category, script_name: &str, profile: &ResourceProfile) -> String {
        if script_name == DEBUG_SCRIPT {
            return "Recommended debugging flags for development".to_string();
        }

        match category {
            Category::Security => {
                "Recommended security flags to protect your application".to_string()
            }
            Category::Performance => {
                let memory = profile
                    .memory()
                    .map(|m| m.total_gib().to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                format!(
                    "Recommended optimizations for your system ({} CPUs, {} GiB)",
                    profile.cpu_count(),
                    memory
                )
            }
            Category::Debug => "Debugging tools for development".to_string(),
            Category::Production => {
                "Recommended configuration for the production environment".to_string()
            }
        }
    }
}
