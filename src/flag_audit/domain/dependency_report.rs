use serde::Serialize;

/// Distance between a dependency's declared version and the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UpdateType {
    Major,
    Minor,
    Patch,
}

impl UpdateType {
    /// Compares the major and minor components of two dotted versions.
    ///
    /// Components that fail to parse count as zero, so exotic version
    /// strings degrade to `Patch` rather than erroring.
    pub fn classify(current: &str, latest: &str) -> Self {
        let (current_major, current_minor) = major_minor(current);
        let (latest_major, latest_minor) = major_minor(latest);

        if latest_major > current_major {
            UpdateType::Major
        } else if latest_minor > current_minor {
            UpdateType::Minor
        } else {
            UpdateType::Patch
        }
    }
}

impl std::fmt::Display for UpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateType::Major => write!(f, "MAJOR"),
            UpdateType::Minor => write!(f, "MINOR"),
            UpdateType::Patch => write!(f, "PATCH"),
        }
    }
}

fn major_minor(version: &str) -> (u64, u64) {
    let mut parts = version
        .split('.')
        .map(|p| p.trim().parse::<u64>().unwrap_or(0));
    (parts.next().unwrap_or(0), parts.next().unwrap_or(0))
}

/// Strips range operators from a manifest version (`^1.2.3` → `1.2.3`)
pub fn clean_version(range: &str) -> String {
    range
        .trim()
        .trim_start_matches(['^', '~', '=', '>', '<', 'v', ' '])
        .to_string()
}

/// A declared dependency taken from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version_range: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version_range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_range: version_range.into(),
        }
    }

    pub fn current_version(&self) -> String {
        clean_version(&self.version_range)
    }
}

/// A known advisory affecting a dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub id: String,
    pub summary: Option<String>,
    pub severity: Option<String>,
    pub fixed_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerableDependency {
    pub package: String,
    pub current_version: String,
    pub advisories: Vec<Advisory>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutdatedDependency {
    pub package: String,
    pub current_version: String,
    pub latest_version: String,
    pub update_type: UpdateType,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedLookup {
    pub package: String,
    pub error: String,
}

/// Findings of the dependency check
///
/// `checked` is `false` when the check did not run, so an empty report is
/// distinguishable from a clean one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub checked: bool,
    pub vulnerable: Vec<VulnerableDependency>,
    pub outdated: Vec<OutdatedDependency>,
    pub failed: Vec<FailedLookup>,
}

impl DependencyReport {
    pub fn not_checked() -> Self {
        Self::default()
    }

    pub fn advisory_count(&self) -> usize {
        self.vulnerable.iter().map(|v| v.advisories.len()).sum()
    }
}
