use crate::shared::Result;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Maximum length for a flag name (security limit)
const MAX_FLAG_NAME_LENGTH: usize = 128;

/// NewType wrapper for a canonical flag name such as `--max-old-space-size`
///
/// The name never contains a value: for `--secure-heap=8192` the name is
/// `--secure-heap`. Two flags are the same flag iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlagName(String);

impl FlagName {
    pub fn new(name: String) -> Result<Self> {
        if !name.starts_with("--") || name.len() <= 2 {
            anyhow::bail!("Flag name must start with '--' and be non-empty: {:?}", name);
        }

        if name.len() > MAX_FLAG_NAME_LENGTH {
            anyhow::bail!(
                "Flag name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_FLAG_NAME_LENGTH
            );
        }

        if name.contains('=') || name.chars().any(char::is_whitespace) {
            anyhow::bail!("Flag name must not contain '=' or whitespace: {:?}", name);
        }

        Ok(Self(name))
    }

    /// Extracts the flag name from a command-line token.
    ///
    /// Returns `None` for tokens that are not `--` flags. The value part after
    /// the first `=` is discarded.
    pub fn from_token(token: &str) -> Option<Self> {
        if !token.starts_with("--") {
            return None;
        }
        let name = token.split('=').next().unwrap_or(token);
        Self::new(name.to_string()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl std::fmt::Display for FlagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the `--` tokens of a launch command, in order and with values.
pub fn flag_tokens(command: &str) -> Vec<String> {
    command
        .split_whitespace()
        .filter(|token| token.starts_with("--"))
        .map(str::to_string)
        .collect()
}

/// Returns the set of flag names declared by a launch command.
pub fn declared_names(command: &str) -> BTreeSet<FlagName> {
    command
        .split_whitespace()
        .filter_map(FlagName::from_token)
        .collect()
}

/// Impact tier of a flag if it is left out of a launch command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Importance {
    Critical,
    Important,
    Optional,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Critical => "CRITICAL",
            Importance::Important => "IMPORTANT",
            Importance::Optional => "OPTIONAL",
        }
    }

    pub fn all() -> [Importance; 3] {
        [
            Importance::Critical,
            Importance::Important,
            Importance::Optional,
        ]
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recommended flag with its optional value and catalog metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    name: FlagName,
    value: Option<String>,
    description: String,
    importance: Importance,
}

impl FlagSpec {
    pub fn new(
        name: FlagName,
        value: Option<String>,
        description: String,
        importance: Importance,
    ) -> Self {
        Self {
            name,
            value,
            description,
            importance,
        }
    }

    pub fn name(&self) -> &FlagName {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    /// Renders the flag as it appears on a command line (`name` or `name=value`)
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("{}={}", self.name, value),
            None => self.name.to_string(),
        }
    }
}

impl Serialize for FlagSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FlagSpec", 5)?;
        state.serialize_field("flag", &self.render())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("importance", &self.importance)?;
        state.end()
    }
}

/// Ordered collection of flags without duplicate names
///
/// Insertion order is preserved. Inserting a flag whose name is already
/// present is a no-op, so the first occurrence always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagSet {
    flags: Vec<FlagSpec>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a flag, returning `false` when its name is already present
    pub fn insert(&mut self, flag: FlagSpec) -> bool {
        if self.contains(flag.name()) {
            return false;
        }
        self.flags.push(flag);
        true
    }

    pub fn contains(&self, name: &FlagName) -> bool {
        self.flags.iter().any(|f| f.name() == name)
    }

    /// Returns a new set holding `self` followed by the flags of `other`
    /// whose names are not yet present.
    pub fn union(&self, other: &FlagSet) -> FlagSet {
        let mut merged = self.clone();
        for flag in other.iter() {
            merged.insert(flag.clone());
        }
        merged
    }

    /// Returns a new set without the flags whose names appear in `names`
    pub fn without_names(&self, names: &BTreeSet<FlagName>) -> FlagSet {
        self.iter()
            .filter(|f| !names.contains(f.name()))
            .cloned()
            .collect()
    }

    pub fn names(&self) -> BTreeSet<FlagName> {
        self.flags.iter().map(|f| f.name().clone()).collect()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.flags.iter().map(FlagSpec::render).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlagSpec> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<FlagSpec> for FlagSet {
    fn from_iter<I: IntoIterator<Item = FlagSpec>>(iter: I) -> Self {
        let mut set = FlagSet::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a FlagSpec;
    type IntoIter = std::slice::Iter<'a, FlagSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}
