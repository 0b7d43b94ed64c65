use super::flag::{declared_names, FlagName};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Conventional script names the analyzer knows how to target
pub const START_SCRIPT: &str = "start";
pub const DEBUG_SCRIPT: &str = "debug";

/// A single declared launch script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    name: String,
    command: String,
}

impl Script {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn flag_names(&self) -> BTreeSet<FlagName> {
        declared_names(&self.command)
    }
}

/// Declared launch scripts in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripts {
    entries: Vec<Script>,
}

impl Scripts {
    pub fn new(entries: Vec<Script>) -> Self {
        Self { entries }
    }

    /// Builds from `(name, command)` pairs; later duplicates of a name replace
    /// the command but keep the original position.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut entries: Vec<Script> = Vec::new();
        for (name, command) in pairs {
            let script = Script::new(name, command);
            match entries.iter_mut().find(|s| s.name == script.name) {
                Some(existing) => existing.command = script.command,
                None => entries.push(script),
            }
        }
        Self { entries }
    }

    /// Union of flag names across every script
    pub fn declared_flag_names(&self) -> BTreeSet<FlagName> {
        self.entries
            .iter()
            .flat_map(|script| script.flag_names())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Script> {
        self.entries.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Script> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Scripts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for script in &self.entries {
            map.serialize_entry(&script.name, &script.command)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_preserves_order() {
        let scripts = Scripts::from_pairs(vec![
            ("start", "node app.js"),
            ("debug", "node --inspect app.js"),
            ("test", "jest"),
        ]);
        let names: Vec<&str> = scripts.iter().map(Script::name).collect();
        assert_eq!(names, vec!["start", "debug", "test"]);
    }

    #[test]
    fn test_from_pairs_duplicate_name_replaces_command() {
        let scripts = Scripts::from_pairs(vec![("start", "node a.js"), ("start", "node b.js")]);
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts.get("start").unwrap().command(), "node b.js");
    }

    #[test]
    fn test_declared_flag_names_is_union() {
        let scripts = Scripts::from_pairs(vec![
            ("start", "node --max-old-space-size=2048 app.js"),
            ("debug", "node --inspect --max-old-space-size=512 app.js"),
        ]);
        let names: Vec<String> = scripts
            .declared_flag_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["--inspect", "--max-old-space-size"]);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let scripts = Scripts::from_pairs(vec![("start", "node app.js"), ("build", "tsc")]);
        let json = serde_json::to_string(&scripts).unwrap();
        assert_eq!(json, r#"{"start":"node app.js","build":"tsc"}"#);
    }
}
