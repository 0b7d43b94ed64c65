use crate::flag_audit::domain::Importance;
use crate::flag_audit::domain::Importance::{Critical, Important, Optional};

/// Description and impact tier of a known flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagInfo {
    pub description: &'static str,
    pub importance: Importance,
}

const FALLBACK: FlagInfo = FlagInfo {
    description: "no description available",
    importance: Importance::Optional,
};

/// (flag name, description, importance)
const ENTRIES: &[(&str, &str, Importance)] = &[
    // Memory and runtime hardening
    ("--use-strict", "Enables JavaScript strict mode for safer code", Important),
    ("--max-old-space-size", "Sets the maximum V8 old-generation heap size in MB", Important),
    ("--zero-fill-buffers", "Zero-fills every newly allocated Buffer", Critical),
    ("--tls-min-v1.2", "Requires TLS 1.2 or newer for outgoing and incoming connections", Critical),
    ("--no-warnings", "Silences process warnings for cleaner logs", Optional),
    (
        "--disable-proto",
        "Disables Object.prototype.__proto__ to block prototype pollution",
        Important,
    ),
    ("--trace-warnings", "Prints a full stack trace for process warnings", Optional),
    ("--unhandled-rejections", "Sets the policy for unhandled promise rejections", Critical),
    ("--v8-pool-size", "Sets the size of the V8 background thread pool", Important),
    ("--trace-sync-io", "Warns whenever synchronous I/O blocks the event loop", Important),
    (
        "--force-node-api-uncaught-exceptions-policy",
        "Routes uncaught exceptions from Node-API callbacks through the process handler",
        Critical,
    ),
    // Security
    (
        "--force-context-aware",
        "Refuses to load native addons that are not context-aware",
        Important,
    ),
    ("--no-experimental-fetch", "Disables the experimental global fetch API", Important),
    ("--no-experimental-repl-await", "Disables top-level await in the REPL", Optional),
    ("--report-on-fatalerror", "Writes a diagnostic report on fatal errors", Critical),
    ("--report-uncaught-exception", "Writes a diagnostic report on uncaught exceptions", Critical),
    ("--secure-heap", "Enables the OpenSSL secure heap with the given size", Critical),
    ("--secure-heap-min", "Sets the minimum allocation size of the secure heap", Important),
    // Performance
    ("--max-http-header-size", "Caps the size of HTTP headers in bytes", Important),
    (
        "--heapsnapshot-near-heap-limit",
        "Writes heap snapshots when close to the heap limit",
        Important,
    ),
    ("--track-heap-objects", "Tracks heap object allocations for snapshots", Optional),
    ("--optimize-for-size", "Optimizes generated code for size over speed", Important),
    ("--max-semi-space-size", "Sets the size of a young-generation semi-space in MB", Important),
    // Production
    ("--no-deprecation", "Silences deprecation warnings", Optional),
    ("--abort-on-uncaught-exception", "Aborts with a core dump on uncaught exceptions", Critical),
    (
        "--report-on-signal",
        "Writes a diagnostic report when the report signal is received",
        Important,
    ),
    ("--report-signal", "Sets the signal that triggers a diagnostic report", Optional),
    ("--title", "Sets the process title shown in process listings", Optional),
    ("--preserve-symlinks", "Keeps symbolic link paths when resolving modules", Optional),
    (
        "--interpreted-frames-native-stack",
        "Shows interpreted frames in native stack traces",
        Optional,
    ),
    ("--stack-trace-limit", "Sets the maximum number of stack trace frames", Optional),
    ("--trace-event-categories", "Enables trace events for the listed categories", Optional),
    // Debugging and profiling
    ("--inspect", "Activates the inspector for debugging", Optional),
    ("--inspect-brk", "Activates the inspector and breaks before user code starts", Optional),
    ("--enable-source-maps", "Maps stack traces back to original sources", Optional),
    ("--prof", "Generates a V8 profiler output", Optional),
    ("--cpu-prof", "Starts the V8 CPU profiler on launch", Optional),
    ("--cpu-prof-dir", "Sets the directory for CPU profiles", Optional),
    ("--heap-prof", "Starts the V8 heap profiler on launch", Optional),
    ("--heap-prof-dir", "Sets the directory for heap profiles", Optional),
];

/// Static registry of known launch flags
///
/// Lookups never fail: unknown names resolve to a fallback entry with
/// `OPTIONAL` importance.
pub struct FlagCatalog;

impl FlagCatalog {
    pub fn describe(flag_name: &str) -> FlagInfo {
        ENTRIES
            .iter()
            .find(|(name, _, _)| *name == flag_name)
            .map(|(_, description, importance)| FlagInfo {
                description: *description,
                importance: *importance,
            })
            .unwrap_or(FALLBACK)
    }

    #[cfg(test)]
    pub(crate) fn is_known(flag_name: &str) -> bool {
        ENTRIES.iter().any(|(name, _, _)| *name == flag_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_describe_known_flag() {
        let info = FlagCatalog::describe("--zero-fill-buffers");
        assert_eq!(info.importance, Importance::Critical);
        assert!(info.description.contains("Buffer"));
    }

    #[test]
    fn test_describe_unknown_flag_falls_back() {
        let info = FlagCatalog::describe("--not-a-real-flag");
        assert_eq!(info.description, "no description available");
        assert_eq!(info.importance, Importance::Optional);
        assert!(!FlagCatalog::is_known("--not-a-real-flag"));
    }

    #[test]
    fn test_full_native_api_policy_name_is_critical() {
        let info = FlagCatalog::describe("--force-node-api-uncaught-exceptions-policy");
        assert_eq!(info.importance, Importance::Critical);
    }

    #[test]
    fn test_catalog_size() {
        assert!(ENTRIES.len() >= 25);
    }

    #[test]
    fn test_catalog_has_no_duplicate_names() {
        let names: HashSet<&str> = ENTRIES.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names.len(), ENTRIES.len());
    }

    #[test]
    fn test_catalog_names_carry_no_values() {
        for (name, _, _) in ENTRIES {
            assert!(name.starts_with("--"), "{}", name);
            assert!(!name.contains('='), "{}", name);
        }
    }
}
