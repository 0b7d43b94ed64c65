use crate::flag_audit::domain::{
    DevelopmentFlags, FlagName, FlagSet, FlagSpec, ProductionFlags, ResourceProfile,
    SynthesizedFlags,
};
use crate::flag_audit::policies::FlagCatalog;
use std::collections::BTreeSet;

/// Values derived from the resource profile that parameterize the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedLimits {
    pub memory_limit_mb: u64,
    pub thread_pool_size: usize,
    pub heap_snapshot_threshold: u32,
}

impl DerivedLimits {
    /// Returns `None` when the profile carries no memory figures
    pub fn from_profile(profile: &ResourceProfile) -> Option<Self> {
        let memory = profile.memory()?;
        Some(Self {
            memory_limit_mb: memory.total_gib() * 3 * 1024 / 4,
            thread_pool_size: profile.cpu_count() * 2,
            heap_snapshot_threshold: if profile.is_high_performance() { 5 } else { 3 },
        })
    }
}

type Candidate = (&'static str, Option<String>);

fn plain(name: &'static str) -> Candidate {
    (name, None)
}

fn valued(name: &'static str, value: impl ToString) -> Candidate {
    (name, Some(value.to_string()))
}

fn base_candidates(limits: &DerivedLimits) -> Vec<Candidate> {
    vec![
        valued("--max-old-space-size", limits.memory_limit_mb),
        plain("--zero-fill-buffers"),
        plain("--tls-min-v1.2"),
        plain("--no-warnings"),
        valued("--disable-proto", "throw"),
        valued("--unhandled-rejections", "strict"),
        valued("--v8-pool-size", limits.thread_pool_size),
        plain("--trace-sync-io"),
        plain("--force-node-api-uncaught-exceptions-policy"),
    ]
}

fn security_candidates() -> Vec<Candidate> {
    vec![
        plain("--force-context-aware"),
        plain("--no-experimental-fetch"),
        plain("--no-experimental-repl-await"),
        plain("--report-on-fatalerror"),
        plain("--report-uncaught-exception"),
        valued("--secure-heap", 8192),
        valued("--secure-heap-min", 4096),
    ]
}

fn performance_candidates(limits: &DerivedLimits) -> Vec<Candidate> {
    vec![
        valued("--max-http-header-size", 16384),
        valued("--heapsnapshot-near-heap-limit", limits.heap_snapshot_threshold),
        plain("--track-heap-objects"),
        plain("--optimize-for-size"),
    ]
}

fn production_candidates() -> Vec<Candidate> {
    vec![
        plain("--no-deprecation"),
        plain("--abort-on-uncaught-exception"),
        plain("--report-on-signal"),
        valued("--report-signal", "SIGTERM"),
        valued("--title", "production-api"),
        plain("--preserve-symlinks"),
    ]
}

fn high_performance_candidates() -> Vec<Candidate> {
    vec![
        plain("--interpreted-frames-native-stack"),
        valued("--max-semi-space-size", 128),
        valued("--stack-trace-limit", 100),
        valued("--trace-event-categories", "node.async_hooks,node.fs.sync,v8"),
    ]
}

fn debug_candidates() -> Vec<Candidate> {
    vec![
        plain("--inspect"),
        plain("--trace-warnings"),
        plain("--enable-source-maps"),
        plain("--cpu-prof"),
        valued("--cpu-prof-dir", "./profiles"),
        plain("--heap-prof"),
        valued("--heap-prof-dir", "./profiles"),
    ]
}

/// Turns candidates into a catalog-described set, dropping declared names
fn build_set(candidates: Vec<Candidate>, declared: &BTreeSet<FlagName>) -> FlagSet {
    candidates
        .into_iter()
        .filter_map(|(name, value)| {
            let name = FlagName::new(name.to_string()).ok()?;
            if declared.contains(&name) {
                return None;
            }
            let info = FlagCatalog::describe(name.as_str());
            Some(FlagSpec::new(
                name,
                value,
                info.description.to_string(),
                info.importance,
            ))
        })
        .collect()
}

/// FlagSynthesizer service for building environment-specific flag sets
///
/// Synthesis is a pure function of the profile: the same profile always
/// yields the same tree, in the same order.
pub struct FlagSynthesizer;

impl FlagSynthesizer {
    /// Synthesizes the full flag tree for a profile
    ///
    /// Every leaf excludes flags whose names any script already declares.
    /// When memory is unavailable every leaf is empty.
    pub fn synthesize(profile: &ResourceProfile) -> SynthesizedFlags {
        Self::synthesize_excluding(profile, profile.declared_flag_names())
    }

    /// Synthesizes the tree without removing declared names
    ///
    /// Scripts are measured against this tree, each filtered by its own flags.
    pub fn baseline(profile: &ResourceProfile) -> SynthesizedFlags {
        Self::synthesize_excluding(profile, &BTreeSet::new())
    }

    fn synthesize_excluding(
        profile: &ResourceProfile,
        declared: &BTreeSet<FlagName>,
    ) -> SynthesizedFlags {
        let Some(limits) = DerivedLimits::from_profile(profile) else {
            return SynthesizedFlags::empty();
        };

        let base = build_set(base_candidates(&limits), declared);
        let security = build_set(security_candidates(), declared);
        let performance = build_set(performance_candidates(&limits), declared);
        let production = build_set(production_candidates(), declared);
        let high_performance = build_set(high_performance_candidates(), declared);
        let debug = build_set(debug_candidates(), declared);

        let secure = base.union(&security).union(&performance).union(&production);

        SynthesizedFlags {
            development: DevelopmentFlags {
                recommended: base.union(&performance),
                debug,
                basic: base.clone(),
            },
            production: ProductionFlags {
                basic: base.union(&security),
                high_performance: secure.union(&high_performance),
                secure,
            },
        }
    }
}
