pub mod audit_result;
pub mod dependency_report;
pub mod environment;
pub mod flag;
pub mod recommendation;
pub mod resource_profile;
pub mod scripts;
pub mod synthesized_flags;

pub use audit_result::AuditResult;
pub use dependency_report::{
    Advisory, Dependency, DependencyReport, FailedLookup, OutdatedDependency, UpdateType,
    VulnerableDependency,
};
pub use environment::Environment;
pub use flag::{declared_names, flag_tokens, FlagName, FlagSet, FlagSpec, Importance};
pub use recommendation::{Category, Priority, Recommendation};
pub use resource_profile::{HostFacts, HostMemory, MemoryProfile, Platform, ResourceProfile};
pub use scripts::{Script, Scripts, DEBUG_SCRIPT, START_SCRIPT};
pub use synthesized_flags::{DevelopmentFlags, ProductionFlags, SynthesizedFlags};
