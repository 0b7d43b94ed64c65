use crate::flag_audit::domain::{HostFacts, MemoryProfile, ResourceProfile, Scripts};

/// ResourceProfiler service for deriving the machine-resource profile
///
/// Pure business logic: the host facts are collected by an adapter and
/// handed in, so profiling never touches the operating system and never
/// fails.
pub struct ResourceProfiler;

impl ResourceProfiler {
    /// Builds the profile for one audit run
    ///
    /// # Arguments
    /// * `host` - Facts reported by the host, or `None` when collection failed
    /// * `scripts` - Declared scripts whose flag names are already in use
    ///
    /// # Returns
    /// A ResourceProfile. Without host facts this is the conservative
    /// single-CPU profile with unavailable memory.
    pub fn profile(host: Option<&HostFacts>, scripts: &Scripts) -> ResourceProfile {
        let declared = scripts.declared_flag_names();

        match host {
            Some(facts) => ResourceProfile::new(
                facts.cpu_count,
                facts.cpu_model.clone(),
                facts.cpu_speed_mhz,
                facts.arch.clone(),
                facts.platform,
                facts.memory.map(MemoryProfile::from_bytes),
                declared,
            ),
            None => ResourceProfile::unavailable(declared),
        }
    }
}
