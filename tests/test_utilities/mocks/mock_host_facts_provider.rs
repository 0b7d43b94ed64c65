use node_flag_audit::flag_audit::domain::{HostMemory, Platform};
use node_flag_audit::prelude::*;

const GIB: u64 = 1024 * 1024 * 1024;

/// Mock HostFactsProvider returning fixed facts, or failing
pub struct MockHostFactsProvider {
    facts: Option<HostFacts>,
}

#[allow(dead_code)]
impl MockHostFactsProvider {
    /// Linux x86_64 host with the given CPU count and memory
    pub fn linux(cpu_count: usize, total_gib: u64, free_gib: u64) -> Self {
        Self {
            facts: Some(HostFacts {
                cpu_count,
                cpu_model: "Mock CPU @ 3.00GHz".to_string(),
                cpu_speed_mhz: 3000,
                platform: Platform::Linux,
                arch: "x86_64".to_string(),
                memory: Some(HostMemory {
                    total_bytes: total_gib * GIB,
                    free_bytes: free_gib * GIB,
                }),
            }),
        }
    }

    /// Host whose facts cannot be collected
    pub fn failing() -> Self {
        Self { facts: None }
    }
}

impl HostFactsProvider for MockHostFactsProvider {
    fn collect(&self) -> Result<HostFacts> {
        self.facts
            .clone()
            .ok_or_else(|| anyhow::anyhow!("mock host facts unavailable"))
    }
}
