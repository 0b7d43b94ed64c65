use crate::flag_audit::domain::{HostFacts, HostMemory, Platform};
use crate::ports::outbound::HostFactsProvider;
use crate::shared::Result;
use sysinfo::System;

/// SysinfoHostFacts adapter for reading host resources via sysinfo
///
/// Memory is reported as unavailable (rather than zero) when the platform
/// gives no figure, so the profile stays conservative.
pub struct SysinfoHostFacts;

impl SysinfoHostFacts {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SysinfoHostFacts {
    fn default() -> Self {
        Self::new()
    }
}

/// Free memory is what can be allocated without swapping, page cache
/// included, not the kernel's untouched `MemFree`.
fn host_memory(total_bytes: u64, available_bytes: u64) -> Option<HostMemory> {
    match total_bytes {
        0 => None,
        total_bytes => Some(HostMemory {
            total_bytes,
            free_bytes: available_bytes.min(total_bytes),
        }),
    }
}

impl HostFactsProvider for SysinfoHostFacts {
    fn collect(&self) -> Result<HostFacts> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            anyhow::bail!("sysinfo does not support this operating system");
        }

        let mut sys = System::new_all();
        sys.refresh_all();

        let cpus = sys.cpus();
        let cpu_count = match cpus.len() {
            0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
            n => n,
        };
        let (cpu_model, cpu_speed_mhz) = cpus
            .first()
            .map(|cpu| (cpu.brand().trim().to_string(), cpu.frequency()))
            .unwrap_or_else(|| ("unknown".to_string(), 0));

        let memory = host_memory(sys.total_memory(), sys.available_memory());

        let facts = HostFacts {
            cpu_count,
            cpu_model,
            cpu_speed_mhz,
            platform: Platform::from_os(std::env::consts::OS),
            arch: std::env::consts::ARCH.to_string(),
            memory,
        };

        tracing::info!(
            cpu_count = facts.cpu_count,
            cpu_model = %facts.cpu_model,
            platform = %facts.platform,
            memory_total = facts.memory.map(|m| m.total_bytes),
            "Collected host facts"
        );

        Ok(facts)
    }
}
