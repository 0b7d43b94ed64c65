use super::flag::FlagName;
use serde::Serialize;
use std::collections::BTreeSet;

const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl Platform {
    /// Maps an OS identifier (`std::env::consts::OS` style or Node's
    /// `os.platform()` style) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::Darwin,
            "windows" | "win32" => Platform::Windows,
            _ => Platform::Other,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
            Platform::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Raw memory figures reported by the host, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostMemory {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Raw facts collected from the host operating system
///
/// `memory` is `None` when the host could not report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    pub cpu_count: usize,
    pub cpu_model: String,
    pub cpu_speed_mhz: u64,
    pub platform: Platform,
    pub arch: String,
    pub memory: Option<HostMemory>,
}

/// Memory figures in whole GiB (floored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryProfile {
    total_gib: u64,
    free_gib: u64,
}

impl MemoryProfile {
    /// Free memory is clamped so that `free_gib <= total_gib` always holds.
    pub fn new(total_gib: u64, free_gib: u64) -> Self {
        Self {
            total_gib,
            free_gib: free_gib.min(total_gib),
        }
    }

    pub fn from_bytes(memory: HostMemory) -> Self {
        Self::new(
            memory.total_bytes / BYTES_PER_GIB,
            memory.free_bytes / BYTES_PER_GIB,
        )
    }

    pub fn total_gib(&self) -> u64 {
        self.total_gib
    }

    pub fn free_gib(&self) -> u64 {
        self.free_gib
    }

    /// Heap share advertised to the user: three quarters of total memory
    pub fn recommended_heap_gib(&self) -> u64 {
        self.total_gib * 3 / 4
    }
}

/// Machine-resource profile computed once per audit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceProfile {
    cpu_count: usize,
    cpu_model: String,
    cpu_speed_mhz: u64,
    arch: String,
    platform: Platform,
    memory: Option<MemoryProfile>,
    is_high_performance: bool,
    declared_flag_names: BTreeSet<FlagName>,
}

impl ResourceProfile {
    /// Hosts above this much memory (exclusive) may be high-performance
    pub const HIGH_PERFORMANCE_MIN_MEMORY_GIB: u64 = 16;
    /// Hosts need at least this many CPUs to be high-performance
    pub const HIGH_PERFORMANCE_MIN_CPUS: usize = 4;

    pub fn new(
        cpu_count: usize,
        cpu_model: String,
        cpu_speed_mhz: u64,
        arch: String,
        platform: Platform,
        memory: Option<MemoryProfile>,
        declared_flag_names: BTreeSet<FlagName>,
    ) -> Self {
        let cpu_count = cpu_count.max(1);
        let is_high_performance = memory.is_some_and(|m| {
            m.total_gib() > Self::HIGH_PERFORMANCE_MIN_MEMORY_GIB
                && cpu_count >= Self::HIGH_PERFORMANCE_MIN_CPUS
        });

        Self {
            cpu_count,
            cpu_model,
            cpu_speed_mhz,
            arch,
            platform,
            memory,
            is_high_performance,
            declared_flag_names,
        }
    }

    /// Conservative profile used when host facts are unavailable
    pub fn unavailable(declared_flag_names: BTreeSet<FlagName>) -> Self {
        Self::new(
            1,
            "unknown".to_string(),
            0,
            "unknown".to_string(),
            Platform::Other,
            None,
            declared_flag_names,
        )
    }

    pub fn cpu_count(&self) -> usize {
        self.cpu_count
    }

    pub fn cpu_model(&self) -> &str {
        &self.cpu_model
    }

    pub fn cpu_speed_mhz(&self) -> u64 {
        self.cpu_speed_mhz
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn memory(&self) -> Option<&MemoryProfile> {
        self.memory.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.memory.is_some()
    }

    pub fn is_high_performance(&self) -> bool {
        self.is_high_performance
    }

    pub fn declared_flag_names(&self) -> &BTreeSet<FlagName> {
        &self.declared_flag_names
    }
}
