/// Operating-system adapters
mod sysinfo_host_facts;

pub use sysinfo_host_facts::SysinfoHostFacts;
