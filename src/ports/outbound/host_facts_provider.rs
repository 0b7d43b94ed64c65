use crate::flag_audit::domain::HostFacts;
use crate::shared::Result;

/// HostFactsProvider port for reading CPU, memory and platform facts
///
/// This port abstracts the operating system so the resource profile can be
/// computed from fixed facts in tests.
pub trait HostFactsProvider: Send + Sync {
    /// Collects the current host facts
    ///
    /// # Errors
    /// Returns an error if the host cannot be inspected at all. Callers fall
    /// back to a conservative profile in that case.
    fn collect(&self) -> Result<HostFacts>;
}
