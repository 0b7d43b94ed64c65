use crate::application::dto::{AuditRequest, AuditResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// AuditPort - Inbound port for the flag audit use case
///
/// This is what the CLI drives. It represents the application's public API.
#[async_trait]
pub trait AuditPort {
    /// Runs one audit of the project named in the request
    ///
    /// # Returns
    /// A response holding the assembled audit result
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project directory does not exist or is not a directory
    /// - package.json cannot be read or parsed
    ///
    /// Host-fact and dependency lookup failures are not errors; they degrade
    /// the result instead.
    async fn run_audit(&self, request: AuditRequest) -> Result<AuditResponse>;
}
