use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Abstracts the destination (stdout, file) from the formatting.
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - The destination path is rejected by the write safety checks
    fn present(&self, content: &str) -> Result<()>;
}
