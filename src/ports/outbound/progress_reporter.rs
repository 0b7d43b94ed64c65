/// ProgressReporter port for user-facing progress on stderr
///
/// Kept separate from logging: progress is for the person at the terminal,
/// `tracing` events are for diagnostics.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, message: &str);

    /// Reports progress of a counted step (e.g. dependency lookups)
    ///
    /// # Arguments
    /// * `current` - Items completed so far
    /// * `total` - Items expected
    /// * `message` - Optional message shown next to the counter
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    fn report_error(&self, message: &str);

    fn report_completion(&self, message: &str);
}
