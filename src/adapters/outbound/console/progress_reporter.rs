use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}";

/// StderrProgressReporter adapter for progress on stderr
///
/// Writes to stderr so it never mixes with the report on stdout. Counted
/// steps are drawn with an indicatif bar, created lazily on first use.
/// The bar sits behind a mutex because dependency lookups report
/// concurrently.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn bar_for(&self, total: usize) -> Option<ProgressBar> {
        let mut slot = self.progress_bar.lock().ok()?;
        let bar = slot.get_or_insert_with(|| {
            let style = ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-");
            ProgressBar::new(total as u64).with_style(style)
        });
        bar.set_length(total as u64);
        Some(bar.clone())
    }

    fn clear_bar(&self) {
        if let Ok(mut slot) = self.progress_bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let Some(bar) = self.bar_for(total) else {
            return;
        };
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
        if current >= total {
            self.clear_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("📖 Loading package.json");
        reporter.report_progress(1, 2, Some("express"));
        reporter.report_progress(2, 2, Some("lodash"));
        reporter.report_error("⚠️  Warning");
        reporter.report_completion("✅ Done");
        assert!(reporter.progress_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_bar_is_reused_between_updates() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 3, None);
        reporter.report_progress(2, 3, None);
        assert!(reporter.progress_bar.lock().unwrap().is_some());
        reporter.report_completion("done");
    }
}
