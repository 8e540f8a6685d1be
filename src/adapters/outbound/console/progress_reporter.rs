use crate::application::read_models::LOADING_TEXT;
use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses an indicatif spinner as the loading placeholder.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: false,
        }
    }

    /// Only errors are printed; no spinner, no progress messages.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    fn create_spinner(what: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(format!("{} {}", LOADING_TEXT, what));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn begin_loading(&self, what: &str) {
        if self.quiet {
            return;
        }
        let mut slot = self.spinner.borrow_mut();
        match slot.as_ref() {
            Some(spinner) => spinner.set_message(format!("{} {}", LOADING_TEXT, what)),
            None => *slot = Some(Self::create_spinner(what)),
        }
    }

    fn end_loading(&self) {
        self.clear_spinner();
    }

    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if self.quiet {
            return;
        }
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.begin_loading("builds");
        reporter.begin_loading("build a1b2");
        assert!(reporter.spinner.borrow().is_some());
        reporter.end_loading();
        assert!(reporter.spinner.borrow().is_none());
        reporter.report("Test message");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_quiet_reporter_never_spins() {
        let reporter = StderrProgressReporter::quiet();
        reporter.begin_loading("builds");
        assert!(reporter.spinner.borrow().is_none());
    }
}
