use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Stderr spinner shown while a command waits on GitLab.
///
/// Inert unless [`ui::prefs`] enables progress. Cleared on drop if neither
/// `succeed` nor `fail` was called.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        let bar = ui::prefs().progress.then(|| {
            let style = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            let bar = ProgressBar::new_spinner()
                .with_style(style)
                .with_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        });
        Self { bar }
    }

    /// Remove the spinner so the table prints on a clean line.
    pub fn succeed(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Leave the spinner line in place with `message`.
    pub fn fail(mut self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.abandon_with_message(message.to_string());
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
