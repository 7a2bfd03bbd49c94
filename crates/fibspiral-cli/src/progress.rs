//! Animation progress bar.

use indicatif::{ProgressBar, ProgressStyle};

use fibspiral_render::sequencer::StepObserver;

const TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} squares {msg}";

/// Shows one tick per painted square.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Visible progress bar for `total` squares.
    #[must_use]
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    /// Observer that draws nothing (quiet mode, tests).
    #[must_use]
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl StepObserver for ProgressBarObserver {
    fn on_square(&self, index: usize, _total: usize) {
        self.bar.set_position(index as u64 + 1);
    }

    fn on_complete(&self) {
        self.bar.finish_with_message("spiral drawn");
    }
}
