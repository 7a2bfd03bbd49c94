//! CLI sequence presenter.

use std::path::Path;
use std::time::Duration;

use fibspiral_core::sequence::Sequence;
use fibspiral_core::table::{group_thousands, rows};

use crate::output::{format_duration, format_json, format_table};
use crate::ui::{print_error, print_header, print_success};

/// Prints sequences and errors to the terminal.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Text that [`CliPresenter::present_sequence`] prints for `sequence`.
    ///
    /// Quiet mode yields one plain value per line.
    #[must_use]
    pub fn render_sequence(&self, sequence: &Sequence) -> String {
        if self.quiet {
            return sequence.iter().map(|v| format!("{v}\n")).collect();
        }
        let mut out = format_table(&rows(sequence));
        if self.verbose {
            let sum: u64 = sequence.iter().sum();
            out.push_str(&format!(
                "\n{} terms, sum {}\n",
                sequence.len(),
                group_thousands(sum)
            ));
        }
        out
    }

    /// Print the sequence as a table (or bare values when quiet).
    pub fn present_sequence(&self, sequence: &Sequence) {
        if !self.quiet {
            print_header(&format!("Fibonacci sequence ({} terms)", sequence.len()));
        }
        print!("{}", self.render_sequence(sequence));
    }

    /// Print the sequence as a JSON report.
    pub fn present_json(&self, sequence: &Sequence) -> Result<(), serde_json::Error> {
        println!("{}", format_json(sequence)?);
        Ok(())
    }

    /// Report a finished spiral rendering.
    pub fn present_render(&self, path: &Path, squares: usize, duration: Duration) {
        if self.quiet {
            return;
        }
        print_success(&format!(
            "Spiral with {squares} squares written to {} in {}",
            path.display(),
            format_duration(duration)
        ));
    }

    /// Print an application error to stderr, even in quiet mode.
    pub fn present_error(&self, error: &str) {
        tracing::debug!(quiet = self.quiet, "presenting error");
        print_error(error);
    }
}
