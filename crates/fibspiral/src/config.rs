//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use fibspiral_core::constants::{
    DEFAULT_STEP_DELAY_MS, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_STEP_DELAY_MS,
};
use fibspiral_core::term_count::{TermCount, TermCountError};

/// FibSpiral: Fibonacci sequence table and animated golden spiral.
#[derive(Parser, Debug)]
#[command(name = "fibspiral", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of terms to generate (1-25).
    #[arg(
        short = 'n',
        long,
        default_value = "10",
        env = "FIBSPIRAL_TERMS",
        allow_hyphen_values = true
    )]
    pub terms: String,

    /// Delay between squares in milliseconds (0-2000).
    #[arg(
        long = "delay",
        default_value_t = DEFAULT_STEP_DELAY_MS,
        env = "FIBSPIRAL_DELAY_MS",
        value_parser = clap::value_parser!(u64).range(0..=MAX_STEP_DELAY_MS)
    )]
    pub delay_ms: u64,

    /// Animate the spiral into an SVG file.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// SVG width in pixels.
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// SVG height in pixels.
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Print the sequence as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the table (or JSON) to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate `--terms`.
    pub fn term_count(&self) -> Result<TermCount, TermCountError> {
        TermCount::parse(&self.terms)
    }

    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Whether diagnostics may go to stderr.
    ///
    /// The TUI draws on the terminal stderr shares, so it logs to its own panel.
    #[must_use]
    pub fn logs_to_stderr(&self) -> bool {
        !self.tui
    }
}
