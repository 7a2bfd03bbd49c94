//! Application entry point and dispatch.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use fibspiral_cli::output::{format_json, format_table, write_to_file};
use fibspiral_cli::presenter::CliPresenter;
use fibspiral_cli::progress::ProgressBarObserver;
use fibspiral_core::layout::Layout;
use fibspiral_core::sequence::Sequence;
use fibspiral_core::table::rows;
use fibspiral_render::sequencer::{AnimationSequencer, Delay, ThreadSleep};
use fibspiral_render::svg::SvgSurface;
use fibspiral_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibspiral_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let count = config.term_count()?;
    let (sequence, layout) = fibspiral_core::spiral(count);
    tracing::debug!(terms = sequence.len(), "sequence generated");

    let presenter = CliPresenter::new(config.verbose, config.quiet);
    if config.json {
        presenter.present_json(&sequence)?;
    } else {
        presenter.present_sequence(&sequence);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        let contents = file_contents(config, &sequence)?;
        write_to_file(path, &contents).with_context(|| format!("failed to write {path}"))?;
    }

    if let Some(ref path) = config.svg {
        // Keep stdout clean for JSON and quiet output.
        let announce = !(config.quiet || config.json);
        let observer = if announce {
            ProgressBarObserver::new(sequence.len())
        } else {
            ProgressBarObserver::hidden(sequence.len())
        };
        let start = Instant::now();
        let squares = sequence.len();
        render_svg(config, layout, squares, path, &mut ThreadSleep, &observer)?;
        if announce {
            presenter.present_render(path, squares, start.elapsed());
        }
    }

    Ok(())
}

fn file_contents(config: &AppConfig, sequence: &Sequence) -> Result<String> {
    if config.json {
        Ok(format_json(sequence)?)
    } else {
        Ok(format_table(&rows(sequence)))
    }
}

/// Animate `layout` into an SVG document at `path`, one square per step.
pub fn render_svg<D: Delay + ?Sized>(
    config: &AppConfig,
    layout: Layout,
    sequence_len: usize,
    path: &Path,
    delay: &mut D,
    observer: &ProgressBarObserver,
) -> Result<()> {
    let mut surface = SvgSurface::new(f64::from(config.width), f64::from(config.height))?;
    let mut sequencer = AnimationSequencer::new(config.step_delay());
    sequencer.run(layout, sequence_len, &mut surface, delay, observer);
    surface
        .write_to(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let mut app = TuiApp::new(rx);

    tx.send(TuiMessage::SetStepDelay(config.step_delay()))?;
    tx.send(TuiMessage::SetTermsInput(config.terms.trim().to_string()))?;
    tx.send(TuiMessage::Log(full_version()))?;
    tx.send(TuiMessage::Log(
        "Type a term count (1-25) and press Enter".to_string(),
    ))?;

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
