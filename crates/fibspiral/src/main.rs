//! FibSpiral: Fibonacci sequence and golden spiral explorer.

use fibspiral_cli::presenter::CliPresenter;
use fibspiral_lib::{app, config, errors};

fn main() {
    // Parse CLI args
    let config = config::AppConfig::parse();

    // Initialize tracing
    if config.logs_to_stderr() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::WARN.into()),
            )
            .init();
    }

    if let Err(err) = app::run(&config) {
        CliPresenter::new(config.verbose, config.quiet).present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code_for(&err));
    }
}
