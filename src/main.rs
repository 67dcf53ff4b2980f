//! Gadget addiction risk binary entry point.
//!
//! Runs one command and prints its result to stdout. All logs go to
//! stderr so that stdout stays machine-readable.
//!
//! Coverage is excluded because this file only reads the process
//! environment; wiring lives in `cli::run_with_config`, which is tested.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use gadget_risk::cli::{help_text, run_with_config, Command, CommandOutput};
use gadget_risk::config::Config;
use gadget_risk::error::AppError;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for command output)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{}", help_text());
            std::process::exit(2);
        }
    };

    let output = match run(command).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    match output.render() {
        Ok(text) => println!("{text}"),
        Err(e) => {
            tracing::error!("Failed to render output: {e}");
            std::process::exit(1);
        }
    }
}

/// Load configuration from the environment and run one command.
#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(command: Command) -> Result<CommandOutput, AppError> {
    let config = Config::from_env()?;

    tracing::debug!(
        database = %config.database_path,
        enrichment = config.enrichment_enabled(),
        "Configuration loaded"
    );

    run_with_config(&config, command).await
}
