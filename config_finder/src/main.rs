//! CLI entrypoint for `config-finder`.

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use config_finder::{ConfigError, ConfigResolver, Resolved, load_config_file};
use serde_json::Value;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "CONFIG_FINDER_LOG";

/// Errors surfaced by the `config-finder` binary.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

#[expect(clippy::print_stderr, reason = "final error report for the CLI user")]
fn main() -> ExitCode {
    init_tracing();
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("config-finder: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    if let Some(file) = &args.file {
        let value = load_config_file(file, args.format)?;
        return write_value(&mut stdout, &value);
    }

    let resolver = args.resolver();
    if args.should_list_candidates {
        return write_candidates(&mut stdout, &resolver);
    }
    let outcome = resolver.get();
    log_origin(&outcome);
    write_value(&mut stdout, &outcome.value())
}

fn log_origin(outcome: &Resolved) {
    match outcome {
        Resolved::Loaded { path, .. } => info!(path = %path.display(), "configuration loaded"),
        Resolved::Defaulted {
            persisted_to: Some(path),
            ..
        } => info!(path = %path.display(), "using default configuration (saved)"),
        Resolved::Defaulted { .. } => info!("using default configuration"),
        Resolved::Empty => info!("no configuration found"),
    }
}

fn write_candidates(out: &mut impl io::Write, resolver: &ConfigResolver) -> Result<(), CliError> {
    for candidate in resolver.candidates() {
        writeln!(out, "{}", candidate.display())?;
    }
    Ok(())
}

fn write_value(out: &mut impl io::Write, value: &Value) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
