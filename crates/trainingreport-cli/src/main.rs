//! trainingreport - builds training completion reports from a JSON roster.
//!
//! Reads `trainings.json` and writes `trainingCompletionCounts.json`,
//! `peopleInFiscalYear.json` and `expiredTrainings.json`.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trainingreport_core::error::EXIT_OTHER;
use trainingreport_core::{ReportConfig, ReportError};

const USAGE: &str = "Usage: trainingreport [--config <path>]";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_config(args: &[String]) -> Result<ReportConfig> {
    match args {
        [] => ReportConfig::load(),
        [flag, path] if flag == "--config" => ReportConfig::load_from(Path::new(path)),
        _ => anyhow::bail!("{}", USAGE),
    }
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("-h" | "--help")) {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_tracing();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_OTHER);
        }
    };
    info!(input = %config.input_file.display(), "Generating training reports");

    match trainingreport_core::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(e: &ReportError) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::from(e.exit_code())
}
