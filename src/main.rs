//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iri_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the report to stdout and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use iri_check::config::Opt;
use iri_check::initialization::init_logger_with;
use iri_check::{run_check, write_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let report = match run_check(&config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("iri_check error: {:#}", e);
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, config.output_format).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    let code = report.exit_code(config.fail_on);
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
