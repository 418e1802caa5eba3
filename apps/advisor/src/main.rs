//! # Mesa Advisor
//!
//! Command-line front end for the mesa-core routines.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env (MESA_*) ──► AdvisorConfig ──► tracing subscriber (stderr)         │
//! │                                                                         │
//! │  argv ──► Cli ──► execute() ──► mesa-core ──► JSON on stdout            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::commands::{execute, Cli};
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, AdvisorResult};

fn main() -> ExitCode {
    let config = match AdvisorConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("mesa-advisor: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?config, "configuration loaded");

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AdvisorConfig) -> AdvisorResult<()> {
    let output = execute(cli.command, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &output).map_err(AdvisorError::Output)?;
    writeln!(out).map_err(AdvisorError::Stdout)?;

    Ok(())
}
