//! # crescent-site
//!
//! Command-line build for the Crescent C Ranch landing page.
//!
//! ```bash
//! crescent-site build --out dist/index.html
//! crescent-site check dist/index.html --json
//! crescent-site --config staging.toml print --year 2026
//! ```

mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::args::Args;

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);
    debug!(?args, "starting crescent-site v{}", env!("CARGO_PKG_VERSION"));

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[crescent-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
