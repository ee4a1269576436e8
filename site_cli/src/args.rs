//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crescent-site")]
#[command(about = "Build and audit the Crescent C Ranch landing page")]
#[command(version)]
pub struct Args {
    /// Config file (default: <root>/crescent-site.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Site root used to look up the default config file
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to a file and audit the result
    Build {
        /// Output file
        #[arg(long, short, default_value = "dist/index.html")]
        out: PathBuf,
        /// Copyright year (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Render the page to stdout
    Print {
        /// Copyright year (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Audit a rendered page (a fresh render when no file is given)
    Check {
        /// HTML file to audit
        file: Option<PathBuf>,
        /// Copyright year the footer must show (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Skip the footer year check
        #[arg(long, conflicts_with = "year")]
        any_year: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}
