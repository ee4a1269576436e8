//! Subcommand implementations.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use crescent_site::{SiteConfig, audit_page, current_year, render_page, write_page};
use tracing::{info, warn};

use crate::args::{Args, Command};

/// Resolve the configuration from `--config` or the site root.
pub fn load_config(args: &Args) -> Result<SiteConfig> {
    let config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path)?,
        None => SiteConfig::load(&args.root)?,
    };
    config.validate().context("configuration rejected")?;
    Ok(config)
}

pub fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    match &args.command {
        Command::Build { out, year } => build(&config, out, year.unwrap_or_else(current_year)),
        Command::Print { year } => {
            let html = render_page(&config, year.unwrap_or_else(current_year));
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("failed to write page to stdout")
        }
        Command::Check {
            file,
            year,
            any_year,
            json,
        } => {
            let expected_year = (!any_year).then(|| year.unwrap_or_else(current_year));
            check(&config, file.as_deref(), expected_year, *json)
        }
        Command::Config => {
            print!("{}", config.to_toml());
            Ok(())
        }
    }
}

fn build(config: &SiteConfig, out: &Path, year: i32) -> Result<()> {
    let html = render_page(config, year);
    let report = audit_page(&html, config, Some(year));
    if !report.is_clean() {
        for issue in &report.issues {
            warn!(%issue, "rendered page failed audit");
        }
        bail!("rendered page failed audit:\n{report}");
    }

    write_page(out, &html)?;
    info!(path = %out.display(), bytes = html.len(), year, "page written");
    eprintln!("Page written to {}", out.display());
    Ok(())
}

fn check(config: &SiteConfig, file: Option<&Path>, year: Option<i32>, json: bool) -> Result<()> {
    let html = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => render_page(config, year.unwrap_or_else(current_year)),
    };

    let report = audit_page(&html, config, year);
    for issue in &report.issues {
        warn!(%issue, "audit issue");
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        print!("{report}");
        if report.is_clean() {
            println!();
        }
    }

    if !report.is_clean() {
        bail!("{} structural issue(s) found", report.issues.len());
    }
    Ok(())
}
