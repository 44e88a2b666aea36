//! `oss-license-detect` CLI: crawl a directory for `LICENSE` files and write a manifest.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Check the crawl root exists and is a directory (exit `1` otherwise).
//! 3. Load config (`config::load_config`).
//! 4. Crawl (`crawler::crawl_with`), with a spinner on the terminal.
//! 5. Write the manifest (`manifest::write_manifest`).
//! 6. Render the requested report.

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, ReportFormat};
use oss_license_detect::config::load_config;
use oss_license_detect::crawler::{crawl_with, CrawlOptions, CrawlOutcome};
use oss_license_detect::license::classifier::rules;
use oss_license_detect::manifest::write_manifest;
use oss_license_detect::report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_rules {
        report::terminal::render_rules(rules());
        return Ok(());
    }

    if !cli.path.exists() {
        eprintln!(
            "{} Path '{}' does not exist",
            "Error:".red().bold(),
            cli.path.display()
        );
        std::process::exit(1);
    }
    if !cli.path.is_dir() {
        eprintln!(
            "{} '{}' is not a directory",
            "Error:".red().bold(),
            cli.path.display()
        );
        std::process::exit(1);
    }

    let config = load_config(&cli.path, cli.config.as_deref())?;
    let output = cli.output.clone().unwrap_or_else(|| config.output.path.clone());

    if cli.verbose {
        let abs = cli.path.canonicalize().unwrap_or_else(|_| cli.path.clone());
        eprintln!("Crawling directory: {}", abs.display());
    }

    let options = CrawlOptions::from(&config.scan);
    let outcome = run_crawl(&cli.path, &options, cli.verbose, cli.quiet)?;

    let manifest = write_manifest(&outcome.records, &output)
        .with_context(|| format!("failed to write manifest {}", output.display()))?;

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&outcome, &cli.path, &output, cli.verbose, cli.quiet);
        }
        ReportFormat::Json => {
            println!("{}", manifest.to_json()?);
        }
        ReportFormat::None => {}
    }

    if cli.verbose {
        eprintln!("License detection completed successfully!");
    }

    Ok(())
}

fn run_crawl(
    root: &Path,
    options: &CrawlOptions,
    verbose: bool,
    quiet: bool,
) -> Result<CrawlOutcome> {
    let pb = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let outcome = crawl_with(root, options, current_year(), |license_path| {
        if verbose {
            let abs = license_path
                .canonicalize()
                .unwrap_or_else(|_| license_path.to_path_buf());
            let line = format!("Full LICENSE path: {}", abs.display());
            match &pb {
                Some(pb) if !pb.is_hidden() => pb.println(line),
                _ => eprintln!("{}", line),
            }
        }
        if let Some(pb) = &pb {
            pb.set_message(license_path.display().to_string());
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(outcome)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("oss_license_detect=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
