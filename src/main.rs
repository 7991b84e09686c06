//! karabiner-config - Karabiner-Elements configuration generator
//!
//! Builds the Hyper key layout and writes it to `karabiner.json`. Running
//! without arguments writes the file to the current directory.

use anyhow::{Context, Result};
use clap::Parser;
use karabiner_config::config::Config;
use karabiner_config::constants::APP_NAME;
use karabiner_config::generator::{self, CheckOutcome};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// karabiner-config - Karabiner-Elements configuration generator
#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Output file (defaults to the configured path, normally ./karabiner.json)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["check", "output"])]
    stdout: bool,

    /// Verify the output file is up to date without writing it
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --stdout output stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default(),
    };

    let output = cli.output.clone().unwrap_or_else(|| config.output.path.clone());
    let document = generator::build_document(&config);

    if cli.stdout {
        let content = generator::render(&document)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{content}").context("Failed to write to stdout")?;
        return Ok(());
    }

    if cli.check {
        return match generator::check_config(&document, &output)? {
            CheckOutcome::UpToDate => {
                println!("✓ {} is up to date", output.display());
                Ok(())
            }
            outcome => anyhow::bail!("{} is {}", output.display(), outcome),
        };
    }

    let report = generator::write_config(&document, &output)?;
    println!("{report}");

    Ok(())
}
