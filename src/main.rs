use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colorvars::{run_with, ColorVarsConfig, Destination, Stage};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorvars")]
#[command(about = "Replace repeated stylesheet colors with generated custom properties")]
struct Cli {
    /// Stylesheet to read
    source: Option<PathBuf>,

    /// Where to write the result (defaults to output.css next to the source)
    target: Option<PathBuf>,

    /// YAML run configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tracing filter; RUST_LOG takes precedence
    #[arg(long, default_value = "error")]
    log_level: String,

    /// Print the generated stylesheet to stdout instead of writing a file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let Some(source) = cli.source.as_deref() else {
        eprintln!("No source file path provided");
        return ExitCode::FAILURE;
    };

    match execute(&cli, source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: &Cli, source: &Path) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => ColorVarsConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ColorVarsConfig::default(),
    };

    let span = tracing::span!(Level::INFO, "colorvars.run", source = %source.display());
    let _guard = span.enter();

    let destination = if cli.dry_run {
        Destination::DryRun
    } else {
        Destination::File(cli.target.as_deref())
    };
    let summary = run_with(source, destination, &cfg, |stage| match stage {
        Stage::Formatting => progress(cli.dry_run, "Formatting CSS file"),
        Stage::Formatted => progress(cli.dry_run, "CSS file formatted"),
        Stage::ColorRejected(err) => eprintln!("Error processing color value: {err}"),
        Stage::Written(target) => progress(
            cli.dry_run,
            &format!("Generated new CSS file with variables at: {}", target.display()),
        ),
    })?;

    if summary.target.is_none() {
        print!("{}", summary.processed.css);
    }
    Ok(())
}

/// stdout carries the stylesheet itself in dry-run mode.
fn progress(dry_run: bool, line: &str) {
    if dry_run {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}
