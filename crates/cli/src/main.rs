//! # growthsum-cli
//!
//! Command-line interface: fold one experiment workbook into the rolling summary.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use growthsum_core::{
    generate_overview, GrowthRateOutcome, MergeAction, OverviewOptions, OverviewReport,
    SchemaMismatchPolicy,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// growthsum - append one experiment to the growth summary workbook
#[derive(Parser)]
#[command(name = "growthsum")]
#[command(author, version, about = "Aggregate experiment workbooks into a rolling summary", long_about = None)]
struct Cli {
    /// Experiment file name, without extension
    #[arg(long = "input-file", value_name = "NAME")]
    input_file: String,

    /// Directory holding the experiment file (defaults to the current directory)
    #[arg(long = "input-dir", value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Directory for summary_<N>cols.xlsx (defaults to the current directory)
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// What to do when the existing summary has a different column count
    #[arg(long = "on-schema-mismatch", value_enum, default_value = "replace")]
    on_schema_mismatch: MismatchPolicy,

    /// Assemble and merge without writing the summary
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Output format for the run report
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Schema mismatch handling.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum MismatchPolicy {
    /// Keep only the new record
    #[default]
    Replace,
    /// Fail and leave the summary untouched
    Reject,
    /// Rename the old summary with a timestamp, then start over
    Archive,
}

impl From<MismatchPolicy> for SchemaMismatchPolicy {
    fn from(policy: MismatchPolicy) -> Self {
        match policy {
            MismatchPolicy::Replace => SchemaMismatchPolicy::Replace,
            MismatchPolicy::Reject => SchemaMismatchPolicy::Reject,
            MismatchPolicy::Archive => SchemaMismatchPolicy::Archive,
        }
    }
}

/// Output format for the run report.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// One-line summary (default)
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let options = OverviewOptions::new(
        cli.input_dir.unwrap_or_else(|| cwd.clone()),
        cli.output_dir.unwrap_or(cwd),
    )
    .with_policy(cli.on_schema_mismatch.into())
    .with_dry_run(cli.dry_run);
    debug!(?options, "resolved options");

    let report = generate_overview(&cli.input_file, &options)
        .with_context(|| format!("Failed to summarize experiment '{}'", cli.input_file))?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    Ok(())
}

/// Print a one-line description of what happened.
fn print_report(report: &OverviewReport) {
    let action = match &report.action {
        MergeAction::Created => "created".green().bold(),
        MergeAction::Appended { .. } => "appended".green().bold(),
        MergeAction::Replaced { discarded_rows, .. } => {
            format!("replaced ({discarded_rows} rows discarded)").yellow().bold()
        }
        MergeAction::Archived { .. } => "archived and restarted".yellow().bold(),
    };
    let rate = match report.growth_rate {
        GrowthRateOutcome::Computed(rate) => format!("growth rate {rate}"),
        GrowthRateOutcome::Skipped => "growth rate not computed".to_string(),
    };
    let prefix = if report.dry_run { "[dry run] " } else { "" };

    println!(
        "{prefix}{} {action}: {} rows, {} columns, {rate}",
        report.summary_path.display(),
        report.summary_rows,
        report.record.len(),
    );
    if let Some(archived) = &report.archived_to {
        println!("previous summary moved to {}", archived.display());
    }
}
