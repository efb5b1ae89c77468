//! Diff command
//!
//! Usage: classdelta diff --previous <DIR> --next <DIR> [--format text|json]
//! [--min-severity LEVEL] [--include PREFIX]... [--exclude PREFIX]...
//! [--config FILE]

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use classdelta_core::logging_facility;
use classdelta_core::Severity;
use classdelta_engine::{diff_snapshots, load_snapshot, DiffOptions};

use super::Outcome;
use crate::config::{self, OutputFormat, Settings};
use crate::output;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Directory holding the previous version's classes
    #[arg(long)]
    pub previous: PathBuf,

    /// Directory holding the next version's classes
    #[arg(long)]
    pub next: PathBuf,

    /// Output format (default: text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Drop records below this severity: INFO, WARNING or ERROR
    #[arg(long, value_parser = parse_severity)]
    pub min_severity: Option<Severity>,

    /// Only compare classes whose name starts with this prefix
    #[arg(long)]
    pub include: Vec<String>,

    /// Skip classes whose name starts with this prefix
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Config file (default: classdelta.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse()
}

pub fn execute(args: DiffArgs) -> anyhow::Result<Outcome> {
    let file = config::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, file);
    logging_facility::init(settings.profile);

    let previous = load_snapshot(&args.previous, &settings.filter)
        .context("loading previous snapshot")?;
    let next = load_snapshot(&args.next, &settings.filter).context("loading next snapshot")?;
    let report = diff_snapshots(
        &previous,
        &next,
        &DiffOptions {
            min_severity: settings.min_severity,
        },
    );

    let mut out = std::io::stdout().lock();
    match settings.format {
        OutputFormat::Text => output::write_text(&mut out, &report)?,
        OutputFormat::Json => output::write_json(&mut out, &report)?,
    }

    Ok(if report.has_errors() {
        Outcome::Findings
    } else {
        Outcome::Clean
    })
}
