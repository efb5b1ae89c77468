//! Keys command
//!
//! Usage: classdelta keys [--plain]

use std::io::Write;

use clap::Args;
use classdelta_engine::messages::TEMPLATES;

use super::Outcome;

#[derive(Debug, Args)]
pub struct KeysArgs {
    /// Print keys only, without templates
    #[arg(long)]
    pub plain: bool,
}

pub fn execute(args: KeysArgs) -> anyhow::Result<Outcome> {
    let mut out = std::io::stdout().lock();
    for (key, template) in TEMPLATES {
        if args.plain {
            writeln!(out, "{}", key)?;
        } else {
            writeln!(out, "{:<32} {}", key, template)?;
        }
    }
    Ok(Outcome::Clean)
}
