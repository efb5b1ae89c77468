//! Subcommands

use std::process::ExitCode;

pub mod diff;
pub mod keys;

/// Usage, configuration or I/O failure.
pub const EXIT_FAILURE: u8 = 2;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// ERROR records or load failures were reported
    Findings,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Findings => ExitCode::from(1),
        }
    }
}
