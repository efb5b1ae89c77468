//! classdelta engine - orchestration layer
//!
//! Loads two snapshot directories of compiled classes, pairs classes and
//! packages by name, runs the core differs and assembles a [`Report`].
//!
//! ## Logging Ownership
//!
//! Engine commands own their operation boundaries (`load_snapshot`,
//! `diff_snapshots`). The core differs and the reader only emit `trace`/
//! `debug` events underneath.

pub mod commands;
pub mod errors;
pub mod filter;
pub mod messages;
pub mod report;
pub mod snapshot;

pub use commands::diff::diff_snapshots;
pub use commands::load::load_snapshot;
pub use filter::ClassFilter;
pub use report::{ClassReport, DiffOptions, PackageReport, Report, ReportedFailure, Side, Summary};
pub use snapshot::{LoadFailure, Snapshot};
