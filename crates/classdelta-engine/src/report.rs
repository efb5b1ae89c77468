//! Report assembled by [`crate::diff_snapshots`].

use classdelta_core::{Diff, Severity};
use classdelta_core_types::correlation::RunId;
use serde::{Deserialize, Serialize};

use crate::snapshot::LoadFailure;

/// Options for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Records below this severity are dropped from the report.
    pub min_severity: Severity,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Previous,
    Next,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Previous => "previous",
            Side::Next => "next",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedFailure {
    pub side: Side,
    #[serde(flatten)]
    pub failure: LoadFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassReport {
    pub class_name: String,
    pub diffs: Vec<Diff>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReport {
    pub package_name: String,
    pub diffs: Vec<Diff>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub classes_compared: usize,
    pub packages_compared: usize,
    pub failures: usize,
}

impl Summary {
    pub(crate) fn count(&mut self, diffs: &[Diff]) {
        for diff in diffs {
            match diff.severity() {
                Severity::Error => self.errors += 1,
                Severity::Warning => self.warnings += 1,
                Severity::Info => self.infos += 1,
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub run_id: RunId,
    pub previous: String,
    pub next: String,
    pub min_severity: Severity,
    pub packages: Vec<PackageReport>,
    pub classes: Vec<ClassReport>,
    pub failures: Vec<ReportedFailure>,
    pub summary: Summary,
}

impl Report {
    /// True when any ERROR record survived filtering or any class failed to load.
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0 || !self.failures.is_empty()
    }

    pub fn diff_count(&self) -> usize {
        self.summary.errors + self.summary.warnings + self.summary.infos
    }

    /// All records in report order: packages first, then classes.
    pub fn diffs(&self) -> impl Iterator<Item = &Diff> {
        self.packages
            .iter()
            .flat_map(|p| p.diffs.iter())
            .chain(self.classes.iter().flat_map(|c| c.diffs.iter()))
    }

    pub fn class(&self, class_name: &str) -> Option<&ClassReport> {
        self.classes.iter().find(|c| c.class_name == class_name)
    }

    pub fn package(&self, package_name: &str) -> Option<&PackageReport> {
        self.packages.iter().find(|p| p.package_name == package_name)
    }
}
