//! Snapshot comparison
//!
//! Packages are compared over the union of their names; classes present on
//! both sides are compared in parallel and collected back in name order.
//!
//! ## Logging Ownership
//!
//! `diff_snapshots` owns the operation boundary and tags it with the run id
//! that ends up in the report.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::time::Instant;

use classdelta_core::model::{ClassInfo, Content, PackageInfo};
use classdelta_core::{diff_class, diff_package, log_op_end, log_op_start, Diff, Severity};
use classdelta_core_types::correlation::RunId;
use rayon::prelude::*;

use crate::report::{ClassReport, DiffOptions, PackageReport, Report, ReportedFailure, Side, Summary};
use crate::snapshot::Snapshot;

pub const OP_DIFF_SNAPSHOTS: &str = "diff_snapshots";

/// Compare two loaded snapshots.
///
/// Class additions and removals surface only as `package.class.*` records.
/// A class that failed to load on either side is neither paired nor listed
/// in its package, so it shows up as a failure and nothing else.
pub fn diff_snapshots(previous: &Snapshot, next: &Snapshot, options: &DiffOptions) -> Report {
    let run_id = RunId::new();
    log_op_start!(
        OP_DIFF_SNAPSHOTS,
        run_id = %run_id,
        previous = %previous.root.display(),
        next = %next.root.display()
    );
    let start = Instant::now();

    let failed: BTreeSet<&str> = previous
        .failed_class_names()
        .into_iter()
        .chain(next.failed_class_names())
        .collect();
    let mut summary = Summary::default();

    let package_names: BTreeSet<&str> = previous
        .packages
        .keys()
        .chain(next.packages.keys())
        .map(String::as_str)
        .collect();
    summary.packages_compared = package_names.len();

    let mut packages = Vec::new();
    for name in package_names {
        let prev = side_package(previous, name, &failed);
        let nxt = side_package(next, name, &failed);
        let diffs = retain(diff_package(&prev, &nxt), options.min_severity);
        if !diffs.is_empty() {
            summary.count(&diffs);
            packages.push(PackageReport {
                package_name: name.to_string(),
                diffs,
            });
        }
    }

    let pairs: Vec<(&ClassInfo, &ClassInfo)> = previous
        .classes
        .iter()
        .filter(|(name, _)| !failed.contains(name.as_str()))
        .filter_map(|(name, prev)| next.classes.get(name).map(|nxt| (prev, nxt)))
        .collect();
    summary.classes_compared = pairs.len();

    let min_severity = options.min_severity;
    let class_diffs: Vec<Vec<Diff>> = pairs
        .par_iter()
        .map(|(prev, nxt)| retain(diff_class(prev, nxt), min_severity))
        .collect();

    let mut classes = Vec::new();
    for ((prev, _), diffs) in pairs.iter().zip(class_diffs) {
        if !diffs.is_empty() {
            summary.count(&diffs);
            classes.push(ClassReport {
                class_name: prev.name().to_string(),
                diffs,
            });
        }
    }

    let failures: Vec<ReportedFailure> = previous
        .failures
        .iter()
        .map(|f| (Side::Previous, f))
        .chain(next.failures.iter().map(|f| (Side::Next, f)))
        .map(|(side, failure)| ReportedFailure {
            side,
            failure: failure.clone(),
        })
        .collect();
    summary.failures = failures.len();

    let report = Report {
        run_id,
        previous: previous.root.display().to_string(),
        next: next.root.display().to_string(),
        min_severity,
        packages,
        classes,
        failures,
        summary,
    };

    log_op_end!(
        OP_DIFF_SNAPSHOTS,
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = %report.run_id,
        class_count = report.summary.classes_compared,
        diff_count = report.diff_count(),
        failure_count = report.summary.failures
    );
    report
}

fn retain(diffs: Vec<Diff>, min_severity: Severity) -> Vec<Diff> {
    diffs
        .into_iter()
        .filter(|d| d.severity() >= min_severity)
        .collect()
}

/// One side of a package, with failed classes removed from its entries.
fn side_package<'a>(
    snapshot: &'a Snapshot,
    name: &str,
    failed: &BTreeSet<&str>,
) -> Cow<'a, PackageInfo> {
    let Some(package) = snapshot.package(name) else {
        return Cow::Owned(PackageInfo::empty(name));
    };
    if !package.classes().iter().any(|c| failed.contains(c.name())) {
        return Cow::Borrowed(package);
    }
    let mut builder = PackageInfo::builder(name).annotations(package.annotations().iter().cloned());
    for class in package.classes() {
        if !failed.contains(class.name()) {
            builder = builder.class(class.clone());
        }
    }
    Cow::Owned(builder.build())
}
