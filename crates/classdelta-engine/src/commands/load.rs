//! Snapshot loading
//!
//! Walks a directory of compiled classes, reads every `.class` file that
//! passes the [`ClassFilter`] and groups the results into a [`Snapshot`].
//!
//! ## Logging Ownership
//!
//! `load_snapshot` owns the operation boundary. Each class that fails to
//! load is logged once at `warn` and recorded as a [`LoadFailure`], as is a
//! second file declaring an already loaded class. The walk itself only
//! fails on I/O errors over the directory tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use classdelta_core::model::ClassInfo;
use classdelta_core::{log_op_end, log_op_error, log_op_start};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::errors::{io_error, not_a_directory, Result};
use crate::filter::ClassFilter;
use crate::snapshot::{LoadFailure, Snapshot};

pub const OP_LOAD_SNAPSHOT: &str = "load_snapshot";

const CLASS_EXTENSION: &str = "class";

/// Load every class under `root` that passes `filter`.
///
/// Unreadable or malformed class files become failure entries of the
/// snapshot. A missing root or an unreadable directory is an error.
pub fn load_snapshot(root: &Path, filter: &ClassFilter) -> Result<Snapshot> {
    log_op_start!(OP_LOAD_SNAPSHOT, path = %root.display());
    let start = Instant::now();

    let snapshot = load_snapshot_impl(root, filter).map_err(|e| {
        log_op_error!(
            OP_LOAD_SNAPSHOT,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_LOAD_SNAPSHOT,
        duration_ms = start.elapsed().as_millis() as u64,
        class_count = snapshot.classes.len(),
        failure_count = snapshot.failures.len()
    );
    Ok(snapshot)
}

fn load_snapshot_impl(root: &Path, filter: &ClassFilter) -> Result<Snapshot> {
    if !root.is_dir() {
        return Err(not_a_directory(OP_LOAD_SNAPSHOT, root));
    }

    let mut files = Vec::new();
    collect_class_files(root, &mut files)?;
    files.sort();

    let candidates: Vec<(PathBuf, String)> = files
        .into_iter()
        .filter_map(|path| {
            let name = class_name_for(root, &path)?;
            filter.matches(&name).then_some((path, name))
        })
        .collect();
    debug!(
        path = %root.display(),
        candidates = candidates.len(),
        "collected class files"
    );

    let outcomes: Vec<(&PathBuf, std::result::Result<ClassInfo, LoadFailure>)> = candidates
        .par_iter()
        .map(|(path, name)| (path, load_class(path, name)))
        .collect();

    let mut classes = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(class) => classes.push((path.display().to_string(), class)),
            Err(failure) => {
                warn!(
                    op = OP_LOAD_SNAPSHOT,
                    class_name = %failure.class_name,
                    path = %failure.path,
                    err_code = %failure.error_code,
                    reason = %failure.reason,
                    "class failed to load"
                );
                failures.push(failure);
            }
        }
    }

    Ok(Snapshot::from_sources(root, classes, failures))
}

fn collect_class_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| io_error(OP_LOAD_SNAPSHOT, dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_error(OP_LOAD_SNAPSHOT, dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| io_error(OP_LOAD_SNAPSHOT, &path, e))?;
        if file_type.is_dir() {
            collect_class_files(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(CLASS_EXTENSION) {
            out.push(path);
        }
    }
    Ok(())
}

/// Dotted class name from the path below `root` (`com/acme/Foo.class` is
/// `com.acme.Foo`).
fn class_name_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("."))
}

fn load_class(path: &Path, name: &str) -> std::result::Result<ClassInfo, LoadFailure> {
    let failure = |reason: String, code: &str| LoadFailure {
        class_name: name.to_string(),
        path: path.display().to_string(),
        reason,
        error_code: code.to_string(),
    };

    let bytes = fs::read(path)
        .map_err(|e| io_error(OP_LOAD_SNAPSHOT, path, e))
        .map_err(|e| failure(e.message().to_string(), e.code()))?;
    classdelta_reader::read_class(&bytes).map_err(|e| {
        let reason = if e.message().is_empty() {
            e.to_string()
        } else {
            e.message().to_string()
        };
        failure(reason, e.code())
    })
}
