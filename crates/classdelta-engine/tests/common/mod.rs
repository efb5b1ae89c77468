#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use classdelta_core::Diff;
use classdelta_reader::writer::ClassFileWriter;
use tempfile::TempDir;

/// Two snapshot directories under one temporary root.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("previous")).unwrap();
        fs::create_dir_all(dir.path().join("next")).unwrap();
        Self { dir }
    }

    pub fn previous(&self) -> PathBuf {
        self.dir.path().join("previous")
    }

    pub fn next(&self) -> PathBuf {
        self.dir.path().join("next")
    }

    pub fn write_previous(&self, classes: &[ClassFileWriter]) {
        write_classes(&self.previous(), classes);
    }

    pub fn write_next(&self, classes: &[ClassFileWriter]) {
        write_classes(&self.next(), classes);
    }

    /// Write the same classes on both sides.
    pub fn write_both(&self, classes: &[ClassFileWriter]) {
        self.write_previous(classes);
        self.write_next(classes);
    }
}

pub fn write_classes(root: &Path, classes: &[ClassFileWriter]) {
    for class in classes {
        class.write_into(root).unwrap();
    }
}

/// Write arbitrary bytes at `relative` below `root`.
pub fn write_raw(root: &Path, relative: &str, bytes: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

pub fn keys(diffs: &[Diff]) -> Vec<&str> {
    diffs.iter().map(|d| d.message_key()).collect()
}

pub fn args(diff: &Diff) -> Vec<String> {
    diff.args().iter().map(ToString::to_string).collect()
}
