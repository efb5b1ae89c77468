#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use classdelta_reader::writer::ClassFileWriter;
use tempfile::TempDir;

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

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn previous(&self) -> PathBuf {
        self.dir.path().join("previous")
    }

    pub fn next(&self) -> PathBuf {
        self.dir.path().join("next")
    }

    pub fn write_previous(&self, classes: &[ClassFileWriter]) {
        for class in classes {
            class.write_into(&self.previous()).unwrap();
        }
    }

    pub fn write_next(&self, classes: &[ClassFileWriter]) {
        for class in classes {
            class.write_into(&self.next()).unwrap();
        }
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Run `classdelta diff --previous <ws>/previous --next <ws>/next <extra>`
    /// from inside the workspace directory.
    pub fn diff(&self, extra: &[&str]) -> Output {
        let previous = self.previous();
        let next = self.next();
        let mut args = vec![
            "diff",
            "--previous",
            previous.to_str().unwrap(),
            "--next",
            next.to_str().unwrap(),
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_classdelta"))
            .current_dir(self.dir.path())
            .env("RUST_LOG", "off")
            .args(args)
            .output()
            .expect("Failed to execute CLI")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
