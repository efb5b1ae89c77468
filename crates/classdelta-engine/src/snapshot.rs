//! A loaded snapshot: classes by name, derived packages, load failures.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use classdelta_core::errors::ExErrorKind;
use classdelta_core::model::{AnnotationInfo, ClassInfo, Content, InnerClassInfo, PackageInfo};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::commands::load::OP_LOAD_SNAPSHOT;

/// A class file that could not be turned into a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    /// Dotted name derived from the file path (`com.acme.Foo`)
    pub class_name: String,
    pub path: String,
    pub reason: String,
    pub error_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub root: PathBuf,
    pub classes: BTreeMap<String, ClassInfo>,
    pub packages: BTreeMap<String, PackageInfo>,
    pub failures: Vec<LoadFailure>,
}

impl Snapshot {
    /// Assemble a snapshot from already built classes.
    ///
    /// `package-info` classes contribute their annotations to the package
    /// and are not kept as classes. Every other top-level class becomes an
    /// entry of its package.
    pub fn from_classes(
        root: impl Into<PathBuf>,
        loaded: impl IntoIterator<Item = ClassInfo>,
        failures: Vec<LoadFailure>,
    ) -> Self {
        Self::from_sources(
            root,
            loaded.into_iter().map(|class| (String::new(), class)),
            failures,
        )
    }

    /// Like [`Snapshot::from_classes`], with the file each class was read
    /// from.
    ///
    /// A class name declared by more than one file keeps its first
    /// definition and gets an `ERR_INVALID_MODEL` failure entry for each
    /// later one, so the class is reported instead of compared.
    pub fn from_sources(
        root: impl Into<PathBuf>,
        loaded: impl IntoIterator<Item = (String, ClassInfo)>,
        mut failures: Vec<LoadFailure>,
    ) -> Self {
        let root = root.into();
        let mut classes: BTreeMap<String, ClassInfo> = BTreeMap::new();
        let mut sources: BTreeMap<String, String> = BTreeMap::new();
        let mut package_annotations: BTreeMap<String, Vec<AnnotationInfo>> = BTreeMap::new();
        for (source, class) in loaded {
            if class.is_package_info() {
                package_annotations
                    .entry(class.package_name().to_string())
                    .or_default()
                    .extend(class.annotations().iter().cloned());
                continue;
            }
            let name = class.name().to_string();
            if let Some(first) = sources.get(&name) {
                let path = if source.is_empty() {
                    root.display().to_string()
                } else {
                    source
                };
                warn!(
                    op = OP_LOAD_SNAPSHOT,
                    class_name = %name,
                    path = %path,
                    first_path = %first,
                    err_code = ExErrorKind::InvalidModel.code(),
                    "duplicate class definition"
                );
                failures.push(LoadFailure {
                    reason: format!("duplicate definition of {} (first read from '{}')", name, first),
                    class_name: name,
                    path,
                    error_code: ExErrorKind::InvalidModel.code().to_string(),
                });
                continue;
            }
            sources.insert(name.clone(), source);
            classes.insert(name, class);
        }
        let packages = group_packages(&classes, package_annotations);
        Self {
            root,
            classes,
            packages,
            failures,
        }
    }

    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    pub fn package(&self, name: &str) -> Option<&PackageInfo> {
        self.packages.get(name)
    }

    pub fn failed_class_names(&self) -> BTreeSet<&str> {
        self.failures.iter().map(|f| f.class_name.as_str()).collect()
    }
}

fn group_packages(
    classes: &BTreeMap<String, ClassInfo>,
    mut annotations: BTreeMap<String, Vec<AnnotationInfo>>,
) -> BTreeMap<String, PackageInfo> {
    let mut entries: BTreeMap<String, Vec<InnerClassInfo>> = BTreeMap::new();
    for class in classes.values().filter(|c| !c.is_nested()) {
        entries
            .entry(class.package_name().to_string())
            .or_default()
            .push(InnerClassInfo::new(class.name(), class.access()));
    }
    for name in annotations.keys() {
        entries.entry(name.clone()).or_default();
    }

    entries
        .into_iter()
        .map(|(name, classes)| {
            let mut builder = PackageInfo::builder(&name);
            if let Some(package_annotations) = annotations.remove(&name) {
                builder = builder.annotations(package_annotations);
            }
            for class in classes {
                builder = builder.class(class);
            }
            (name, builder.build())
        })
        .collect()
}
