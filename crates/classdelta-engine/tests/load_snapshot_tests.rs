#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use classdelta_core::logging_facility::test_capture::init_test_capture;
use classdelta_core::model::{AccessFlags, Content};
use classdelta_engine::{load_snapshot, ClassFilter};
use classdelta_reader::writer::{AnnotationDef, ClassFileWriter, MethodDef};
use common::{write_classes, write_raw, Workspace};
use pretty_assertions::assert_eq;

#[test]
fn test_load_snapshot_walks_package_directories() {
    let ws = Workspace::new();
    ws.write_previous(&[
        ClassFileWriter::new("com/acme/Foo").inner_class("com/acme/Foo$Inner", AccessFlags::PUBLIC),
        ClassFileWriter::new("com/acme/Foo$Inner"),
        ClassFileWriter::new("com/acme/util/Bar").method(MethodDef::new("run", "()V")),
    ]);
    write_raw(&ws.previous(), "com/acme/README.txt", b"not a class");

    let snapshot = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();

    let classes: Vec<_> = snapshot.classes.keys().cloned().collect();
    assert_eq!(
        classes,
        vec!["com.acme.Foo", "com.acme.Foo$Inner", "com.acme.util.Bar"]
    );
    let packages: Vec<_> = snapshot.packages.keys().cloned().collect();
    assert_eq!(packages, vec!["com.acme", "com.acme.util"]);

    let acme: Vec<_> = snapshot.packages["com.acme"]
        .classes()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(acme, vec!["com.acme.Foo"]);
    assert!(snapshot.failures.is_empty());
}

#[test]
fn test_corrupt_class_becomes_failure_entry() {
    let ws = Workspace::new();
    ws.write_previous(&[ClassFileWriter::new("com/acme/Good")]);
    write_raw(&ws.previous(), "com/acme/Broken.class", b"not a class file");

    let snapshot = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();

    assert_eq!(snapshot.classes.len(), 1);
    assert_eq!(snapshot.failures.len(), 1);
    let failure = &snapshot.failures[0];
    assert_eq!(failure.class_name, "com.acme.Broken");
    assert_eq!(failure.error_code, "ERR_MALFORMED_CLASS_FILE");
    assert!(failure.reason.contains("bad magic"), "{}", failure.reason);
    assert!(failure.path.ends_with("Broken.class"));

    let entries: Vec<_> = snapshot.packages["com.acme"]
        .classes()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(entries, vec!["com.acme.Good"]);
}

#[test]
fn test_load_failure_is_logged_as_warning() {
    let capture = init_test_capture();
    let ws = Workspace::new();
    write_raw(
        &ws.previous(),
        "org/logged/Unreadable.class",
        &[0xCA, 0xFE, 0xBA, 0xBE, 0x00],
    );

    let snapshot = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();
    assert_eq!(snapshot.failures.len(), 1);

    let warnings = capture.count_events(|e| {
        e.level == tracing::Level::WARN
            && e.op.as_deref() == Some("load_snapshot")
            && e.field("class_name") == Some("org.logged.Unreadable")
    });
    assert_eq!(warnings, 1);
}

#[test]
fn test_second_file_for_same_class_is_a_failure() {
    let capture = init_test_capture();
    let ws = Workspace::new();
    let original = ClassFileWriter::new("org/dup/Twice");
    write_classes(&ws.previous(), &[original.clone()]);
    write_raw(&ws.previous(), "zcopy/Twice.class", &original.to_bytes());

    let snapshot = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();
    assert_eq!(snapshot.classes.len(), 1);
    assert!(snapshot.class("org.dup.Twice").is_some());
    assert_eq!(snapshot.failures.len(), 1);
    let failure = &snapshot.failures[0];
    assert_eq!(failure.class_name, "org.dup.Twice");
    assert_eq!(failure.error_code, "ERR_INVALID_MODEL");
    assert!(failure.path.ends_with("Twice.class"));
    assert!(failure.path.contains("zcopy"));

    let warnings = capture.count_events(|e| {
        e.level == tracing::Level::WARN
            && e.op.as_deref() == Some("load_snapshot")
            && e.field("class_name") == Some("org.dup.Twice")
    });
    assert_eq!(warnings, 1);
}

#[test]
fn test_filter_limits_loaded_classes() {
    let ws = Workspace::new();
    ws.write_previous(&[
        ClassFileWriter::new("com/acme/api/Service"),
        ClassFileWriter::new("com/acme/internal/ServiceImpl"),
        ClassFileWriter::new("org/other/Thing"),
    ]);
    let filter = ClassFilter::new(
        vec!["com.acme.".to_string()],
        vec!["com.acme.internal.".to_string()],
    );

    let snapshot = load_snapshot(&ws.previous(), &filter).unwrap();

    let classes: Vec<_> = snapshot.classes.keys().cloned().collect();
    assert_eq!(classes, vec!["com.acme.api.Service"]);
    let packages: Vec<_> = snapshot.packages.keys().cloned().collect();
    assert_eq!(packages, vec!["com.acme.api"]);
}

#[test]
fn test_package_info_annotations_attach_to_package() {
    let ws = Workspace::new();
    ws.write_previous(&[
        ClassFileWriter::new("com/acme/package-info")
            .access(AccessFlags::INTERFACE | AccessFlags::ABSTRACT | AccessFlags::SYNTHETIC)
            .annotation(AnnotationDef::new(
                "Ljavax/annotation/ParametersAreNonnullByDefault;",
            )),
        ClassFileWriter::new("com/acme/Foo"),
    ]);

    let snapshot = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();

    assert!(!snapshot.classes.contains_key("com.acme.package-info"));
    let acme = &snapshot.packages["com.acme"];
    let names: Vec<_> = acme.annotations().iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["javax.annotation.ParametersAreNonnullByDefault"]);
    assert_eq!(acme.classes().len(), 1);
}

#[test]
fn test_loading_twice_yields_identical_hashes() {
    let ws = Workspace::new();
    let classes: Vec<_> = (0..12)
        .map(|i| {
            ClassFileWriter::new(format!("com/acme/gen/Type{}", i))
                .method(MethodDef::new(format!("m{}", i), "(I)V"))
        })
        .collect();
    write_classes(&ws.previous(), &classes);

    let a = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();
    let b = load_snapshot(&ws.previous(), &ClassFilter::default()).unwrap();

    assert_eq!(a.classes.len(), 12);
    let hashes_a: Vec<_> = a.classes.values().map(|c| c.content_hash().to_string()).collect();
    let hashes_b: Vec<_> = b.classes.values().map(|c| c.content_hash().to_string()).collect();
    assert_eq!(hashes_a, hashes_b);
}

#[test]
fn test_root_that_is_a_file_is_rejected() {
    let ws = Workspace::new();
    write_raw(&ws.previous(), "plain.txt", b"x");

    let err = load_snapshot(&ws.previous().join("plain.txt"), &ClassFilter::default())
        .unwrap_err();
    assert_eq!(err.code(), "ERR_IO");
}
