#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use classdelta_core::diff::{diff_class, DiffType, MessageArg, Severity};
use classdelta_core::model::{
    AccessFlags, AnnotationInfo, AnnotationValue, ClassInfo, ConstructorInfo, Content, FieldInfo,
    InnerClassInfo, MethodInfo,
};
use common::{args, keys, public_class};
use pretty_assertions::assert_eq;

#[test]
fn test_superclass_change_is_single_error() {
    let prev = public_class("org.example.Foo")
        .superclass("java.lang.Object")
        .build();
    let next = public_class("org.example.Foo")
        .superclass("org.example.Bar")
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].severity(), Severity::Error);
    assert_eq!(diffs[0].diff_type(), DiffType::Modified);
    assert_eq!(diffs[0].message_key(), "class.superclass.modified");
    assert_eq!(
        args(&diffs[0]),
        ["org.example.Foo", "java.lang.Object", "org.example.Bar"]
    );
}

#[test]
fn test_interface_swap_is_removed_then_added() {
    let prev = public_class("org.example.Foo")
        .interface("java.io.Serializable")
        .interface("java.lang.Cloneable")
        .build();
    let next = public_class("org.example.Foo")
        .interface("java.io.Serializable")
        .interface("java.io.Closeable")
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["class.interface.removed", "class.interface.added"]);
    assert_eq!(args(&diffs[0]), ["org.example.Foo", "java.lang.Cloneable"]);
    assert_eq!(args(&diffs[1]), ["org.example.Foo", "java.io.Closeable"]);
    assert!(diffs.iter().all(|d| d.severity() == Severity::Error));
}

#[test]
fn test_version_only_change_is_single_warning() {
    let prev = public_class("org.example.Foo").version(52).build();
    let next = public_class("org.example.Foo").version(55).build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].severity(), Severity::Warning);
    assert_eq!(diffs[0].message_key(), "class.version.modified");
    assert_eq!(
        diffs[0].args(),
        [
            MessageArg::from("org.example.Foo"),
            MessageArg::Int(52),
            MessageArg::Int(55)
        ]
    );
}

#[test]
fn test_diff_against_self_is_empty() {
    let class = public_class("org.example.Foo")
        .interface("java.io.Serializable")
        .field(FieldInfo::builder("name", "java.lang.String").build())
        .method(MethodInfo::builder("run").build_method())
        .build();
    assert!(diff_class(&class, &class.clone()).is_empty());
}

#[test]
fn test_kind_change_uses_lowercase_labels() {
    let prev = public_class("org.example.Shape").build();
    let next = ClassInfo::builder("org.example.Shape")
        .access(AccessFlags::PUBLIC | AccessFlags::INTERFACE | AccessFlags::ABSTRACT)
        .version(52)
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["class.type.modified"]);
    assert_eq!(args(&diffs[0]), ["org.example.Shape", "class", "interface"]);
}

#[test]
fn test_modifier_change_renders_keywords_and_flags() {
    let prev = public_class("org.example.Foo").build();
    let next = public_class("org.example.Foo")
        .access(AccessFlags::PUBLIC | AccessFlags::FINAL | AccessFlags::SYNCHRONIZED)
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["class.modifiers.modified"]);
    assert_eq!(
        args(&diffs[0]),
        ["org.example.Foo", "public", "1", "public final", "17"]
    );
}

#[test]
fn test_changed_parameter_list_is_removed_and_added() {
    let prev = public_class("org.example.Foo")
        .method(MethodInfo::builder("run").argument_types("int").build_method())
        .build();
    let next = public_class("org.example.Foo")
        .method(MethodInfo::builder("run").argument_types("long").build_method())
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["class.method.removed", "class.method.added"]);
    assert_eq!(args(&diffs[0]), ["org.example.Foo", "run(int)"]);
    assert_eq!(args(&diffs[1]), ["org.example.Foo", "run(long)"]);
}

#[test]
fn test_matched_members_delegate_to_their_differ() {
    let prev = public_class("org.example.Foo")
        .field(FieldInfo::builder("size", "int").build())
        .method(MethodInfo::builder("get").return_type("int").build_method())
        .build();
    let next = public_class("org.example.Foo")
        .field(FieldInfo::builder("size", "long").build())
        .method(MethodInfo::builder("get").return_type("long").build_method())
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["field.type.modified", "method.type.modified"]);
    assert_eq!(args(&diffs[0]), ["size", "int", "long"]);
    assert_eq!(args(&diffs[1]), ["get()", "int", "long"]);
}

#[test]
fn test_nested_annotation_values_are_compared() {
    let size = |max: i32| {
        AnnotationInfo::builder("javax.validation.Size")
            .value("max", AnnotationValue::int(max))
            .build()
    };
    let prev = public_class("org.example.Foo")
        .field(FieldInfo::builder("name", "java.lang.String").annotation(size(10)).build())
        .build();
    let next = public_class("org.example.Foo")
        .field(FieldInfo::builder("name", "java.lang.String").annotation(size(20)).build())
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["annotation.value.modified"]);
    assert_eq!(
        args(&diffs[0]),
        ["javax.validation.Size", "max", "int", "10", "int", "20"]
    );
}

#[test]
fn test_string_array_with_embedded_delimiter_is_a_change() {
    let tags = |values: &[&str]| {
        AnnotationInfo::builder("org.example.Tags")
            .value(
                "value",
                AnnotationValue::Array(values.iter().map(|v| AnnotationValue::string(*v)).collect()),
            )
            .build()
    };
    let prev = public_class("org.example.Foo")
        .field(FieldInfo::builder("label", "java.lang.String").annotation(tags(&["a, b"])).build())
        .build();
    let next = public_class("org.example.Foo")
        .field(FieldInfo::builder("label", "java.lang.String").annotation(tags(&["a", "b"])).build())
        .build();

    assert_ne!(prev.content_hash(), next.content_hash());
    let diffs = diff_class(&prev, &next);
    assert_eq!(keys(&diffs), ["annotation.value.modified"]);
    assert_eq!(
        args(&diffs[0]),
        [
            "org.example.Tags",
            "value",
            "java.lang.String[]",
            "[a, b]",
            "java.lang.String[]",
            "[a, b]"
        ]
    );
}

#[test]
fn test_checks_follow_fixed_sequence() {
    let prev = public_class("org.example.Foo")
        .version(52)
        .superclass("java.lang.Object")
        .annotation(AnnotationInfo::builder("java.lang.Deprecated").build())
        .field(FieldInfo::builder("legacy", "int").build())
        .method(MethodInfo::builder("close").build_method())
        .inner_class(InnerClassInfo::new(
            "org.example.Foo$Entry",
            AccessFlags::PUBLIC | AccessFlags::STATIC,
        ))
        .build();
    let next = public_class("org.example.Foo")
        .access(AccessFlags::PUBLIC | AccessFlags::ABSTRACT | AccessFlags::SYNCHRONIZED)
        .version(61)
        .superclass("org.example.Base")
        .interface("java.lang.AutoCloseable")
        .constructor(ConstructorInfo::builder().argument_types("int").build_constructor())
        .method(
            MethodInfo::builder("close")
                .exceptions(["java.lang.Exception"])
                .build_method(),
        )
        .inner_class(InnerClassInfo::new(
            "org.example.Foo$Entry",
            AccessFlags::PRIVATE | AccessFlags::STATIC,
        ))
        .build();

    let diffs = diff_class(&prev, &next);
    assert_eq!(
        keys(&diffs),
        [
            "class.version.modified",
            "class.modifiers.modified",
            "class.superclass.modified",
            "class.interface.added",
            "class.annotation.removed",
            "class.field.removed",
            "class.constructor.added",
            "method.exception.added",
            "innerclass.modifiers.modified",
        ]
    );
    assert_eq!(args(&diffs[4]), ["org.example.Foo", "@java.lang.Deprecated"]);
    assert_eq!(args(&diffs[6]), ["org.example.Foo", "<init>(int)"]);
    assert_eq!(args(&diffs[8])[0], "org.example.Foo$Entry");
}
