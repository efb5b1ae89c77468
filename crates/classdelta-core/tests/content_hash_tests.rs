//! Content-hash determinism, order independence and sensitivity.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use classdelta_core::diff::diff_class;
use classdelta_core::model::{
    AccessFlags, AnnotationInfo, AnnotationValue, ClassInfo, Content, FieldInfo, MethodInfo,
};
use common::public_class;
use proptest::prelude::*;

const INTERFACES: &[&str] = &[
    "java.io.Closeable",
    "java.io.Serializable",
    "java.lang.Cloneable",
    "java.lang.Comparable<T>",
    "java.util.RandomAccess",
];

fn class_with(interfaces: &[String], methods: &[String]) -> ClassInfo {
    let mut builder = public_class("org.example.Widget").type_parameters("<T>");
    for interface in interfaces {
        builder = builder.interface(interface);
    }
    for method in methods {
        builder = builder.method(MethodInfo::builder(method.as_str()).build_method());
    }
    builder.build()
}

fn names() -> Vec<String> {
    INTERFACES.iter().map(|s| s.to_string()).collect()
}

/// `get()` twice (covariant bridge pair), a repeated annotation and two
/// plain methods.
fn overloads() -> Vec<(&'static str, &'static str)> {
    vec![
        ("get", "java.lang.Object"),
        ("get", "java.lang.String"),
        ("@", "first"),
        ("@", "second"),
        ("size", "int"),
        ("clear", "void"),
    ]
}

fn class_with_overloads(members: &[(&str, &str)]) -> ClassInfo {
    members
        .iter()
        .fold(public_class("org.example.Box"), |builder, (name, detail)| {
            if *name == "@" {
                builder.annotation(
                    AnnotationInfo::builder("org.example.Tag")
                        .value("value", AnnotationValue::string(*detail))
                        .build(),
                )
            } else {
                builder.method(MethodInfo::builder(*name).return_type(*detail).build_method())
            }
        })
        .build()
}

proptest! {
    #[test]
    fn interface_order_does_not_change_hash(shuffled in Just(names()).prop_shuffle()) {
        let sorted = class_with(&names(), &[]);
        let permuted = class_with(&shuffled, &[]);
        prop_assert_eq!(sorted.content_hash(), permuted.content_hash());
        prop_assert!(diff_class(&sorted, &permuted).is_empty());
    }

    #[test]
    fn member_order_does_not_change_hash(
        methods in prop::collection::btree_set("[a-z]{1,6}", 0..6),
        seed in any::<u64>(),
    ) {
        let forward: Vec<String> = methods.iter().cloned().collect();
        let mut rotated = forward.clone();
        if !rotated.is_empty() {
            let by = (seed as usize) % rotated.len();
            rotated.rotate_left(by);
        }
        let a = class_with(&[], &forward);
        let b = class_with(&[], &rotated);
        prop_assert_eq!(a.content(), b.content());
        prop_assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn same_identity_members_order_does_not_change_hash(
        shuffled in Just(overloads()).prop_shuffle(),
    ) {
        let declared = class_with_overloads(&overloads());
        let permuted = class_with_overloads(&shuffled);
        prop_assert_eq!(declared.content(), permuted.content());
        prop_assert_eq!(declared.content_hash(), permuted.content_hash());
        prop_assert!(diff_class(&declared, &permuted).is_empty());
    }

    #[test]
    fn diffing_a_class_against_itself_is_empty(
        methods in prop::collection::vec("[a-z]{1,6}", 0..6),
        version in 45u32..70,
    ) {
        let class = public_class("org.example.Gen")
            .version(version)
            .method(MethodInfo::builder("base").build_method());
        let class = methods.iter().fold(class, |builder, name| {
            builder.method(MethodInfo::builder(name.as_str()).build_method())
        });
        let built = class.build();
        prop_assert!(diff_class(&built, &built.clone()).is_empty());
    }
}

#[test]
fn test_hash_is_stable_across_builds() {
    let build = || {
        public_class("org.example.Foo")
            .annotation(AnnotationInfo::builder("java.lang.Deprecated").build())
            .field(FieldInfo::builder("id", "long").build())
            .build()
    };
    let a = build();
    let b = build();
    assert_eq!(a.content_hash(), b.content_hash());
    assert_eq!(a.content_hash().len(), 64);
}

#[test]
fn test_hash_is_sensitive_to_modifiers() {
    let a = public_class("org.example.Foo").build();
    let b = public_class("org.example.Foo")
        .access(AccessFlags::PUBLIC | AccessFlags::FINAL)
        .build();
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn test_enum_constants_keep_declaration_order() {
    let constant = |name: &str| {
        FieldInfo::builder(name, "org.example.Color")
            .access(
                AccessFlags::PUBLIC | AccessFlags::STATIC | AccessFlags::FINAL | AccessFlags::ENUM,
            )
            .build()
    };
    let enum_class = |order: [&str; 2]| {
        ClassInfo::builder("org.example.Color")
            .access(AccessFlags::PUBLIC | AccessFlags::FINAL | AccessFlags::ENUM)
            .field(constant(order[0]))
            .field(constant(order[1]))
            .build()
    };
    let rgb = enum_class(["RED", "GREEN"]);
    let grb = enum_class(["GREEN", "RED"]);
    assert_eq!(rgb.fields()[0].name(), "RED");
    assert_ne!(rgb.content_hash(), grb.content_hash());
}

#[test]
fn test_non_constant_field_value_is_invisible() {
    let a = FieldInfo::builder("label", "java.lang.String")
        .value("one")
        .build();
    let b = FieldInfo::builder("label", "java.lang.String")
        .value("two")
        .build();
    assert!(a.value().is_none());
    assert_eq!(a.content_hash(), b.content_hash());
}
