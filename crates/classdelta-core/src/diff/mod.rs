//! Kind-specific differs and the diff record model.
//!
//! Every differ starts with the content-hash fast path and then runs a
//! fixed sequence of checks:
//!
//! | Kind | Checks |
//! |---|---|
//! | Class | kind, version, modifiers, superclass, interfaces, annotations, fields, constructors, methods, inner classes |
//! | Field | modifiers, type, constant value, annotations |
//! | Constructor | modifiers, exceptions, annotations |
//! | Method | modifiers, return type, exceptions, annotations |
//! | Annotation | removed keys, added keys, changed values |
//! | Package | annotations, class entries |
//!
//! Collections go through [`crate::reconcile`]. Within one collection,
//! modified pairs are reported first (delegating to the element's own
//! differ), then removals, then additions.
//!
//! [`Diffable`] is implemented per kind on `Self`, so comparing a field
//! against a method does not type-check.

mod annotation;
mod class;
mod field;
pub mod keys;
mod member;
mod model;
mod package;

pub use annotation::diff_annotation;
pub use class::{diff_class, diff_inner_class};
pub use field::diff_field;
pub use member::{diff_constructor, diff_method};
pub use model::{Diff, DiffType, MessageArg, Severity};
pub use package::diff_package;

use crate::model::{
    AccessFlags, AnnotationInfo, ClassInfo, ConstructorInfo, Content, FieldInfo, InnerClassInfo,
    MethodInfo, PackageInfo,
};
use crate::reconcile::{reconcile, Keyed};

/// Structural comparison between two versions of the same kind of entity.
pub trait Diffable {
    fn diff(&self, next: &Self) -> Vec<Diff>;
}

macro_rules! diffable {
    ($($ty:ty => $differ:path),* $(,)?) => {
        $(
            impl Diffable for $ty {
                fn diff(&self, next: &Self) -> Vec<Diff> {
                    $differ(self, next)
                }
            }
        )*
    };
}

diffable!(
    AnnotationInfo => diff_annotation,
    ClassInfo => diff_class,
    ConstructorInfo => diff_constructor,
    FieldInfo => diff_field,
    InnerClassInfo => diff_inner_class,
    MethodInfo => diff_method,
    PackageInfo => diff_package,
);

/// Keys and severities for one reconciled collection.
#[derive(Debug, Clone, Copy)]
struct CollectionKeys {
    removed: &'static str,
    added: &'static str,
    added_severity: Severity,
}

impl CollectionKeys {
    const fn new(removed: &'static str, added: &'static str) -> Self {
        Self {
            removed,
            added,
            added_severity: Severity::Error,
        }
    }

    const fn added_as(mut self, severity: Severity) -> Self {
        self.added_severity = severity;
        self
    }
}

/// Reconcile `previous` against `next`, delegating matched pairs to
/// `on_modified` and reporting leftovers as `[owner, label(element)]`.
fn diff_collection<E, L, M>(
    out: &mut Vec<Diff>,
    owner: &str,
    previous: &[E],
    next: &[E],
    keys: CollectionKeys,
    label: L,
    mut on_modified: M,
) where
    E: Keyed,
    L: Fn(&E) -> String,
    M: FnMut(&E, &E) -> Vec<Diff>,
{
    let result = reconcile(previous, next);
    for (prev, next) in result.modified {
        out.extend(on_modified(prev, next));
    }
    for element in result.removed {
        out.push(
            Diff::error(DiffType::Removed, keys.removed)
                .with_arg(owner)
                .with_arg(label(element)),
        );
    }
    for element in result.added {
        out.push(
            Diff::new(keys.added_severity, DiffType::Added, keys.added)
                .with_arg(owner)
                .with_arg(label(element)),
        );
    }
}

fn diff_annotations(
    out: &mut Vec<Diff>,
    owner: &str,
    previous: &[AnnotationInfo],
    next: &[AnnotationInfo],
    keys: CollectionKeys,
) {
    diff_collection(
        out,
        owner,
        previous,
        next,
        keys,
        |a| format!("@{}", a.name()),
        diff_annotation,
    );
}

/// Unordered type-name sets (interfaces, exceptions).
fn diff_names(
    out: &mut Vec<Diff>,
    owner: &str,
    previous: &[String],
    next: &[String],
    keys: CollectionKeys,
) {
    diff_collection(out, owner, previous, next, keys, String::clone, |_, _| {
        Vec::new()
    });
}

fn check_modifiers(
    out: &mut Vec<Diff>,
    key: &'static str,
    owner: &str,
    previous: AccessFlags,
    next: AccessFlags,
) {
    if previous.raw() != next.raw() {
        out.push(
            Diff::error(DiffType::Modified, key)
                .with_arg(owner)
                .with_arg(previous.keywords())
                .with_arg(previous.raw())
                .with_arg(next.keywords())
                .with_arg(next.raw()),
        );
    }
}

fn check_value(out: &mut Vec<Diff>, key: &'static str, owner: &str, previous: &str, next: &str) {
    if previous != next {
        out.push(
            Diff::error(DiffType::Modified, key)
                .with_arg(owner)
                .with_arg(previous)
                .with_arg(next),
        );
    }
}
