use tracing::trace;

use super::{
    check_modifiers, check_value, diff_annotations, diff_collection, diff_constructor,
    diff_field, diff_method, diff_names, keys, CollectionKeys, Diff, DiffType,
};
use crate::model::{ClassInfo, Content, InnerClassInfo};

const INTERFACE_KEYS: CollectionKeys =
    CollectionKeys::new(keys::CLASS_INTERFACE_REMOVED, keys::CLASS_INTERFACE_ADDED);
const ANNOTATION_KEYS: CollectionKeys =
    CollectionKeys::new(keys::CLASS_ANNOTATION_REMOVED, keys::CLASS_ANNOTATION_ADDED);
const FIELD_KEYS: CollectionKeys =
    CollectionKeys::new(keys::CLASS_FIELD_REMOVED, keys::CLASS_FIELD_ADDED);
const CONSTRUCTOR_KEYS: CollectionKeys =
    CollectionKeys::new(keys::CLASS_CONSTRUCTOR_REMOVED, keys::CLASS_CONSTRUCTOR_ADDED);
const METHOD_KEYS: CollectionKeys =
    CollectionKeys::new(keys::CLASS_METHOD_REMOVED, keys::CLASS_METHOD_ADDED);
const INNER_CLASS_KEYS: CollectionKeys =
    CollectionKeys::new(keys::CLASS_INNERCLASS_REMOVED, keys::CLASS_INNERCLASS_ADDED);

/// Compare two versions of the same class.
pub fn diff_class(previous: &ClassInfo, next: &ClassInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    let name = previous.name();
    trace!(class_name = name, "class content differs");

    if previous.kind() != next.kind() {
        out.push(
            Diff::error(DiffType::Modified, keys::CLASS_TYPE_MODIFIED)
                .with_arg(name)
                .with_arg(previous.kind().label())
                .with_arg(next.kind().label()),
        );
    }
    if previous.version() != next.version() {
        out.push(
            Diff::warning(DiffType::Modified, keys::CLASS_VERSION_MODIFIED)
                .with_arg(name)
                .with_arg(previous.version())
                .with_arg(next.version()),
        );
    }
    check_modifiers(
        &mut out,
        keys::CLASS_MODIFIERS_MODIFIED,
        name,
        previous.access(),
        next.access(),
    );
    check_value(
        &mut out,
        keys::CLASS_SUPERCLASS_MODIFIED,
        name,
        previous.superclass(),
        next.superclass(),
    );
    diff_names(
        &mut out,
        name,
        previous.interfaces(),
        next.interfaces(),
        INTERFACE_KEYS,
    );
    diff_annotations(
        &mut out,
        name,
        previous.annotations(),
        next.annotations(),
        ANNOTATION_KEYS,
    );
    diff_collection(
        &mut out,
        name,
        previous.fields(),
        next.fields(),
        FIELD_KEYS,
        |f| f.name().to_string(),
        diff_field,
    );
    diff_collection(
        &mut out,
        name,
        previous.constructors(),
        next.constructors(),
        CONSTRUCTOR_KEYS,
        |c| c.name().to_string(),
        diff_constructor,
    );
    diff_collection(
        &mut out,
        name,
        previous.methods(),
        next.methods(),
        METHOD_KEYS,
        |m| m.name().to_string(),
        diff_method,
    );
    diff_collection(
        &mut out,
        name,
        previous.inner_classes(),
        next.inner_classes(),
        INNER_CLASS_KEYS,
        |ic| ic.name().to_string(),
        diff_inner_class,
    );
    out
}

/// An inner class entry only carries modifiers of its own; its members are
/// compared when the inner class itself is diffed.
pub fn diff_inner_class(previous: &InnerClassInfo, next: &InnerClassInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    check_modifiers(
        &mut out,
        keys::INNERCLASS_MODIFIERS_MODIFIED,
        previous.name(),
        previous.access(),
        next.access(),
    );
    out
}
