use super::{check_modifiers, check_value, diff_annotations, diff_names, keys, CollectionKeys};
use super::Diff;
use crate::model::{ConstructorInfo, Content, MethodInfo};

const CONSTRUCTOR_EXCEPTION_KEYS: CollectionKeys = CollectionKeys::new(
    keys::CONSTRUCTOR_EXCEPTION_REMOVED,
    keys::CONSTRUCTOR_EXCEPTION_ADDED,
);
const CONSTRUCTOR_ANNOTATION_KEYS: CollectionKeys = CollectionKeys::new(
    keys::CONSTRUCTOR_ANNOTATION_REMOVED,
    keys::CONSTRUCTOR_ANNOTATION_ADDED,
);
const METHOD_EXCEPTION_KEYS: CollectionKeys =
    CollectionKeys::new(keys::METHOD_EXCEPTION_REMOVED, keys::METHOD_EXCEPTION_ADDED);
const METHOD_ANNOTATION_KEYS: CollectionKeys =
    CollectionKeys::new(keys::METHOD_ANNOTATION_REMOVED, keys::METHOD_ANNOTATION_ADDED);

pub fn diff_constructor(previous: &ConstructorInfo, next: &ConstructorInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    let name = previous.name();

    check_modifiers(
        &mut out,
        keys::CONSTRUCTOR_MODIFIERS_MODIFIED,
        name,
        previous.access(),
        next.access(),
    );
    diff_names(
        &mut out,
        name,
        previous.exceptions(),
        next.exceptions(),
        CONSTRUCTOR_EXCEPTION_KEYS,
    );
    diff_annotations(
        &mut out,
        name,
        previous.annotations(),
        next.annotations(),
        CONSTRUCTOR_ANNOTATION_KEYS,
    );
    out
}

pub fn diff_method(previous: &MethodInfo, next: &MethodInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    let name = previous.name();

    check_modifiers(
        &mut out,
        keys::METHOD_MODIFIERS_MODIFIED,
        name,
        previous.access(),
        next.access(),
    );
    check_value(
        &mut out,
        keys::METHOD_TYPE_MODIFIED,
        name,
        previous.return_type(),
        next.return_type(),
    );
    diff_names(
        &mut out,
        name,
        previous.exceptions(),
        next.exceptions(),
        METHOD_EXCEPTION_KEYS,
    );
    diff_annotations(
        &mut out,
        name,
        previous.annotations(),
        next.annotations(),
        METHOD_ANNOTATION_KEYS,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{DiffType, MessageArg};
    use crate::model::{AccessFlags, AnnotationInfo};

    #[test]
    fn test_method_check_order() {
        let prev = MethodInfo::builder("load")
            .return_type("int")
            .argument_types("java.lang.String")
            .exceptions(["java/io/IOException"])
            .build_method();
        let next = MethodInfo::builder("load")
            .access(AccessFlags::PUBLIC | AccessFlags::SYNCHRONIZED)
            .return_type("long")
            .argument_types("java.lang.String")
            .exceptions(["java/sql/SQLException"])
            .annotation(AnnotationInfo::builder("java.lang.Deprecated").build())
            .build_method();

        let diffs = diff_method(&prev, &next);
        let keys: Vec<_> = diffs.iter().map(|d| d.message_key()).collect();
        assert_eq!(
            keys,
            [
                "method.modifiers.modified",
                "method.type.modified",
                "method.exception.removed",
                "method.exception.added",
                "method.annotation.added",
            ]
        );
        assert_eq!(diffs[0].args()[0], MessageArg::from("load(java.lang.String)"));
        assert_eq!(diffs[2].diff_type(), DiffType::Removed);
        assert_eq!(diffs[2].args()[1], MessageArg::from("java.io.IOException"));
        assert_eq!(diffs[4].args()[1], MessageArg::from("@java.lang.Deprecated"));
    }

    #[test]
    fn test_constructor_exception_added() {
        let prev = ConstructorInfo::builder().argument_types("int").build_constructor();
        let next = ConstructorInfo::builder()
            .argument_types("int")
            .exceptions(["java.io.IOException"])
            .build_constructor();
        let diffs = diff_constructor(&prev, &next);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].message_key(), "constructor.exception.added");
        assert_eq!(diffs[0].args()[0], MessageArg::from("<init>(int)"));
    }
}
