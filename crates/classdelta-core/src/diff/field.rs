use super::{check_modifiers, check_value, diff_annotations, keys, CollectionKeys};
use super::{Diff, DiffType, MessageArg};
use crate::model::{Content, FieldInfo};

const ANNOTATION_KEYS: CollectionKeys =
    CollectionKeys::new(keys::FIELD_ANNOTATION_REMOVED, keys::FIELD_ANNOTATION_ADDED);

pub fn diff_field(previous: &FieldInfo, next: &FieldInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    let name = previous.name();

    check_modifiers(
        &mut out,
        keys::FIELD_MODIFIERS_MODIFIED,
        name,
        previous.access(),
        next.access(),
    );
    check_value(
        &mut out,
        keys::FIELD_TYPE_MODIFIED,
        name,
        previous.field_type(),
        next.field_type(),
    );
    if previous.value() != next.value() {
        out.push(
            Diff::error(DiffType::Modified, keys::FIELD_VALUE_MODIFIED)
                .with_arg(name)
                .with_arg(constant_arg(previous))
                .with_arg(constant_arg(next)),
        );
    }
    diff_annotations(
        &mut out,
        name,
        previous.annotations(),
        next.annotations(),
        ANNOTATION_KEYS,
    );
    out
}

fn constant_arg(field: &FieldInfo) -> MessageArg {
    field.value().map(ToString::to_string).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccessFlags;

    fn constant(name: &str) -> crate::model::field::FieldInfoBuilder {
        FieldInfo::builder(name, "java.lang.String")
            .access(AccessFlags::PUBLIC | AccessFlags::STATIC | AccessFlags::FINAL)
    }

    #[test]
    fn test_value_added_to_constant() {
        let prev = constant("x").build();
        let next = constant("x").value("value").build();
        let diffs = diff_field(&prev, &next);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].message_key(), "field.value.modified");
        assert_eq!(
            diffs[0].args(),
            [
                MessageArg::from("x"),
                MessageArg::Null,
                MessageArg::from("value")
            ]
        );
    }

    #[test]
    fn test_modifiers_then_type() {
        let prev = FieldInfo::builder("count", "int").build();
        let next = FieldInfo::builder("count", "long")
            .access(AccessFlags::PRIVATE)
            .build();
        let diffs = diff_field(&prev, &next);
        let keys: Vec<_> = diffs.iter().map(|d| d.message_key()).collect();
        assert_eq!(keys, ["field.modifiers.modified", "field.type.modified"]);
        assert_eq!(diffs[0].args()[1], MessageArg::from("public"));
        assert_eq!(diffs[0].args()[2], MessageArg::Int(1));
        assert_eq!(diffs[0].args()[3], MessageArg::from("private"));
    }

    #[test]
    fn test_identical_fields_produce_nothing() {
        let prev = constant("x").value("a").build();
        let next = constant("x").value("a").build();
        assert!(diff_field(&prev, &next).is_empty());
    }
}
