use super::keys;
use super::{Diff, DiffType};
use crate::model::{AnnotationInfo, Content};

/// Compare two annotations with the same name, key by key.
pub fn diff_annotation(previous: &AnnotationInfo, next: &AnnotationInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    let name = previous.name();

    for key in previous.values().keys() {
        if next.value(key).is_none() {
            out.push(
                Diff::error(DiffType::Removed, keys::ANNOTATION_VALUE_REMOVED)
                    .with_arg(name)
                    .with_arg(key),
            );
        }
    }
    for key in next.values().keys() {
        if previous.value(key).is_none() {
            out.push(
                Diff::error(DiffType::Added, keys::ANNOTATION_VALUE_ADDED)
                    .with_arg(name)
                    .with_arg(key),
            );
        }
    }
    for (key, old) in previous.values() {
        if let Some(new) = next.value(key) {
            if old != new {
                out.push(
                    Diff::error(DiffType::Modified, keys::ANNOTATION_VALUE_MODIFIED)
                        .with_arg(name)
                        .with_arg(key)
                        .with_arg(old.type_name())
                        .with_arg(old.to_string())
                        .with_arg(new.type_name())
                        .with_arg(new.to_string()),
                );
            }
        }
    }
    out
}
