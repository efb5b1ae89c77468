use super::{diff_annotations, diff_collection, keys, CollectionKeys, Diff, Severity};
use crate::model::{Content, PackageInfo};

const ANNOTATION_KEYS: CollectionKeys =
    CollectionKeys::new(keys::PACKAGE_ANNOTATION_REMOVED, keys::PACKAGE_ANNOTATION_ADDED);
const CLASS_KEYS: CollectionKeys =
    CollectionKeys::new(keys::PACKAGE_CLASS_REMOVED, keys::PACKAGE_CLASS_ADDED)
        .added_as(Severity::Info);

/// Package-level changes: annotations from `package-info` and the set of
/// classes the package contains. Class entries present on both sides
/// produce nothing here; the class differ covers them.
pub fn diff_package(previous: &PackageInfo, next: &PackageInfo) -> Vec<Diff> {
    let mut out = Vec::new();
    if previous.content_hash() == next.content_hash() {
        return out;
    }
    let name = previous.name();

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
        previous.classes(),
        next.classes(),
        CLASS_KEYS,
        |c| c.name().to_string(),
        |_, _| Vec::new(),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffType;
    use crate::model::{AccessFlags, InnerClassInfo};

    #[test]
    fn test_added_class_is_info_removed_is_error() {
        let prev = PackageInfo::builder("com.acme")
            .class(InnerClassInfo::new("com.acme.Old", AccessFlags::PUBLIC))
            .build();
        let next = PackageInfo::builder("com.acme")
            .class(InnerClassInfo::new("com.acme.New", AccessFlags::PUBLIC))
            .build();
        let diffs = diff_package(&prev, &next);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].message_key(), "package.class.removed");
        assert_eq!(diffs[0].severity(), Severity::Error);
        assert_eq!(diffs[1].message_key(), "package.class.added");
        assert_eq!(diffs[1].severity(), Severity::Info);
        assert_eq!(diffs[1].diff_type(), DiffType::Added);
    }

    #[test]
    fn test_modified_class_entry_is_silent() {
        let prev = PackageInfo::builder("com.acme")
            .class(InnerClassInfo::new("com.acme.Foo", AccessFlags::PUBLIC))
            .build();
        let next = PackageInfo::builder("com.acme")
            .class(InnerClassInfo::new(
                "com.acme.Foo",
                AccessFlags::PUBLIC | AccessFlags::FINAL,
            ))
            .build();
        assert!(diff_package(&prev, &next).is_empty());
    }
}
