//! Stable message keys, one per check.

pub const CLASS_TYPE_MODIFIED: &str = "class.type.modified";
pub const CLASS_VERSION_MODIFIED: &str = "class.version.modified";
pub const CLASS_MODIFIERS_MODIFIED: &str = "class.modifiers.modified";
pub const CLASS_SUPERCLASS_MODIFIED: &str = "class.superclass.modified";
pub const CLASS_INTERFACE_REMOVED: &str = "class.interface.removed";
pub const CLASS_INTERFACE_ADDED: &str = "class.interface.added";
pub const CLASS_ANNOTATION_REMOVED: &str = "class.annotation.removed";
pub const CLASS_ANNOTATION_ADDED: &str = "class.annotation.added";
pub const CLASS_FIELD_REMOVED: &str = "class.field.removed";
pub const CLASS_FIELD_ADDED: &str = "class.field.added";
pub const CLASS_CONSTRUCTOR_REMOVED: &str = "class.constructor.removed";
pub const CLASS_CONSTRUCTOR_ADDED: &str = "class.constructor.added";
pub const CLASS_METHOD_REMOVED: &str = "class.method.removed";
pub const CLASS_METHOD_ADDED: &str = "class.method.added";
pub const CLASS_INNERCLASS_REMOVED: &str = "class.innerclass.removed";
pub const CLASS_INNERCLASS_ADDED: &str = "class.innerclass.added";

pub const INNERCLASS_MODIFIERS_MODIFIED: &str = "innerclass.modifiers.modified";

pub const FIELD_MODIFIERS_MODIFIED: &str = "field.modifiers.modified";
pub const FIELD_TYPE_MODIFIED: &str = "field.type.modified";
pub const FIELD_VALUE_MODIFIED: &str = "field.value.modified";
pub const FIELD_ANNOTATION_REMOVED: &str = "field.annotation.removed";
pub const FIELD_ANNOTATION_ADDED: &str = "field.annotation.added";

pub const CONSTRUCTOR_MODIFIERS_MODIFIED: &str = "constructor.modifiers.modified";
pub const CONSTRUCTOR_EXCEPTION_REMOVED: &str = "constructor.exception.removed";
pub const CONSTRUCTOR_EXCEPTION_ADDED: &str = "constructor.exception.added";
pub const CONSTRUCTOR_ANNOTATION_REMOVED: &str = "constructor.annotation.removed";
pub const CONSTRUCTOR_ANNOTATION_ADDED: &str = "constructor.annotation.added";

pub const METHOD_MODIFIERS_MODIFIED: &str = "method.modifiers.modified";
pub const METHOD_TYPE_MODIFIED: &str = "method.type.modified";
pub const METHOD_EXCEPTION_REMOVED: &str = "method.exception.removed";
pub const METHOD_EXCEPTION_ADDED: &str = "method.exception.added";
pub const METHOD_ANNOTATION_REMOVED: &str = "method.annotation.removed";
pub const METHOD_ANNOTATION_ADDED: &str = "method.annotation.added";

pub const ANNOTATION_VALUE_REMOVED: &str = "annotation.value.removed";
pub const ANNOTATION_VALUE_ADDED: &str = "annotation.value.added";
pub const ANNOTATION_VALUE_MODIFIED: &str = "annotation.value.modified";

pub const PACKAGE_ANNOTATION_REMOVED: &str = "package.annotation.removed";
pub const PACKAGE_ANNOTATION_ADDED: &str = "package.annotation.added";
pub const PACKAGE_CLASS_REMOVED: &str = "package.class.removed";
pub const PACKAGE_CLASS_ADDED: &str = "package.class.added";

/// Every key, in check order.
pub const ALL: &[&str] = &[
    CLASS_TYPE_MODIFIED,
    CLASS_VERSION_MODIFIED,
    CLASS_MODIFIERS_MODIFIED,
    CLASS_SUPERCLASS_MODIFIED,
    CLASS_INTERFACE_REMOVED,
    CLASS_INTERFACE_ADDED,
    CLASS_ANNOTATION_REMOVED,
    CLASS_ANNOTATION_ADDED,
    CLASS_FIELD_REMOVED,
    CLASS_FIELD_ADDED,
    CLASS_CONSTRUCTOR_REMOVED,
    CLASS_CONSTRUCTOR_ADDED,
    CLASS_METHOD_REMOVED,
    CLASS_METHOD_ADDED,
    CLASS_INNERCLASS_REMOVED,
    CLASS_INNERCLASS_ADDED,
    INNERCLASS_MODIFIERS_MODIFIED,
    FIELD_MODIFIERS_MODIFIED,
    FIELD_TYPE_MODIFIED,
    FIELD_VALUE_MODIFIED,
    FIELD_ANNOTATION_REMOVED,
    FIELD_ANNOTATION_ADDED,
    CONSTRUCTOR_MODIFIERS_MODIFIED,
    CONSTRUCTOR_EXCEPTION_REMOVED,
    CONSTRUCTOR_EXCEPTION_ADDED,
    CONSTRUCTOR_ANNOTATION_REMOVED,
    CONSTRUCTOR_ANNOTATION_ADDED,
    METHOD_MODIFIERS_MODIFIED,
    METHOD_TYPE_MODIFIED,
    METHOD_EXCEPTION_REMOVED,
    METHOD_EXCEPTION_ADDED,
    METHOD_ANNOTATION_REMOVED,
    METHOD_ANNOTATION_ADDED,
    ANNOTATION_VALUE_REMOVED,
    ANNOTATION_VALUE_ADDED,
    ANNOTATION_VALUE_MODIFIED,
    PACKAGE_ANNOTATION_REMOVED,
    PACKAGE_ANNOTATION_ADDED,
    PACKAGE_CLASS_REMOVED,
    PACKAGE_CLASS_ADDED,
];
