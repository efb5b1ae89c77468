//! Structural model of compiled classes.
//!
//! Entities are built through their builders (or through
//! [`crate::builder::ModelBuilder`]) and are immutable afterwards. Each one
//! produces a canonical content string and a memoized SHA-256 content hash.
//!
//! ## Guarantees
//!
//! - **Determinism**: equal semantic state yields equal content and hash.
//! - **Order independence**: interfaces, exceptions, annotations, members and
//!   inner classes are sorted at build time, so declaration order does not
//!   affect the hash (enum fields excepted: their order is their ordinal).
//! - **Scoping**: anything not rendered into content (method bodies,
//!   non-constant field initializers) is invisible to the differ.

pub mod access;
pub mod annotation;
pub mod class;
pub mod field;
pub mod hash;
pub mod inner_class;
pub mod method;
pub mod package;

pub use access::AccessFlags;
pub use annotation::{AnnotationInfo, AnnotationValue, SimpleValue};
pub use class::{ClassInfo, ClassKind};
pub use field::{ConstantValue, FieldInfo};
pub use hash::Content;
pub use inner_class::InnerClassInfo;
pub use method::{ConstructorInfo, MethodInfo};
pub use package::PackageInfo;
