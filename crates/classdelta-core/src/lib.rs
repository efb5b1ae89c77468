//! classdelta core - structural model and differ for compiled JVM classes
//!
//! This crate provides:
//! - the structural model (class, field, constructor, method, inner class,
//!   annotation, package) with canonical content strings and SHA-256
//!   content hashes
//! - the generic-signature decoder
//! - the event-driven model builder fed by a class-file reader
//! - the multiset reconciliation engine
//! - kind-specific differs producing severity-tagged diff records
//!
//! Everything here is pure computation over immutable trees; no I/O.

pub mod builder;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reconcile;
pub mod signature;

// Re-export commonly used types
pub use builder::{
    AnnotationId, AnnotationTarget, ClassHeader, FieldHeader, FieldId, MemberId, MethodHeader,
    ModelBuilder,
};
pub use diff::{diff_class, diff_package, Diff, DiffType, Diffable, MessageArg, Severity};
pub use errors::{ClassDeltaError, ExError, ExErrorKind, Result};
pub use model::{ClassInfo, ClassKind, Content, PackageInfo};
pub use reconcile::{reconcile, Keyed, Reconciliation};
