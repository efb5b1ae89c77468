//! classdelta reader - JVM class-file parser
//!
//! Parses the binary class-file format and replays what it finds as
//! [`ModelBuilder`](classdelta_core::ModelBuilder) events, producing a
//! frozen [`ClassInfo`](classdelta_core::ClassInfo). Method bodies are
//! never decoded; unknown attributes are skipped by length.

mod attributes;
mod classfile;
pub mod constant_pool;
mod cursor;
mod errors;
mod mutf8;

#[cfg(any(test, feature = "writer"))]
pub mod writer;

pub use classfile::{read_class, CLASS_MAGIC};
