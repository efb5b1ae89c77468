//! Core types shared across classdelta facilities
//!
//! This crate provides foundational types used by the error, logging and
//! reporting layers:
//!
//! - **Correlation types**: RunId for tying log events to a single diff run
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
