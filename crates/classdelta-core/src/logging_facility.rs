//! Structured logging facility for classdelta
//!
//! One initialization point (`init(profile)`), three operation macros and
//! an in-memory capture layer for tests.
//!
//! # Usage
//!
//! ```rust
//! use classdelta_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - operation start
//! - `log_op_end!(op, duration_ms = ...)` - operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - operation failure

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
