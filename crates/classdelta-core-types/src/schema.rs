//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent across the core, reader,
//! engine and CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Entity identifiers
pub const FIELD_CLASS_NAME: &str = "class_name";
pub const FIELD_PACKAGE_NAME: &str = "package_name";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_CLASS_COUNT: &str = "class_count";
pub const FIELD_DIFF_COUNT: &str = "diff_count";
pub const FIELD_FAILURE_COUNT: &str = "failure_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
