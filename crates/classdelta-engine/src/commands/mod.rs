//! Engine commands
//!
//! Each command owns its `log_op_start!`/`log_op_end!` boundary.

pub mod diff;
pub mod load;
