//! Error handling for classdelta-engine
//!
//! Wraps classdelta-core ExError with engine-specific helpers

use std::path::Path;

use classdelta_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a path
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an error for a snapshot root that is not a directory
pub fn not_a_directory(operation: &str, path: &Path) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message("snapshot root is not a directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_path_and_code() {
        let err = io_error(
            "load_snapshot",
            Path::new("build/classes"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "ERR_IO");
        assert_eq!(err.op(), Some("load_snapshot"));
        assert_eq!(err.path(), Some("build/classes"));
        assert_eq!(err.message(), "gone");
    }
}
