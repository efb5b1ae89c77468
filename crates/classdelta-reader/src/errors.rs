use classdelta_core::errors::{ExError, ExErrorKind};

pub(crate) const OP_READ_CLASS: &str = "read_class";

pub(crate) fn malformed(message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::MalformedClassFile)
        .with_op(OP_READ_CLASS)
        .with_message(message)
}

pub(crate) fn unsupported_constant(message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::UnsupportedConstant)
        .with_op(OP_READ_CLASS)
        .with_message(message)
}
