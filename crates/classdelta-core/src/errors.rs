use thiserror::Error;

/// Result type alias using ClassDeltaError
pub type Result<T> = std::result::Result<T, ClassDeltaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure classdelta can report. Each kind
/// maps to a stable error code used in logs, CLI output and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Model construction
    MalformedSignature,
    MissingName,
    InvalidModel,

    // Class-file decoding
    MalformedClassFile,
    UnsupportedConstant,

    // Integration/IO
    Io,
    Config,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedSignature => "ERR_MALFORMED_SIGNATURE",
            ExErrorKind::MissingName => "ERR_MISSING_NAME",
            ExErrorKind::InvalidModel => "ERR_INVALID_MODEL",
            ExErrorKind::MalformedClassFile => "ERR_MALFORMED_CLASS_FILE",
            ExErrorKind::UnsupportedConstant => "ERR_UNSUPPORTED_CONSTANT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus optional context (operation, class, path)
/// for programmatic handling and for the failure entries of a report.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    class_name: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            class_name: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add class name context
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the class name context, if any
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(class_name) = &self.class_name {
            write!(f, " (class: {})", class_name)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised while building or decoding the structural model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassDeltaError {
    /// A generic signature or descriptor does not follow the JVM grammar
    #[error("Malformed signature '{signature}' at offset {position}: {reason}")]
    MalformedSignature {
        signature: String,
        position: usize,
        reason: String,
    },

    /// A class, member or annotation was declared without a name
    #[error("Missing name for {entity}")]
    MissingName { entity: String },

    /// A member-level event arrived while no class was open
    #[error("No open class for event '{event}'")]
    NoOpenClass { event: String },

    /// `end_class` was called more times than `begin_class`
    #[error("Unbalanced end_class: no class under construction")]
    UnbalancedEnd,

    /// An id handed out by the builder does not refer to a live entity
    #[error("Unknown {entity} handle {id}")]
    UnknownHandle { entity: String, id: usize },
}

impl From<ClassDeltaError> for ExError {
    fn from(err: ClassDeltaError) -> Self {
        match err {
            ClassDeltaError::MalformedSignature { .. } => {
                ExError::new(ExErrorKind::MalformedSignature)
                    .with_op("decode_signature")
                    .with_message(err.to_string())
            }
            ClassDeltaError::MissingName { .. } => ExError::new(ExErrorKind::MissingName)
                .with_op("build_model")
                .with_message(err.to_string()),
            ClassDeltaError::NoOpenClass { .. }
            | ClassDeltaError::UnbalancedEnd
            | ClassDeltaError::UnknownHandle { .. } => ExError::new(ExErrorKind::InvalidModel)
                .with_op("build_model")
                .with_message(err.to_string()),
        }
    }
}
