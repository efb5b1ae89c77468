use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered so that `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffType {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiffType::Added => "ADDED",
            DiffType::Removed => "REMOVED",
            DiffType::Modified => "MODIFIED",
        };
        f.write_str(s)
    }
}

/// Opaque template argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageArg {
    Null,
    Int(i64),
    Str(String),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Null => f.write_str("null"),
            MessageArg::Int(v) => write!(f, "{}", v),
            MessageArg::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MessageArg {
    fn from(s: &str) -> Self {
        MessageArg::Str(s.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(s: String) -> Self {
        MessageArg::Str(s)
    }
}

impl From<&String> for MessageArg {
    fn from(s: &String) -> Self {
        MessageArg::Str(s.clone())
    }
}

impl From<u32> for MessageArg {
    fn from(v: u32) -> Self {
        MessageArg::Int(i64::from(v))
    }
}

impl From<i64> for MessageArg {
    fn from(v: i64) -> Self {
        MessageArg::Int(v)
    }
}

impl<T: Into<MessageArg>> From<Option<T>> for MessageArg {
    fn from(v: Option<T>) -> Self {
        v.map_or(MessageArg::Null, Into::into)
    }
}

/// One detected discrepancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    severity: Severity,
    #[serde(rename = "type")]
    diff_type: DiffType,
    message_key: String,
    args: Vec<MessageArg>,
}

impl Diff {
    pub fn new(severity: Severity, diff_type: DiffType, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            diff_type,
            message_key: message_key.into(),
            args: Vec::new(),
        }
    }

    pub fn error(diff_type: DiffType, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, diff_type, message_key)
    }

    pub fn warning(diff_type: DiffType, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, diff_type, message_key)
    }

    pub fn info(diff_type: DiffType, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, diff_type, message_key)
    }

    pub fn with_arg(mut self, arg: impl Into<MessageArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn diff_type(&self) -> DiffType {
        self.diff_type
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn args(&self) -> &[MessageArg] {
        &self.args
    }
}
