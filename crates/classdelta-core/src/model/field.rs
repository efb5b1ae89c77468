//! Fields and compile-time constant values.

use super::access::AccessFlags;
use super::annotation::AnnotationInfo;
use super::hash::{content_list, sort_children, Content, HashCell};
use std::fmt;

/// Value of a `ConstantValue` attribute.
#[derive(Debug, Clone)]
pub enum ConstantValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl PartialEq for ConstantValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstantValue::Int(a), ConstantValue::Int(b)) => a == b,
            (ConstantValue::Long(a), ConstantValue::Long(b)) => a == b,
            (ConstantValue::Float(a), ConstantValue::Float(b)) => a.to_bits() == b.to_bits(),
            (ConstantValue::Double(a), ConstantValue::Double(b)) => a.to_bits() == b.to_bits(),
            (ConstantValue::String(a), ConstantValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ConstantValue {}

/// Floating-point constants always carry a fraction or exponent (`1.0`, not
/// `1`) so they read differently from integral ones.
impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(v) => write!(f, "{}", v),
            ConstantValue::Long(v) => write!(f, "{}", v),
            ConstantValue::Float(v) => write!(f, "{:?}", v),
            ConstantValue::Double(v) => write!(f, "{:?}", v),
            ConstantValue::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ConstantValue {
    fn from(s: &str) -> Self {
        ConstantValue::String(s.to_string())
    }
}

impl From<i32> for ConstantValue {
    fn from(v: i32) -> Self {
        ConstantValue::Int(v)
    }
}

#[derive(Debug, Clone)]
pub struct FieldInfo {
    name: String,
    access: AccessFlags,
    field_type: String,
    value: Option<ConstantValue>,
    annotations: Vec<AnnotationInfo>,
    hash: HashCell,
}

impl FieldInfo {
    /// Start building a field. Names are taken as given; the reader goes
    /// through [`crate::builder::ModelBuilder`], which rejects blank names
    /// before they reach this builder.
    pub fn builder(name: impl Into<String>, field_type: impl Into<String>) -> FieldInfoBuilder {
        FieldInfoBuilder {
            name: name.into(),
            access: AccessFlags::PUBLIC,
            field_type: field_type.into(),
            value: None,
            annotations: Vec::new(),
        }
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// Constant value; only ever present on `static final` fields.
    pub fn value(&self) -> Option<&ConstantValue> {
        self.value.as_ref()
    }

    pub fn annotations(&self) -> &[AnnotationInfo] {
        &self.annotations
    }
}

impl Content for FieldInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> String {
        let mut out = format!(
            "F{{N={}#T={}#D={}",
            self.name,
            self.field_type,
            self.access.raw()
        );
        if !self.annotations.is_empty() {
            out.push_str(&format!("#A={}", content_list(&self.annotations)));
        }
        if let Some(value) = &self.value {
            out.push_str(&format!("#V={}", value));
        }
        out.push('}');
        out
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

#[derive(Debug, Clone)]
pub struct FieldInfoBuilder {
    name: String,
    access: AccessFlags,
    field_type: String,
    value: Option<ConstantValue>,
    annotations: Vec<AnnotationInfo>,
}

impl FieldInfoBuilder {
    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn value(mut self, value: impl Into<ConstantValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn annotation(mut self, annotation: AnnotationInfo) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub(crate) fn set_value(&mut self, value: Option<ConstantValue>) {
        self.value = value;
    }

    pub(crate) fn push_annotation(&mut self, annotation: AnnotationInfo) {
        self.annotations.push(annotation);
    }

    /// Freeze the field. A constant value on a field that is not
    /// `static final` is dropped.
    pub fn build(mut self) -> FieldInfo {
        if !self.access.is_static_final() {
            self.value = None;
        }
        sort_children(&mut self.annotations);
        FieldInfo {
            name: self.name,
            access: self.access,
            field_type: self.field_type,
            value: self.value,
            annotations: self.annotations,
            hash: HashCell::default(),
        }
    }
}
