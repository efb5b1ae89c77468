//! Annotations and their element values.

use super::hash::{Content, HashCell};
use std::collections::BTreeMap;
use std::fmt;

/// A leaf annotation element value.
#[derive(Debug, Clone)]
pub enum SimpleValue {
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    Enum { type_name: String, constant: String },
    Class(String),
}

impl SimpleValue {
    /// Java type name of the value, used in message arguments.
    pub fn type_name(&self) -> &str {
        match self {
            SimpleValue::Byte(_) => "byte",
            SimpleValue::Char(_) => "char",
            SimpleValue::Short(_) => "short",
            SimpleValue::Int(_) => "int",
            SimpleValue::Long(_) => "long",
            SimpleValue::Float(_) => "float",
            SimpleValue::Double(_) => "double",
            SimpleValue::Boolean(_) => "boolean",
            SimpleValue::String(_) => "java.lang.String",
            SimpleValue::Enum { type_name, .. } => type_name,
            SimpleValue::Class(_) => "java.lang.Class",
        }
    }

    /// Canonical rendering for content strings. Strings and chars are
    /// quoted and escaped so embedded delimiters cannot collide.
    pub fn content(&self) -> String {
        match self {
            SimpleValue::Char(v) => format!("{:?}", v),
            SimpleValue::String(v) => format!("{:?}", v),
            SimpleValue::Float(v) => format!("{:?}", v),
            SimpleValue::Double(v) => format!("{:?}", v),
            other => other.to_string(),
        }
    }
}

impl PartialEq for SimpleValue {
    fn eq(&self, other: &Self) -> bool {
        use SimpleValue::*;
        match (self, other) {
            (Byte(a), Byte(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Double(a), Double(b)) => a.to_bits() == b.to_bits(),
            (Boolean(a), Boolean(b)) => a == b,
            (String(a), String(b)) => a == b,
            (
                Enum {
                    type_name: ta,
                    constant: ca,
                },
                Enum {
                    type_name: tb,
                    constant: cb,
                },
            ) => ta == tb && ca == cb,
            (Class(a), Class(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for SimpleValue {}

impl fmt::Display for SimpleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleValue::Byte(v) => write!(f, "{}", v),
            SimpleValue::Char(v) => write!(f, "{}", v),
            SimpleValue::Short(v) => write!(f, "{}", v),
            SimpleValue::Int(v) => write!(f, "{}", v),
            SimpleValue::Long(v) => write!(f, "{}", v),
            SimpleValue::Float(v) => write!(f, "{}", v),
            SimpleValue::Double(v) => write!(f, "{}", v),
            SimpleValue::Boolean(v) => write!(f, "{}", v),
            SimpleValue::String(v) => f.write_str(v),
            SimpleValue::Enum {
                type_name,
                constant,
            } => write!(f, "{}.{}", type_name, constant),
            SimpleValue::Class(v) => write!(f, "{}.class", v),
        }
    }
}

/// An annotation element value: a leaf, an ordered array, or a nested
/// annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Simple(SimpleValue),
    Array(Vec<AnnotationValue>),
    Annotation(AnnotationInfo),
}

impl AnnotationValue {
    pub fn string(value: impl Into<String>) -> Self {
        AnnotationValue::Simple(SimpleValue::String(value.into()))
    }

    pub fn int(value: i32) -> Self {
        AnnotationValue::Simple(SimpleValue::Int(value))
    }

    pub fn enum_constant(type_name: impl Into<String>, constant: impl Into<String>) -> Self {
        AnnotationValue::Simple(SimpleValue::Enum {
            type_name: type_name.into(),
            constant: constant.into(),
        })
    }

    /// Java type name of the value, used in message arguments.
    pub fn type_name(&self) -> String {
        match self {
            AnnotationValue::Simple(v) => v.type_name().to_string(),
            AnnotationValue::Array(items) => match items.first() {
                Some(first) => format!("{}[]", first.type_name()),
                None => "java.lang.Object[]".to_string(),
            },
            AnnotationValue::Annotation(a) => a.name().to_string(),
        }
    }

    /// Canonical rendering for content strings; [`fmt::Display`] stays the
    /// human-readable form used in messages.
    pub fn content(&self) -> String {
        match self {
            AnnotationValue::Simple(v) => v.content(),
            AnnotationValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(AnnotationValue::content).collect();
                format!("[{}]", parts.join(", "))
            }
            AnnotationValue::Annotation(a) => a.content(),
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Simple(v) => write!(f, "{}", v),
            AnnotationValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            AnnotationValue::Annotation(a) => {
                write!(f, "@{}(", a.name())?;
                write_key_values(f, &a.values)?;
                f.write_str(")")
            }
        }
    }
}

fn write_key_values(
    f: &mut fmt::Formatter<'_>,
    values: &BTreeMap<String, AnnotationValue>,
) -> fmt::Result {
    for (i, (key, value)) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", key, value)?;
    }
    Ok(())
}

/// A runtime-visible or invisible annotation on a class, member or package.
#[derive(Debug, Clone)]
pub struct AnnotationInfo {
    name: String,
    values: BTreeMap<String, AnnotationValue>,
    hash: HashCell,
}

impl AnnotationInfo {
    /// Start building an annotation. `name` may be a type descriptor
    /// (`Ljava/lang/Deprecated;`) or a dotted name.
    pub fn builder(name: impl AsRef<str>) -> AnnotationInfoBuilder {
        AnnotationInfoBuilder {
            name: annotation_name(name.as_ref()),
            values: BTreeMap::new(),
        }
    }

    pub fn values(&self) -> &BTreeMap<String, AnnotationValue> {
        &self.values
    }

    pub fn value(&self, key: &str) -> Option<&AnnotationValue> {
        self.values.get(key)
    }
}

impl PartialEq for AnnotationInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.values == other.values
    }
}

impl Eq for AnnotationInfo {}

impl Content for AnnotationInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> String {
        let mut out = format!("A{{N={}", self.name);
        if !self.values.is_empty() {
            let pairs: Vec<String> = self
                .values
                .iter()
                .map(|(k, v)| format!("{}={}", k, v.content()))
                .collect();
            out.push_str(&format!("#V={{{}}}", pairs.join(", ")));
        }
        out.push('}');
        out
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

/// Builder for [`AnnotationInfo`]; `build()` freezes the annotation.
#[derive(Debug, Clone)]
pub struct AnnotationInfoBuilder {
    name: String,
    values: BTreeMap<String, AnnotationValue>,
}

impl AnnotationInfoBuilder {
    pub fn value(mut self, key: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub(crate) fn insert(&mut self, key: String, value: AnnotationValue) {
        self.values.insert(key, value);
    }

    pub fn build(self) -> AnnotationInfo {
        AnnotationInfo {
            name: self.name,
            values: self.values,
            hash: HashCell::default(),
        }
    }
}

/// Turn `Lcom/acme/Marker;` into `com.acme.Marker`; dotted names pass through.
pub fn annotation_name(raw: &str) -> String {
    let trimmed = match raw.strip_prefix('L').and_then(|s| s.strip_suffix(';')) {
        Some(inner) => inner,
        None => raw,
    };
    trimmed.replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_name_from_descriptor() {
        assert_eq!(annotation_name("Ljava/lang/Deprecated;"), "java.lang.Deprecated");
        assert_eq!(annotation_name("com.acme.Marker"), "com.acme.Marker");
    }

    #[test]
    fn test_content_without_values() {
        let a = AnnotationInfo::builder("Ljava/lang/Deprecated;").build();
        assert_eq!(a.content(), "A{N=java.lang.Deprecated}");
    }

    #[test]
    fn test_content_sorts_keys() {
        let a = AnnotationInfo::builder("com.acme.Food")
            .value("value", AnnotationValue::string("Pizza"))
            .value("count", AnnotationValue::int(2))
            .build();
        assert_eq!(a.content(), r#"A{N=com.acme.Food#V={count=2, value="Pizza"}}"#);
    }

    #[test]
    fn test_nested_and_array_rendering() {
        let inner = AnnotationInfo::builder("com.acme.Inner")
            .value("level", AnnotationValue::enum_constant("com.acme.Level", "HIGH"))
            .build();
        let value = AnnotationValue::Array(vec![
            AnnotationValue::Annotation(inner),
            AnnotationValue::Simple(SimpleValue::Class("java.lang.String".to_string())),
        ]);
        assert_eq!(
            value.to_string(),
            "[@com.acme.Inner(level=com.acme.Level.HIGH), java.lang.String.class]"
        );
        assert_eq!(value.type_name(), "com.acme.Inner[]");
    }

    #[test]
    fn test_content_quotes_strings_with_delimiters() {
        let joined = AnnotationInfo::builder("org.example.Tags")
            .value("value", AnnotationValue::Array(vec![AnnotationValue::string("a, b")]))
            .build();
        let split = AnnotationInfo::builder("org.example.Tags")
            .value(
                "value",
                AnnotationValue::Array(vec![
                    AnnotationValue::string("a"),
                    AnnotationValue::string("b"),
                ]),
            )
            .build();
        assert_eq!(joined.content(), r#"A{N=org.example.Tags#V={value=["a, b"]}}"#);
        assert_eq!(split.content(), r#"A{N=org.example.Tags#V={value=["a", "b"]}}"#);
        assert_ne!(joined.content_hash(), split.content_hash());

        // messages keep the unquoted form
        assert_eq!(joined.value("value").unwrap().to_string(), "[a, b]");
        assert_eq!(split.value("value").unwrap().to_string(), "[a, b]");
    }

    #[test]
    fn test_content_escapes_quotes_and_chars() {
        assert_eq!(
            SimpleValue::String("say \"hi\"}".to_string()).content(),
            r#""say \"hi\"}""#
        );
        assert_eq!(SimpleValue::Char(',').content(), "','");
        assert_eq!(SimpleValue::Double(1.0).content(), "1.0");
        assert_eq!(SimpleValue::Int(1).content(), "1");
        let nested = AnnotationInfo::builder("com.acme.Outer")
            .value(
                "inner",
                AnnotationValue::Annotation(
                    AnnotationInfo::builder("com.acme.Inner")
                        .value("name", AnnotationValue::string("x=y"))
                        .build(),
                ),
            )
            .build();
        assert_eq!(
            nested.content(),
            r#"A{N=com.acme.Outer#V={inner=A{N=com.acme.Inner#V={name="x=y"}}}}"#
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(AnnotationValue::string("x").type_name(), "java.lang.String");
        assert_eq!(AnnotationValue::int(1).type_name(), "int");
        assert_eq!(AnnotationValue::Array(vec![]).type_name(), "java.lang.Object[]");
    }

    #[test]
    fn test_float_values_compare_by_bits() {
        let nan = SimpleValue::Float(f32::NAN);
        assert_eq!(nan, nan.clone());
        assert_ne!(SimpleValue::Float(0.0), SimpleValue::Float(-0.0));
    }
}
