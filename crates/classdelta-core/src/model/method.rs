//! Constructors and methods.

use super::access::AccessFlags;
use super::annotation::AnnotationInfo;
use super::hash::{content_list, sort_children, string_list, Content, HashCell};

pub const CONSTRUCTOR_NAME: &str = "<init>";

/// `name(argTypes)`, the identity of a method or constructor within a class.
pub fn member_identity(name: &str, argument_types: &str) -> String {
    format!("{}({})", name, argument_types)
}

#[derive(Debug, Clone)]
pub struct ConstructorInfo {
    identity: String,
    access: AccessFlags,
    argument_types: String,
    exceptions: Vec<String>,
    annotations: Vec<AnnotationInfo>,
    hash: HashCell,
}

impl ConstructorInfo {
    pub fn builder() -> MemberBuilder {
        MemberBuilder::new(CONSTRUCTOR_NAME)
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    /// Comma separated parameter types, e.g. `int, java.lang.String`.
    pub fn argument_types(&self) -> &str {
        &self.argument_types
    }

    /// Declared exceptions, sorted.
    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    pub fn annotations(&self) -> &[AnnotationInfo] {
        &self.annotations
    }
}

impl Content for ConstructorInfo {
    /// The constructor identity, `<init>(argTypes)`.
    fn name(&self) -> &str {
        &self.identity
    }

    fn content(&self) -> String {
        let mut out = format!("CT{{D={}", self.access.raw());
        if !self.annotations.is_empty() {
            out.push_str(&format!("#A={}", content_list(&self.annotations)));
        }
        if !self.argument_types.is_empty() {
            out.push_str(&format!("#R={}", self.argument_types));
        }
        if !self.exceptions.is_empty() {
            out.push_str(&format!("#E={}", string_list(&self.exceptions)));
        }
        out.push('}');
        out
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

#[derive(Debug, Clone)]
pub struct MethodInfo {
    name: String,
    identity: String,
    access: AccessFlags,
    generic_types: String,
    return_type: String,
    argument_types: String,
    exceptions: Vec<String>,
    annotations: Vec<AnnotationInfo>,
    hash: HashCell,
}

impl MethodInfo {
    pub fn builder(name: impl Into<String>) -> MemberBuilder {
        MemberBuilder::new(name)
    }

    /// Plain method name without parameter list.
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    /// Formal type parameters without the enclosing angle brackets.
    pub fn generic_types(&self) -> &str {
        &self.generic_types
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn argument_types(&self) -> &str {
        &self.argument_types
    }

    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    pub fn annotations(&self) -> &[AnnotationInfo] {
        &self.annotations
    }
}

impl Content for MethodInfo {
    /// The method identity, `name(argTypes)`.
    fn name(&self) -> &str {
        &self.identity
    }

    fn content(&self) -> String {
        let mut out = format!("M{{N={}", self.name);
        if !self.generic_types.is_empty() {
            out.push_str(&format!("#G={}", self.generic_types));
        }
        out.push_str(&format!("#T={}#D={}", self.return_type, self.access.raw()));
        if !self.annotations.is_empty() {
            out.push_str(&format!("#A={}", content_list(&self.annotations)));
        }
        if !self.argument_types.is_empty() {
            out.push_str(&format!("#R={}", self.argument_types));
        }
        if !self.exceptions.is_empty() {
            out.push_str(&format!("#E={}", string_list(&self.exceptions)));
        }
        out.push('}');
        out
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

/// Shared builder for constructors and methods.
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    name: String,
    access: AccessFlags,
    generic_types: String,
    return_type: Option<String>,
    argument_types: String,
    exceptions: Vec<String>,
    annotations: Vec<AnnotationInfo>,
}

impl MemberBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessFlags::PUBLIC,
            generic_types: String::new(),
            return_type: None,
            argument_types: String::new(),
            exceptions: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    /// Formal type parameters; surrounding `<` `>` are stripped.
    pub fn generic_types(mut self, generic_types: impl AsRef<str>) -> Self {
        let raw = generic_types.as_ref();
        let stripped = raw
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(raw);
        self.generic_types = stripped.to_string();
        self
    }

    pub fn return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn argument_types(mut self, argument_types: impl Into<String>) -> Self {
        self.argument_types = argument_types.into();
        self
    }

    /// Declared exceptions; internal names are converted to dotted form.
    pub fn exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exceptions = exceptions
            .into_iter()
            .map(|e| e.as_ref().replace('/', "."))
            .collect();
        self
    }

    pub fn annotation(mut self, annotation: AnnotationInfo) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub(crate) fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    pub(crate) fn push_annotation(&mut self, annotation: AnnotationInfo) {
        self.annotations.push(annotation);
    }

    fn freeze_children(&mut self) {
        self.exceptions.sort();
        sort_children(&mut self.annotations);
    }

    pub fn build_constructor(mut self) -> ConstructorInfo {
        self.freeze_children();
        ConstructorInfo {
            identity: member_identity(CONSTRUCTOR_NAME, &self.argument_types),
            access: self.access,
            argument_types: self.argument_types,
            exceptions: self.exceptions,
            annotations: self.annotations,
            hash: HashCell::default(),
        }
    }

    pub fn build_method(mut self) -> MethodInfo {
        self.freeze_children();
        MethodInfo {
            identity: member_identity(&self.name, &self.argument_types),
            name: self.name,
            access: self.access,
            generic_types: self.generic_types,
            return_type: self.return_type.unwrap_or_else(|| "void".to_string()),
            argument_types: self.argument_types,
            exceptions: self.exceptions,
            annotations: self.annotations,
            hash: HashCell::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_defaults_and_identity() {
        let m = MethodInfo::builder("run").build_method();
        assert_eq!(m.return_type(), "void");
        assert_eq!(m.name(), "run()");
        assert_eq!(m.simple_name(), "run");
        assert_eq!(m.content(), "M{N=run#T=void#D=1}");
    }

    #[test]
    fn test_method_generic_types_stripped() {
        let m = MethodInfo::builder("copy")
            .generic_types("<T extends java.lang.Number>")
            .return_type("T")
            .argument_types("T")
            .build_method();
        assert_eq!(m.generic_types(), "T extends java.lang.Number");
        assert_eq!(
            m.content(),
            "M{N=copy#G=T extends java.lang.Number#T=T#D=1#R=T}"
        );
    }

    #[test]
    fn test_exceptions_sorted_and_dotted() {
        let m = MethodInfo::builder("read")
            .exceptions(["java/io/IOException", "java/lang/Exception"])
            .build_method();
        assert_eq!(m.exceptions(), ["java.io.IOException", "java.lang.Exception"]);

        let reordered = MethodInfo::builder("read")
            .exceptions(["java.lang.Exception", "java.io.IOException"])
            .build_method();
        assert_eq!(m.content_hash(), reordered.content_hash());
    }

    #[test]
    fn test_constructor_content() {
        let c = ConstructorInfo::builder()
            .argument_types("int, java.lang.String")
            .exceptions(["java.io.IOException"])
            .build_constructor();
        assert_eq!(c.name(), "<init>(int, java.lang.String)");
        assert_eq!(
            c.content(),
            "CT{D=1#R=int, java.lang.String#E=[java.io.IOException]}"
        );
    }
}
