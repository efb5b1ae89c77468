//! Classes: the root entity of a compiled class file.

use super::access::{AccessFlags, ACC_SUPER};
use super::annotation::AnnotationInfo;
use super::field::FieldInfo;
use super::hash::{content_list, sort_children, string_list, Content, HashCell};
use super::inner_class::InnerClassInfo;
use super::method::{ConstructorInfo, MethodInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class file major version of Java 8, used when none is recorded.
pub const V1_8: u32 = 52;

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ClassKind {
    /// Detect the kind from raw class access flags.
    pub fn from_access(access: AccessFlags) -> Self {
        if access.contains(AccessFlags::ANNOTATION) {
            ClassKind::Annotation
        } else if access.contains(AccessFlags::ENUM) {
            ClassKind::Enum
        } else if access.contains(AccessFlags::INTERFACE) {
            ClassKind::Interface
        } else {
            ClassKind::Class
        }
    }

    /// Flags implied by the kind, removed from the stored modifiers.
    fn implied_flags(self) -> AccessFlags {
        match self {
            ClassKind::Class => ACC_SUPER,
            ClassKind::Interface => ACC_SUPER | AccessFlags::INTERFACE | AccessFlags::ABSTRACT,
            ClassKind::Enum => ACC_SUPER | AccessFlags::ENUM | AccessFlags::FINAL,
            ClassKind::Annotation => {
                ACC_SUPER | AccessFlags::ANNOTATION | AccessFlags::INTERFACE | AccessFlags::ABSTRACT
            }
        }
    }

    /// Lower-case name used in message arguments.
    pub fn label(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Annotation => "annotation",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassKind::Class => "CLASS",
            ClassKind::Interface => "INTERFACE",
            ClassKind::Enum => "ENUM",
            ClassKind::Annotation => "ANNOTATION",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct ClassInfo {
    name: String,
    kind: ClassKind,
    version: u32,
    type_parameters: String,
    superclass: String,
    access: AccessFlags,
    annotations: Vec<AnnotationInfo>,
    interfaces: Vec<String>,
    fields: Vec<FieldInfo>,
    constructors: Vec<ConstructorInfo>,
    methods: Vec<MethodInfo>,
    inner_classes: Vec<InnerClassInfo>,
    hash: HashCell,
}

impl ClassInfo {
    /// Start building a class. The builder trusts its caller: names are not
    /// validated here. Untrusted input goes through
    /// [`crate::builder::ModelBuilder`], which fails fast with `MissingName`.
    pub fn builder(name: impl AsRef<str>) -> ClassInfoBuilder {
        ClassInfoBuilder {
            name: name.as_ref().replace('/', "."),
            version: 0,
            type_parameters: String::new(),
            superclass: None,
            access: AccessFlags::PUBLIC,
            annotations: Vec::new(),
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            inner_classes: Vec::new(),
        }
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn type_parameters(&self) -> &str {
        &self.type_parameters
    }

    pub fn superclass(&self) -> &str {
        &self.superclass
    }

    /// Modifiers with the kind-implied bits removed.
    pub fn access(&self) -> AccessFlags {
        self.access
    }

    pub fn annotations(&self) -> &[AnnotationInfo] {
        &self.annotations
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    pub fn inner_classes(&self) -> &[InnerClassInfo] {
        &self.inner_classes
    }

    /// Package part of the name (empty for the default package).
    pub fn package_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// True for `package-info` pseudo classes.
    pub fn is_package_info(&self) -> bool {
        self.name == "package-info" || self.name.ends_with(".package-info")
    }

    /// True for member, local and anonymous classes (`Outer$Inner`).
    pub fn is_nested(&self) -> bool {
        let simple = match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => &self.name,
        };
        simple.contains('$')
    }
}

impl Content for ClassInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> String {
        let mut out = format!("C{{N={}#T={}#V={}", self.name, self.kind, self.version);
        if !self.type_parameters.is_empty() {
            out.push_str(&format!("#P={}", self.type_parameters));
        }
        out.push_str(&format!("#S={}#D={}", self.superclass, self.access.raw()));
        if !self.annotations.is_empty() {
            out.push_str(&format!("#A={}", content_list(&self.annotations)));
        }
        if !self.interfaces.is_empty() {
            out.push_str(&format!("#I={}", string_list(&self.interfaces)));
        }
        if !self.fields.is_empty() {
            out.push_str(&format!("#F={}", content_list(&self.fields)));
        }
        if !self.constructors.is_empty() {
            out.push_str(&format!("#CT={}", content_list(&self.constructors)));
        }
        if !self.methods.is_empty() {
            out.push_str(&format!("#M={}", content_list(&self.methods)));
        }
        if !self.inner_classes.is_empty() {
            out.push_str(&format!("#IC={}", content_list(&self.inner_classes)));
        }
        out.push('}');
        out
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

/// Class under construction. Children may be added in any order;
/// [`ClassInfoBuilder::build`] sorts them and freezes the class.
#[derive(Debug, Clone)]
pub struct ClassInfoBuilder {
    name: String,
    version: u32,
    type_parameters: String,
    superclass: Option<String>,
    access: AccessFlags,
    annotations: Vec<AnnotationInfo>,
    interfaces: Vec<String>,
    fields: Vec<FieldInfo>,
    constructors: Vec<ConstructorInfo>,
    methods: Vec<MethodInfo>,
    inner_classes: Vec<InnerClassInfo>,
}

impl ClassInfoBuilder {
    /// Raw class access flags, including kind bits.
    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn type_parameters(mut self, type_parameters: impl Into<String>) -> Self {
        self.type_parameters = type_parameters.into();
        self
    }

    pub fn superclass(mut self, superclass: impl AsRef<str>) -> Self {
        self.superclass = Some(superclass.as_ref().replace('/', "."));
        self
    }

    pub fn interface(mut self, interface: impl AsRef<str>) -> Self {
        self.interfaces.push(interface.as_ref().replace('/', "."));
        self
    }

    pub fn annotation(mut self, annotation: AnnotationInfo) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    pub fn inner_class(mut self, inner: InnerClassInfo) -> Self {
        self.inner_classes.push(inner);
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_interface(&self) -> bool {
        self.access.contains(AccessFlags::INTERFACE)
    }

    pub(crate) fn is_enum(&self) -> bool {
        self.access.contains(AccessFlags::ENUM)
    }

    pub(crate) fn push_annotation(&mut self, annotation: AnnotationInfo) {
        self.annotations.push(annotation);
    }

    pub(crate) fn push_field(&mut self, field: FieldInfo) {
        self.fields.push(field);
    }

    pub(crate) fn push_constructor(&mut self, constructor: ConstructorInfo) {
        self.constructors.push(constructor);
    }

    pub(crate) fn push_method(&mut self, method: MethodInfo) {
        self.methods.push(method);
    }

    pub(crate) fn push_inner_class(&mut self, inner: InnerClassInfo) {
        self.inner_classes.push(inner);
    }

    /// Normalize, sort children and freeze.
    pub fn build(mut self) -> ClassInfo {
        let kind = ClassKind::from_access(self.access);
        let access = self.access & !kind.implied_flags();

        self.interfaces.sort();
        sort_children(&mut self.annotations);
        if kind != ClassKind::Enum {
            sort_children(&mut self.fields);
        }
        sort_children(&mut self.constructors);
        sort_children(&mut self.methods);
        sort_children(&mut self.inner_classes);

        let superclass = match self.superclass {
            Some(s) if !s.is_empty() => s,
            _ => JAVA_LANG_OBJECT.to_string(),
        };

        ClassInfo {
            name: self.name,
            kind,
            version: if self.version == 0 { V1_8 } else { self.version },
            type_parameters: self.type_parameters,
            superclass,
            access,
            annotations: self.annotations,
            interfaces: self.interfaces,
            fields: self.fields,
            constructors: self.constructors,
            methods: self.methods,
            inner_classes: self.inner_classes,
            hash: HashCell::default(),
        }
    }
}
