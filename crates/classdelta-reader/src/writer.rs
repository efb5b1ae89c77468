//! Minimal class-file writer for test fixtures.
//!
//! Produces structurally valid class files with the attributes the reader
//! understands, plus a `Code` attribute on concrete methods and a
//! `SourceFile` attribute so the skip path is exercised too.
//!
//! ```
//! use classdelta_core::model::AccessFlags;
//! use classdelta_reader::writer::{ClassFileWriter, MethodDef};
//!
//! let bytes = ClassFileWriter::new("com/acme/Foo")
//!     .interface("java/io/Serializable")
//!     .method(MethodDef::new("run", "()V"))
//!     .to_bytes();
//! let class = classdelta_reader::read_class(&bytes).unwrap();
//! assert_eq!(class.methods().len(), 1);
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use classdelta_core::model::access::ACC_SUPER;
use classdelta_core::model::{AccessFlags, ConstantValue};

use crate::classfile::CLASS_MAGIC;
use crate::constant_pool::{
    TAG_CLASS, TAG_DOUBLE, TAG_FLOAT, TAG_INTEGER, TAG_LONG, TAG_STRING, TAG_UTF8,
};
use crate::mutf8;

const OP_RETURN: u8 = 0xB1;

/// An annotation `element_value`.
#[derive(Debug, Clone)]
pub enum ElementDef {
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    /// Enum type descriptor (`Lcom/acme/Level;`) and constant name
    Enum(String, String),
    /// Class literal as a descriptor (`Ljava/lang/String;`, `I`, `V`)
    Class(String),
    Annotation(AnnotationDef),
    Array(Vec<ElementDef>),
}

#[derive(Debug, Clone)]
pub struct AnnotationDef {
    descriptor: String,
    visible: bool,
    values: Vec<(String, ElementDef)>,
}

impl AnnotationDef {
    /// `descriptor` is the annotation type descriptor, e.g. `Ljava/lang/Deprecated;`.
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            visible: true,
            values: Vec::new(),
        }
    }

    /// Store in `RuntimeInvisibleAnnotations` (CLASS retention).
    pub fn invisible(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn value(mut self, key: impl Into<String>, value: ElementDef) -> Self {
        self.values.push((key.into(), value));
        self
    }
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    name: String,
    descriptor: String,
    access: AccessFlags,
    signature: Option<String>,
    constant: Option<ConstantValue>,
    annotations: Vec<AnnotationDef>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            access: AccessFlags::PUBLIC,
            signature: None,
            constant: None,
            annotations: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn constant(mut self, constant: impl Into<ConstantValue>) -> Self {
        self.constant = Some(constant.into());
        self
    }

    pub fn annotation(mut self, annotation: AnnotationDef) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Debug, Clone)]
pub struct MethodDef {
    name: String,
    descriptor: String,
    access: AccessFlags,
    signature: Option<String>,
    exceptions: Vec<String>,
    annotations: Vec<AnnotationDef>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            access: AccessFlags::PUBLIC,
            signature: None,
            exceptions: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn constructor(descriptor: impl Into<String>) -> Self {
        Self::new("<init>", descriptor)
    }

    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Internal name of a declared exception.
    pub fn exception(mut self, exception: impl Into<String>) -> Self {
        self.exceptions.push(exception.into());
        self
    }

    pub fn annotation(mut self, annotation: AnnotationDef) -> Self {
        self.annotations.push(annotation);
        self
    }

    fn has_code(&self) -> bool {
        !self
            .access
            .intersects(AccessFlags::ABSTRACT | AccessFlags::NATIVE)
    }
}

#[derive(Debug, Clone)]
pub struct ClassFileWriter {
    name: String,
    access: AccessFlags,
    major_version: u16,
    superclass: Option<String>,
    interfaces: Vec<String>,
    signature: Option<String>,
    fields: Vec<FieldDef>,
    methods: Vec<MethodDef>,
    annotations: Vec<AnnotationDef>,
    inner_classes: Vec<(String, AccessFlags)>,
}

impl ClassFileWriter {
    /// A `public` class extending `java/lang/Object`, version 52.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().replace('.', "/"),
            access: AccessFlags::PUBLIC | ACC_SUPER,
            major_version: 52,
            superclass: Some("java/lang/Object".to_string()),
            interfaces: Vec::new(),
            signature: None,
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
            inner_classes: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    pub fn version(mut self, major_version: u16) -> Self {
        self.major_version = major_version;
        self
    }

    pub fn superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Write `super_class = 0`, as `java/lang/Object` itself does.
    pub fn without_superclass(mut self) -> Self {
        self.superclass = None;
        self
    }

    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn annotation(mut self, annotation: AnnotationDef) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn inner_class(mut self, name: impl Into<String>, access: AccessFlags) -> Self {
        self.inner_classes.push((name.into(), access));
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut pool = PoolBuilder::default();
        let mut body = Vec::new();

        put_u16(&mut body, flags(self.access));
        put_u16(&mut body, pool.class(&self.name));
        put_u16(&mut body, self.superclass.as_deref().map_or(0, |s| pool.class(s)));
        put_u16(&mut body, len_u16(self.interfaces.len()));
        for interface in &self.interfaces {
            put_u16(&mut body, pool.class(interface));
        }

        put_u16(&mut body, len_u16(self.fields.len()));
        for field in &self.fields {
            write_field(&mut body, &mut pool, field);
        }
        put_u16(&mut body, len_u16(self.methods.len()));
        for method in &self.methods {
            write_method(&mut body, &mut pool, method);
        }

        let mut attributes = Vec::new();
        if let Some(signature) = &self.signature {
            attributes.push(signature_attribute(&mut pool, signature));
        }
        attributes.extend(annotation_attributes(&mut pool, &self.annotations));
        if !self.inner_classes.is_empty() {
            let mut entries = Vec::new();
            put_u16(&mut entries, len_u16(self.inner_classes.len()));
            for (name, access) in &self.inner_classes {
                put_u16(&mut entries, pool.class(name));
                put_u16(&mut entries, 0);
                put_u16(&mut entries, 0);
                put_u16(&mut entries, flags(*access));
            }
            attributes.push(Attribute::new(&mut pool, "InnerClasses", entries));
        }
        let simple_name = self.name.rsplit('/').next().unwrap_or(&self.name);
        let source = pool.utf8(&format!("{}.java", simple_name));
        attributes.push(Attribute::new(
            &mut pool,
            "SourceFile",
            source.to_be_bytes().to_vec(),
        ));
        write_attributes(&mut body, &attributes);

        let mut out = Vec::with_capacity(body.len() + pool.bytes.len() + 10);
        out.extend_from_slice(&CLASS_MAGIC.to_be_bytes());
        put_u16(&mut out, 0);
        put_u16(&mut out, self.major_version);
        put_u16(&mut out, pool.next);
        out.extend_from_slice(&pool.bytes);
        out.extend_from_slice(&body);
        out
    }

    /// Write `<root>/<internal name>.class`, creating package directories.
    pub fn write_into(&self, root: &Path) -> io::Result<PathBuf> {
        let path = root.join(format!("{}.class", self.name));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_bytes())?;
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PoolKey {
    Utf8(String),
    Integer(i32),
    Float(u32),
    Long(i64),
    Double(u64),
    Class(String),
    String(String),
}

#[derive(Debug)]
struct PoolBuilder {
    bytes: Vec<u8>,
    next: u16,
    index: HashMap<PoolKey, u16>,
}

impl Default for PoolBuilder {
    fn default() -> Self {
        Self {
            bytes: Vec::new(),
            next: 1,
            index: HashMap::new(),
        }
    }
}

impl PoolBuilder {
    fn intern(&mut self, key: PoolKey) -> u16 {
        if let Some(index) = self.index.get(&key) {
            return *index;
        }
        let (entry, slots) = match &key {
            PoolKey::Utf8(s) => {
                let encoded = mutf8::encode(s);
                let mut entry = vec![TAG_UTF8];
                put_u16(&mut entry, len_u16(encoded.len()));
                entry.extend(encoded);
                (entry, 1)
            }
            PoolKey::Integer(v) => (tagged(TAG_INTEGER, &v.to_be_bytes()), 1),
            PoolKey::Float(bits) => (tagged(TAG_FLOAT, &bits.to_be_bytes()), 1),
            PoolKey::Long(v) => (tagged(TAG_LONG, &v.to_be_bytes()), 2),
            PoolKey::Double(bits) => (tagged(TAG_DOUBLE, &bits.to_be_bytes()), 2),
            PoolKey::Class(name) => {
                let utf8 = self.utf8(name);
                (tagged(TAG_CLASS, &utf8.to_be_bytes()), 1)
            }
            PoolKey::String(s) => {
                let utf8 = self.utf8(s);
                (tagged(TAG_STRING, &utf8.to_be_bytes()), 1)
            }
        };
        let index = self.next;
        self.bytes.extend(entry);
        self.next += slots;
        self.index.insert(key, index);
        index
    }

    fn utf8(&mut self, s: &str) -> u16 {
        self.intern(PoolKey::Utf8(s.to_string()))
    }

    fn class(&mut self, name: &str) -> u16 {
        self.intern(PoolKey::Class(name.to_string()))
    }

    fn constant(&mut self, value: &ConstantValue) -> u16 {
        match value {
            ConstantValue::Int(v) => self.intern(PoolKey::Integer(*v)),
            ConstantValue::Long(v) => self.intern(PoolKey::Long(*v)),
            ConstantValue::Float(v) => self.intern(PoolKey::Float(v.to_bits())),
            ConstantValue::Double(v) => self.intern(PoolKey::Double(v.to_bits())),
            ConstantValue::String(s) => self.intern(PoolKey::String(s.clone())),
        }
    }
}

struct Attribute {
    name: u16,
    body: Vec<u8>,
}

impl Attribute {
    fn new(pool: &mut PoolBuilder, name: &str, body: Vec<u8>) -> Self {
        Self {
            name: pool.utf8(name),
            body,
        }
    }
}

fn write_field(out: &mut Vec<u8>, pool: &mut PoolBuilder, field: &FieldDef) {
    put_u16(out, flags(field.access));
    put_u16(out, pool.utf8(&field.name));
    put_u16(out, pool.utf8(&field.descriptor));

    let mut attributes = Vec::new();
    if let Some(signature) = &field.signature {
        attributes.push(signature_attribute(pool, signature));
    }
    if let Some(constant) = &field.constant {
        let index = pool.constant(constant);
        attributes.push(Attribute::new(pool, "ConstantValue", index.to_be_bytes().to_vec()));
    }
    attributes.extend(annotation_attributes(pool, &field.annotations));
    write_attributes(out, &attributes);
}

fn write_method(out: &mut Vec<u8>, pool: &mut PoolBuilder, method: &MethodDef) {
    put_u16(out, flags(method.access));
    put_u16(out, pool.utf8(&method.name));
    put_u16(out, pool.utf8(&method.descriptor));

    let mut attributes = Vec::new();
    if method.has_code() {
        let mut code = Vec::new();
        put_u16(&mut code, 1); // max_stack
        put_u16(&mut code, 8); // max_locals
        code.extend_from_slice(&1u32.to_be_bytes());
        code.push(OP_RETURN);
        put_u16(&mut code, 0); // exception table
        put_u16(&mut code, 0); // attributes
        attributes.push(Attribute::new(pool, "Code", code));
    }
    if let Some(signature) = &method.signature {
        attributes.push(signature_attribute(pool, signature));
    }
    if !method.exceptions.is_empty() {
        let mut body = Vec::new();
        put_u16(&mut body, len_u16(method.exceptions.len()));
        for exception in &method.exceptions {
            put_u16(&mut body, pool.class(exception));
        }
        attributes.push(Attribute::new(pool, "Exceptions", body));
    }
    attributes.extend(annotation_attributes(pool, &method.annotations));
    write_attributes(out, &attributes);
}

fn signature_attribute(pool: &mut PoolBuilder, signature: &str) -> Attribute {
    let index = pool.utf8(signature);
    Attribute::new(pool, "Signature", index.to_be_bytes().to_vec())
}

fn annotation_attributes(pool: &mut PoolBuilder, annotations: &[AnnotationDef]) -> Vec<Attribute> {
    let mut out = Vec::new();
    for (visible, name) in [
        (true, "RuntimeVisibleAnnotations"),
        (false, "RuntimeInvisibleAnnotations"),
    ] {
        let group: Vec<&AnnotationDef> =
            annotations.iter().filter(|a| a.visible == visible).collect();
        if group.is_empty() {
            continue;
        }
        let mut body = Vec::new();
        put_u16(&mut body, len_u16(group.len()));
        for annotation in group {
            write_annotation(&mut body, pool, annotation);
        }
        out.push(Attribute::new(pool, name, body));
    }
    out
}

fn write_annotation(out: &mut Vec<u8>, pool: &mut PoolBuilder, annotation: &AnnotationDef) {
    put_u16(out, pool.utf8(&annotation.descriptor));
    put_u16(out, len_u16(annotation.values.len()));
    for (key, value) in &annotation.values {
        put_u16(out, pool.utf8(key));
        write_element(out, pool, value);
    }
}

fn write_element(out: &mut Vec<u8>, pool: &mut PoolBuilder, value: &ElementDef) {
    let (tag, index) = match value {
        ElementDef::Byte(v) => (b'B', pool.intern(PoolKey::Integer(i32::from(*v)))),
        ElementDef::Char(v) => (b'C', pool.intern(PoolKey::Integer(*v as i32))),
        ElementDef::Short(v) => (b'S', pool.intern(PoolKey::Integer(i32::from(*v)))),
        ElementDef::Int(v) => (b'I', pool.intern(PoolKey::Integer(*v))),
        ElementDef::Boolean(v) => (b'Z', pool.intern(PoolKey::Integer(i32::from(*v)))),
        ElementDef::Long(v) => (b'J', pool.intern(PoolKey::Long(*v))),
        ElementDef::Float(v) => (b'F', pool.intern(PoolKey::Float(v.to_bits()))),
        ElementDef::Double(v) => (b'D', pool.intern(PoolKey::Double(v.to_bits()))),
        ElementDef::String(s) => (b's', pool.utf8(s)),
        ElementDef::Class(descriptor) => (b'c', pool.utf8(descriptor)),
        ElementDef::Enum(descriptor, constant) => {
            out.push(b'e');
            put_u16(out, pool.utf8(descriptor));
            put_u16(out, pool.utf8(constant));
            return;
        }
        ElementDef::Annotation(nested) => {
            out.push(b'@');
            write_annotation(out, pool, nested);
            return;
        }
        ElementDef::Array(items) => {
            out.push(b'[');
            put_u16(out, len_u16(items.len()));
            for item in items {
                write_element(out, pool, item);
            }
            return;
        }
    };
    out.push(tag);
    put_u16(out, index);
}

fn write_attributes(out: &mut Vec<u8>, attributes: &[Attribute]) {
    put_u16(out, len_u16(attributes.len()));
    for attribute in attributes {
        put_u16(out, attribute.name);
        out.extend_from_slice(&(attribute.body.len() as u32).to_be_bytes());
        out.extend_from_slice(&attribute.body);
    }
}

fn tagged(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut entry = Vec::with_capacity(payload.len() + 1);
    entry.push(tag);
    entry.extend_from_slice(payload);
    entry
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn flags(access: AccessFlags) -> u16 {
    (access.raw() & 0xFFFF) as u16
}

fn len_u16(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
