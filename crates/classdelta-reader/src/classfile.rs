//! Class-file structure and replay into the model builder.

use classdelta_core::errors::ExError;
use classdelta_core::model::{AccessFlags, ClassInfo};
use classdelta_core::{AnnotationTarget, ClassHeader, FieldHeader, MethodHeader, ModelBuilder};
use tracing::debug;

use crate::attributes::{Attributes, RawAnnotation};
use crate::constant_pool::ConstantPool;
use crate::cursor::Cursor;
use crate::errors::malformed;

pub const CLASS_MAGIC: u32 = 0xCAFE_BABE;

struct RawMember {
    access: u16,
    name: String,
    descriptor: String,
    attributes: Attributes,
}

struct RawClass {
    major_version: u16,
    access: u16,
    name: String,
    superclass: Option<String>,
    interfaces: Vec<String>,
    fields: Vec<RawMember>,
    methods: Vec<RawMember>,
    attributes: Attributes,
}

/// Parse one class file and build its structural model.
///
/// # Errors
///
/// `MalformedClassFile` for truncated input, a bad magic number, an invalid
/// constant-pool reference or trailing bytes; `UnsupportedConstant` for a
/// `ConstantValue` that is not a literal; `MalformedSignature` and
/// `MissingName` from model construction. Errors carry the class name once
/// it is known.
pub fn read_class(bytes: &[u8]) -> Result<ClassInfo, ExError> {
    let raw = parse(bytes)?;
    let name = raw.name.clone();
    replay(raw).map_err(|e| e.with_class(name.replace('/', ".")))
}

fn parse(bytes: &[u8]) -> Result<RawClass, ExError> {
    let mut cursor = Cursor::new(bytes);

    let magic = cursor.u32()?;
    if magic != CLASS_MAGIC {
        return Err(malformed(format!("bad magic 0x{:08X}", magic)));
    }
    let _minor_version = cursor.u16()?;
    let major_version = cursor.u16()?;
    let pool = ConstantPool::parse(&mut cursor)?;

    let access = cursor.u16()?;
    let name = pool.class_name(cursor.u16()?)?.to_string();
    let superclass = pool.optional_class_name(cursor.u16()?)?.map(str::to_string);

    let interface_count = cursor.u16()?;
    let mut interfaces = Vec::with_capacity(usize::from(interface_count));
    for _ in 0..interface_count {
        interfaces.push(pool.class_name(cursor.u16()?)?.to_string());
    }

    let fields = parse_members(&mut cursor, &pool)?;
    let methods = parse_members(&mut cursor, &pool)?;
    let attributes = Attributes::parse(&mut cursor, &pool)?;

    if !cursor.is_empty() {
        return Err(malformed(format!(
            "{} trailing bytes after class {}",
            bytes.len() - cursor.position(),
            name
        )));
    }

    debug!(
        class_name = %name,
        fields = fields.len(),
        methods = methods.len(),
        constants = pool.len(),
        "parsed class file"
    );

    Ok(RawClass {
        major_version,
        access,
        name,
        superclass,
        interfaces,
        fields,
        methods,
        attributes,
    })
}

fn parse_members(cursor: &mut Cursor<'_>, pool: &ConstantPool) -> Result<Vec<RawMember>, ExError> {
    let count = cursor.u16()?;
    let mut members = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let access = cursor.u16()?;
        let name = pool.utf8(cursor.u16()?)?.to_string();
        let descriptor = pool.utf8(cursor.u16()?)?.to_string();
        let attributes = Attributes::parse(cursor, pool)?;
        members.push(RawMember {
            access,
            name,
            descriptor,
            attributes,
        });
    }
    Ok(members)
}

fn flags(raw: u16) -> AccessFlags {
    AccessFlags::from_bits_retain(u32::from(raw))
}

fn replay(raw: RawClass) -> Result<ClassInfo, ExError> {
    let mut builder = ModelBuilder::new();
    builder.begin_class(ClassHeader {
        name: raw.name,
        access: flags(raw.access),
        version: u32::from(raw.major_version),
        signature: raw.attributes.signature,
        superclass: raw.superclass,
        interfaces: raw.interfaces,
    })?;

    for field in raw.fields {
        let access = flags(field.access);
        let constant = field
            .attributes
            .constant
            .filter(|_| access.is_static_final());
        let id = builder.visit_field(FieldHeader {
            name: field.name,
            access,
            descriptor: field.descriptor,
            signature: field.attributes.signature,
            constant,
        })?;
        if let Some(id) = id {
            replay_annotations(
                &mut builder,
                AnnotationTarget::Field(id),
                field.attributes.annotations,
            )?;
        }
    }

    for method in raw.methods {
        let id = builder.visit_method(MethodHeader {
            name: method.name,
            access: flags(method.access),
            descriptor: method.descriptor,
            signature: method.attributes.signature,
            exceptions: method.attributes.exceptions,
        })?;
        if let Some(id) = id {
            replay_annotations(
                &mut builder,
                AnnotationTarget::Member(id),
                method.attributes.annotations,
            )?;
        }
    }

    replay_annotations(
        &mut builder,
        AnnotationTarget::Class,
        raw.attributes.annotations,
    )?;
    for inner in raw.attributes.inner_classes {
        builder.visit_inner_class(&inner.name, flags(inner.access))?;
    }

    Ok(builder.end_class()?)
}

fn replay_annotations(
    builder: &mut ModelBuilder,
    target: AnnotationTarget,
    annotations: Vec<RawAnnotation>,
) -> Result<(), ExError> {
    for annotation in annotations {
        let id = builder.visit_annotation(target, &annotation.descriptor)?;
        for (key, value) in annotation.values {
            builder.visit_annotation_value(id, key, value)?;
        }
    }
    Ok(())
}
