//! The class-file constant pool.
//!
//! Index 0 is never valid. `Long` and `Double` entries occupy two slots;
//! the second slot holds [`Constant::Unusable`].

use classdelta_core::errors::ExError;
use classdelta_core::model::ConstantValue;

use crate::cursor::Cursor;
use crate::errors::{malformed, unsupported_constant};
use crate::mutf8;

pub const TAG_UTF8: u8 = 1;
pub const TAG_INTEGER: u8 = 3;
pub const TAG_FLOAT: u8 = 4;
pub const TAG_LONG: u8 = 5;
pub const TAG_DOUBLE: u8 = 6;
pub const TAG_CLASS: u8 = 7;
pub const TAG_STRING: u8 = 8;
pub const TAG_FIELDREF: u8 = 9;
pub const TAG_METHODREF: u8 = 10;
pub const TAG_INTERFACE_METHODREF: u8 = 11;
pub const TAG_NAME_AND_TYPE: u8 = 12;
pub const TAG_METHOD_HANDLE: u8 = 15;
pub const TAG_METHOD_TYPE: u8 = 16;
pub const TAG_DYNAMIC: u8 = 17;
pub const TAG_INVOKE_DYNAMIC: u8 = 18;
pub const TAG_MODULE: u8 = 19;
pub const TAG_PACKAGE: u8 = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Utf8(String),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Class(u16),
    String(u16),
    /// Field, method and interface-method references
    MemberRef { class: u16, name_and_type: u16 },
    NameAndType { name: u16, descriptor: u16 },
    MethodHandle { kind: u8, reference: u16 },
    MethodType(u16),
    /// `Dynamic` and `InvokeDynamic`
    Dynamic { bootstrap: u16, name_and_type: u16 },
    Module(u16),
    Package(u16),
    /// Slot 0 and the upper half of a `Long`/`Double`
    Unusable,
}

#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    entries: Vec<Constant>,
}

impl ConstantPool {
    pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ExError> {
        let count = usize::from(cursor.u16()?);
        if count == 0 {
            return Err(malformed("constant pool count is zero"));
        }
        let mut entries = Vec::with_capacity(count);
        entries.push(Constant::Unusable);

        while entries.len() < count {
            let tag = cursor.u8()?;
            let constant = match tag {
                TAG_UTF8 => {
                    let len = usize::from(cursor.u16()?);
                    Constant::Utf8(mutf8::decode(cursor.take(len)?)?)
                }
                TAG_INTEGER => Constant::Integer(cursor.i32()?),
                TAG_FLOAT => Constant::Float(cursor.f32()?),
                TAG_LONG => Constant::Long(cursor.i64()?),
                TAG_DOUBLE => Constant::Double(cursor.f64()?),
                TAG_CLASS => Constant::Class(cursor.u16()?),
                TAG_STRING => Constant::String(cursor.u16()?),
                TAG_FIELDREF | TAG_METHODREF | TAG_INTERFACE_METHODREF => Constant::MemberRef {
                    class: cursor.u16()?,
                    name_and_type: cursor.u16()?,
                },
                TAG_NAME_AND_TYPE => Constant::NameAndType {
                    name: cursor.u16()?,
                    descriptor: cursor.u16()?,
                },
                TAG_METHOD_HANDLE => Constant::MethodHandle {
                    kind: cursor.u8()?,
                    reference: cursor.u16()?,
                },
                TAG_METHOD_TYPE => Constant::MethodType(cursor.u16()?),
                TAG_DYNAMIC | TAG_INVOKE_DYNAMIC => Constant::Dynamic {
                    bootstrap: cursor.u16()?,
                    name_and_type: cursor.u16()?,
                },
                TAG_MODULE => Constant::Module(cursor.u16()?),
                TAG_PACKAGE => Constant::Package(cursor.u16()?),
                other => {
                    return Err(malformed(format!(
                        "unknown constant pool tag {} at entry {}",
                        other,
                        entries.len()
                    )))
                }
            };
            let wide = matches!(constant, Constant::Long(_) | Constant::Double(_));
            entries.push(constant);
            if wide {
                if entries.len() == count {
                    return Err(malformed("wide constant overruns the constant pool"));
                }
                entries.push(Constant::Unusable);
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    pub fn get(&self, index: u16) -> Result<&Constant, ExError> {
        match self.entries.get(usize::from(index)) {
            Some(Constant::Unusable) | None => Err(malformed(format!(
                "invalid constant pool index {}",
                index
            ))),
            Some(constant) => Ok(constant),
        }
    }

    pub fn utf8(&self, index: u16) -> Result<&str, ExError> {
        match self.get(index)? {
            Constant::Utf8(s) => Ok(s),
            other => Err(wrong_type(index, "Utf8", other)),
        }
    }

    /// Internal name of a `Class` entry, e.g. `java/lang/String`.
    pub fn class_name(&self, index: u16) -> Result<&str, ExError> {
        match self.get(index)? {
            Constant::Class(name) => self.utf8(*name),
            other => Err(wrong_type(index, "Class", other)),
        }
    }

    /// Like [`ConstantPool::class_name`] but index 0 means "absent".
    pub fn optional_class_name(&self, index: u16) -> Result<Option<&str>, ExError> {
        if index == 0 {
            return Ok(None);
        }
        self.class_name(index).map(Some)
    }

    pub fn integer(&self, index: u16) -> Result<i32, ExError> {
        match self.get(index)? {
            Constant::Integer(v) => Ok(*v),
            other => Err(wrong_type(index, "Integer", other)),
        }
    }

    pub fn long(&self, index: u16) -> Result<i64, ExError> {
        match self.get(index)? {
            Constant::Long(v) => Ok(*v),
            other => Err(wrong_type(index, "Long", other)),
        }
    }

    pub fn float(&self, index: u16) -> Result<f32, ExError> {
        match self.get(index)? {
            Constant::Float(v) => Ok(*v),
            other => Err(wrong_type(index, "Float", other)),
        }
    }

    pub fn double(&self, index: u16) -> Result<f64, ExError> {
        match self.get(index)? {
            Constant::Double(v) => Ok(*v),
            other => Err(wrong_type(index, "Double", other)),
        }
    }

    /// Value of a `ConstantValue` attribute.
    pub fn field_constant(&self, index: u16) -> Result<ConstantValue, ExError> {
        match self.get(index)? {
            Constant::Integer(v) => Ok(ConstantValue::Int(*v)),
            Constant::Long(v) => Ok(ConstantValue::Long(*v)),
            Constant::Float(v) => Ok(ConstantValue::Float(*v)),
            Constant::Double(v) => Ok(ConstantValue::Double(*v)),
            Constant::String(utf8) => Ok(ConstantValue::String(self.utf8(*utf8)?.to_string())),
            other => Err(unsupported_constant(format!(
                "constant pool entry {} ({}) cannot be a field constant",
                index,
                tag_name(other)
            ))),
        }
    }
}

fn wrong_type(index: u16, expected: &str, found: &Constant) -> ExError {
    malformed(format!(
        "constant pool entry {} is {}, expected {}",
        index,
        tag_name(found),
        expected
    ))
}

fn tag_name(constant: &Constant) -> &'static str {
    match constant {
        Constant::Utf8(_) => "Utf8",
        Constant::Integer(_) => "Integer",
        Constant::Float(_) => "Float",
        Constant::Long(_) => "Long",
        Constant::Double(_) => "Double",
        Constant::Class(_) => "Class",
        Constant::String(_) => "String",
        Constant::MemberRef { .. } => "MemberRef",
        Constant::NameAndType { .. } => "NameAndType",
        Constant::MethodHandle { .. } => "MethodHandle",
        Constant::MethodType(_) => "MethodType",
        Constant::Dynamic { .. } => "Dynamic",
        Constant::Module(_) => "Module",
        Constant::Package(_) => "Package",
        Constant::Unusable => "Unusable",
    }
}
