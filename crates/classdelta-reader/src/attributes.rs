//! Attributes the model cares about. Everything else is skipped by length.

use classdelta_core::errors::ExError;
use classdelta_core::model::annotation::SimpleValue;
use classdelta_core::model::{AnnotationInfo, AnnotationValue, ConstantValue};
use classdelta_core::signature::decode_field_descriptor;

use crate::constant_pool::ConstantPool;
use crate::cursor::Cursor;
use crate::errors::malformed;

const SIGNATURE: &str = "Signature";
const CONSTANT_VALUE: &str = "ConstantValue";
const EXCEPTIONS: &str = "Exceptions";
const VISIBLE_ANNOTATIONS: &str = "RuntimeVisibleAnnotations";
const INVISIBLE_ANNOTATIONS: &str = "RuntimeInvisibleAnnotations";
const INNER_CLASSES: &str = "InnerClasses";

/// An annotation as read from the file: its type descriptor and its
/// element values in file order.
#[derive(Debug, Clone)]
pub(crate) struct RawAnnotation {
    pub(crate) descriptor: String,
    pub(crate) values: Vec<(String, AnnotationValue)>,
}

#[derive(Debug, Clone)]
pub(crate) struct RawInnerClass {
    pub(crate) name: String,
    pub(crate) access: u16,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Attributes {
    pub(crate) signature: Option<String>,
    pub(crate) constant: Option<ConstantValue>,
    pub(crate) exceptions: Vec<String>,
    pub(crate) annotations: Vec<RawAnnotation>,
    pub(crate) inner_classes: Vec<RawInnerClass>,
}

impl Attributes {
    pub(crate) fn parse(cursor: &mut Cursor<'_>, pool: &ConstantPool) -> Result<Self, ExError> {
        let mut out = Attributes::default();
        let count = cursor.u16()?;
        for _ in 0..count {
            let name = pool.utf8(cursor.u16()?)?;
            let length = cursor.u32()? as usize;
            let mut body = Cursor::new(cursor.take(length)?);

            match name {
                SIGNATURE => {
                    out.signature = Some(pool.utf8(body.u16()?)?.to_string());
                }
                CONSTANT_VALUE => {
                    out.constant = Some(pool.field_constant(body.u16()?)?);
                }
                EXCEPTIONS => {
                    let n = body.u16()?;
                    for _ in 0..n {
                        out.exceptions.push(pool.class_name(body.u16()?)?.to_string());
                    }
                }
                VISIBLE_ANNOTATIONS | INVISIBLE_ANNOTATIONS => {
                    let n = body.u16()?;
                    for _ in 0..n {
                        out.annotations.push(read_annotation(&mut body, pool)?);
                    }
                }
                INNER_CLASSES => {
                    let n = body.u16()?;
                    for _ in 0..n {
                        let inner = body.u16()?;
                        let _outer = body.u16()?;
                        let _simple_name = body.u16()?;
                        let access = body.u16()?;
                        out.inner_classes.push(RawInnerClass {
                            name: pool.class_name(inner)?.to_string(),
                            access,
                        });
                    }
                }
                _ => continue,
            }

            if !body.is_empty() {
                return Err(malformed(format!(
                    "attribute {} has {} trailing bytes",
                    name,
                    length - body.position()
                )));
            }
        }
        Ok(out)
    }
}

fn read_annotation(cursor: &mut Cursor<'_>, pool: &ConstantPool) -> Result<RawAnnotation, ExError> {
    let descriptor = pool.utf8(cursor.u16()?)?.to_string();
    let pairs = cursor.u16()?;
    let mut values = Vec::with_capacity(usize::from(pairs));
    for _ in 0..pairs {
        let key = pool.utf8(cursor.u16()?)?.to_string();
        values.push((key, read_element_value(cursor, pool)?));
    }
    Ok(RawAnnotation { descriptor, values })
}

fn read_element_value(
    cursor: &mut Cursor<'_>,
    pool: &ConstantPool,
) -> Result<AnnotationValue, ExError> {
    let tag = cursor.u8()?;
    let simple = match tag {
        b'B' => SimpleValue::Byte(pool.integer(cursor.u16()?)? as i8),
        b'C' => {
            let code = pool.integer(cursor.u16()?)?;
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| malformed(format!("invalid char constant {}", code)))?;
            SimpleValue::Char(c)
        }
        b'S' => SimpleValue::Short(pool.integer(cursor.u16()?)? as i16),
        b'I' => SimpleValue::Int(pool.integer(cursor.u16()?)?),
        b'Z' => SimpleValue::Boolean(pool.integer(cursor.u16()?)? != 0),
        b'J' => SimpleValue::Long(pool.long(cursor.u16()?)?),
        b'F' => SimpleValue::Float(pool.float(cursor.u16()?)?),
        b'D' => SimpleValue::Double(pool.double(cursor.u16()?)?),
        b's' => SimpleValue::String(pool.utf8(cursor.u16()?)?.to_string()),
        b'e' => {
            let type_descriptor = pool.utf8(cursor.u16()?)?;
            let constant = pool.utf8(cursor.u16()?)?;
            SimpleValue::Enum {
                type_name: decode_field_descriptor(type_descriptor)?,
                constant: constant.to_string(),
            }
        }
        b'c' => {
            let descriptor = pool.utf8(cursor.u16()?)?;
            let type_name = if descriptor == "V" {
                "void".to_string()
            } else {
                decode_field_descriptor(descriptor)?
            };
            SimpleValue::Class(type_name)
        }
        b'@' => {
            let nested = read_annotation(cursor, pool)?;
            return Ok(AnnotationValue::Annotation(nested.into_info()));
        }
        b'[' => {
            let n = cursor.u16()?;
            let mut items = Vec::with_capacity(usize::from(n));
            for _ in 0..n {
                items.push(read_element_value(cursor, pool)?);
            }
            return Ok(AnnotationValue::Array(items));
        }
        other => {
            return Err(malformed(format!(
                "unknown element_value tag '{}'",
                char::from(other)
            )))
        }
    };
    Ok(AnnotationValue::Simple(simple))
}

impl RawAnnotation {
    /// Build a standalone annotation, used for nested annotation values.
    pub(crate) fn into_info(self) -> AnnotationInfo {
        self.values
            .into_iter()
            .fold(AnnotationInfo::builder(&self.descriptor), |builder, (k, v)| {
                builder.value(k, v)
            })
            .build()
    }
}
