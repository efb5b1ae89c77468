//! Plain (erased) descriptors, used when a member has no `Signature`
//! attribute. Descriptors have no generics, so a flat scan is enough.

use crate::errors::{ClassDeltaError, Result};

fn malformed(descriptor: &str, position: usize, reason: &str) -> ClassDeltaError {
    ClassDeltaError::MalformedSignature {
        signature: descriptor.to_string(),
        position,
        reason: reason.to_string(),
    }
}

/// Decode one field type starting at `start`; returns the rendered type and
/// the offset just past it.
fn decode_at(descriptor: &str, start: usize) -> Result<(String, usize)> {
    let bytes = descriptor.as_bytes();
    let mut offset = start;
    let mut dimensions = 0;
    while bytes.get(offset) == Some(&b'[') {
        dimensions += 1;
        offset += 1;
    }

    let c = *bytes
        .get(offset)
        .ok_or_else(|| malformed(descriptor, offset, "unexpected end of descriptor"))?;
    let (mut rendered, next) = match c {
        b'L' => {
            let end = bytes[offset..]
                .iter()
                .position(|&b| b == b';')
                .map(|idx| offset + idx)
                .ok_or_else(|| malformed(descriptor, offset, "missing ';'"))?;
            if end == offset + 1 {
                return Err(malformed(descriptor, offset, "empty class name"));
            }
            (descriptor[offset + 1..end].replace('/', "."), end + 1)
        }
        other => {
            let name = match other {
                b'V' => "void",
                b'B' => "byte",
                b'J' => "long",
                b'Z' => "boolean",
                b'I' => "int",
                b'S' => "short",
                b'C' => "char",
                b'F' => "float",
                b'D' => "double",
                _ => {
                    return Err(malformed(
                        descriptor,
                        offset,
                        &format!("unexpected character '{}'", other as char),
                    ))
                }
            };
            (name.to_string(), offset + 1)
        }
    };

    for _ in 0..dimensions {
        rendered.push_str("[]");
    }
    Ok((rendered, next))
}

/// `Ljava/util/List;` -> `java.util.List`, `[I` -> `int[]`.
pub fn decode_field_descriptor(descriptor: &str) -> Result<String> {
    let (rendered, end) = decode_at(descriptor, 0)?;
    if end != descriptor.len() {
        return Err(malformed(descriptor, end, "trailing characters after type"));
    }
    Ok(rendered)
}

/// `(ILjava/lang/String;)V` -> (`["int", "java.lang.String"]`, `void`).
pub fn decode_method_descriptor(descriptor: &str) -> Result<(Vec<String>, String)> {
    if !descriptor.starts_with('(') {
        return Err(malformed(descriptor, 0, "expected '('"));
    }
    let mut offset = 1;
    let mut arguments = Vec::new();
    loop {
        match descriptor.as_bytes().get(offset) {
            Some(b')') => break,
            Some(_) => {
                let (arg, next) = decode_at(descriptor, offset)?;
                arguments.push(arg);
                offset = next;
            }
            None => return Err(malformed(descriptor, offset, "missing ')'")),
        }
    }
    let (return_type, end) = decode_at(descriptor, offset + 1)?;
    if end != descriptor.len() {
        return Err(malformed(descriptor, end, "trailing characters after return type"));
    }
    Ok((arguments, return_type))
}
