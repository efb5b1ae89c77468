//! Recursive-descent walk over the JVM generic signature grammar.
//!
//! The reader knows the grammar and nothing about rendering; it reports
//! what it finds to a [`SignatureVisitor`]. Sub-structures (bounds,
//! parameters, superclass, ...) are reported to the visitor returned by the
//! corresponding `visit_*` call, which may be the same visitor or a child.

use crate::errors::{ClassDeltaError, Result};

/// Wildcard indicator of a type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `+T`, rendered `? extends T`
    Extends,
    /// `-T`, rendered `? super T`
    Super,
    /// plain `T`
    Exact,
}

pub trait SignatureVisitor {
    fn visit_formal_type_parameter(&mut self, name: &str);
    fn visit_class_bound(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_interface_bound(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_superclass(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_interface(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_parameter_type(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_return_type(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_exception_type(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_base_type(&mut self, descriptor: char);
    fn visit_type_variable(&mut self, name: &str);
    fn visit_array_type(&mut self) -> &mut dyn SignatureVisitor;
    fn visit_class_type(&mut self, name: &str);
    fn visit_inner_class_type(&mut self, name: &str);
    /// `*`
    fn visit_unbounded_type_argument(&mut self);
    fn visit_type_argument(&mut self, wildcard: Wildcard) -> &mut dyn SignatureVisitor;
    fn visit_end(&mut self);
}

pub struct SignatureReader<'a> {
    signature: &'a str,
    bytes: &'a [u8],
}

impl<'a> SignatureReader<'a> {
    pub fn new(signature: &'a str) -> Self {
        Self {
            signature,
            bytes: signature.as_bytes(),
        }
    }

    /// Walk a class or method signature.
    pub fn accept(&self, visitor: &mut dyn SignatureVisitor) -> Result<()> {
        let len = self.bytes.len();
        let mut offset = 0;

        if self.at(0)? == b'<' {
            offset = 1;
            loop {
                let end = self.find(offset, b':')?;
                if end == offset {
                    return Err(self.error(offset, "empty formal type parameter name"));
                }
                visitor.visit_formal_type_parameter(&self.signature[offset..end]);
                offset = end + 1;

                if matches!(self.at(offset)?, b'L' | b'[' | b'T') {
                    offset = self.parse_type(offset, visitor.visit_class_bound())?;
                }
                while self.at(offset)? == b':' {
                    offset = self.parse_type(offset + 1, visitor.visit_interface_bound())?;
                }
                if self.at(offset)? == b'>' {
                    break;
                }
            }
            offset += 1;
        }

        if self.at(offset)? == b'(' {
            offset += 1;
            while self.at(offset)? != b')' {
                offset = self.parse_type(offset, visitor.visit_parameter_type())?;
            }
            offset = self.parse_type(offset + 1, visitor.visit_return_type())?;
            while offset < len {
                if self.bytes[offset] != b'^' {
                    return Err(self.error(offset, "expected '^' before exception type"));
                }
                offset = self.parse_type(offset + 1, visitor.visit_exception_type())?;
            }
        } else {
            offset = self.parse_type(offset, visitor.visit_superclass())?;
            while offset < len {
                offset = self.parse_type(offset, visitor.visit_interface())?;
            }
        }
        Ok(())
    }

    /// Walk a single field type signature; the whole input must be consumed.
    pub fn accept_type(&self, visitor: &mut dyn SignatureVisitor) -> Result<()> {
        let end = self.parse_type(0, visitor)?;
        if end != self.bytes.len() {
            return Err(self.error(end, "trailing characters after type"));
        }
        Ok(())
    }

    fn parse_type(&self, start: usize, visitor: &mut dyn SignatureVisitor) -> Result<usize> {
        let c = self.at(start)?;
        let mut offset = start + 1;
        match c {
            b'Z' | b'C' | b'B' | b'S' | b'I' | b'F' | b'J' | b'D' | b'V' => {
                visitor.visit_base_type(c as char);
                Ok(offset)
            }
            b'[' => self.parse_type(offset, visitor.visit_array_type()),
            b'T' => {
                let end = self.find(offset, b';')?;
                visitor.visit_type_variable(&self.signature[offset..end]);
                Ok(end + 1)
            }
            b'L' => {
                let mut name_start = offset;
                let mut visited = false;
                let mut inner = false;
                loop {
                    let c = self.at(offset)?;
                    offset += 1;
                    match c {
                        b'.' | b';' => {
                            if !visited {
                                self.visit_name(visitor, name_start, offset - 1, inner)?;
                            }
                            if c == b';' {
                                visitor.visit_end();
                                return Ok(offset);
                            }
                            name_start = offset;
                            visited = false;
                            inner = true;
                        }
                        b'<' => {
                            self.visit_name(visitor, name_start, offset - 1, inner)?;
                            visited = true;
                            loop {
                                match self.at(offset)? {
                                    b'>' => break,
                                    b'*' => {
                                        offset += 1;
                                        visitor.visit_unbounded_type_argument();
                                    }
                                    b'+' => {
                                        offset = self.parse_type(
                                            offset + 1,
                                            visitor.visit_type_argument(Wildcard::Extends),
                                        )?;
                                    }
                                    b'-' => {
                                        offset = self.parse_type(
                                            offset + 1,
                                            visitor.visit_type_argument(Wildcard::Super),
                                        )?;
                                    }
                                    _ => {
                                        offset = self.parse_type(
                                            offset,
                                            visitor.visit_type_argument(Wildcard::Exact),
                                        )?;
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
            other => Err(self.error(
                start,
                &format!("unexpected character '{}'", other as char),
            )),
        }
    }

    fn visit_name(
        &self,
        visitor: &mut dyn SignatureVisitor,
        start: usize,
        end: usize,
        inner: bool,
    ) -> Result<()> {
        if end <= start {
            return Err(self.error(start, "empty class name"));
        }
        let name = &self.signature[start..end];
        if inner {
            visitor.visit_inner_class_type(name);
        } else {
            visitor.visit_class_type(name);
        }
        Ok(())
    }

    fn at(&self, pos: usize) -> Result<u8> {
        self.bytes
            .get(pos)
            .copied()
            .ok_or_else(|| self.error(pos, "unexpected end of signature"))
    }

    fn find(&self, from: usize, needle: u8) -> Result<usize> {
        self.bytes
            .get(from..)
            .and_then(|rest| rest.iter().position(|&b| b == needle))
            .map(|idx| from + idx)
            .ok_or_else(|| self.error(from, &format!("missing '{}'", needle as char)))
    }

    fn error(&self, position: usize, reason: &str) -> ClassDeltaError {
        ClassDeltaError::MalformedSignature {
            signature: self.signature.to_string(),
            position,
            reason: reason.to_string(),
        }
    }
}
