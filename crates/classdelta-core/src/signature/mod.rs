//! Generic signature decoder.
//!
//! Turns JVM signature strings into Java-like type strings:
//!
//! ```
//! use classdelta_core::signature::decode_method_signature;
//!
//! let sig = decode_method_signature(
//!     "<T:Ljava/lang/Object;>(Ljava/util/List<+TT;>;I)[TT;^Ljava/io/IOException;",
//! )
//! .unwrap();
//! assert_eq!(sig.type_parameters, "<T>");
//! assert_eq!(sig.argument_types, "java.util.List<? extends T>, int");
//! assert_eq!(sig.return_type, "T[]");
//! assert_eq!(sig.exceptions, ["java.io.IOException"]);
//! ```
//!
//! ## Rules
//!
//! - `java.lang.Object` is dropped as a formal parameter bound and as a
//!   generic superclass; it is kept inside argument lists, in parameters and
//!   in return, throws, interface and field types.
//! - Interface and exception lists are sorted.
//! - Members without a `Signature` attribute are decoded from their erased
//!   descriptor by [`descriptor`], which does not use the grammar walker.
//! - Malformed input is an error; there is no partial result.

pub mod descriptor;
pub mod reader;
mod renderer;

use crate::errors::Result;
use reader::SignatureReader;
use renderer::TypeRenderer;

pub use descriptor::{decode_field_descriptor, decode_method_descriptor};

/// Decoded class signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignature {
    /// `<K, V extends java.lang.Number>`, empty when not generic
    pub type_parameters: String,
    /// Generic superclass, `None` when it is `java.lang.Object`
    pub superclass: Option<String>,
    /// Generic interfaces, sorted
    pub interfaces: Vec<String>,
}

/// Decoded method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// `<T>`, empty when not generic
    pub type_parameters: String,
    /// Parameter types joined with `", "`
    pub argument_types: String,
    pub return_type: String,
    /// Exceptions from the signature's throws section, sorted
    pub exceptions: Vec<String>,
}

pub fn decode_class_signature(signature: &str) -> Result<ClassSignature> {
    let mut renderer = TypeRenderer::declaration();
    SignatureReader::new(signature).accept(&mut renderer)?;
    Ok(ClassSignature {
        type_parameters: renderer.formal_parameters().to_string(),
        superclass: renderer
            .superclass()
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        interfaces: renderer.interfaces(),
    })
}

pub fn decode_method_signature(signature: &str) -> Result<MethodSignature> {
    let mut renderer = TypeRenderer::declaration();
    SignatureReader::new(signature).accept(&mut renderer)?;
    Ok(MethodSignature {
        type_parameters: renderer.formal_parameters().to_string(),
        argument_types: renderer.parameters().to_string(),
        return_type: renderer.return_type().unwrap_or("void").to_string(),
        exceptions: renderer.exceptions(),
    })
}

/// Decode a field type signature such as `Ljava/util/List<Ljava/lang/String;>;`.
pub fn decode_field_signature(signature: &str) -> Result<String> {
    let mut renderer = TypeRenderer::standalone();
    SignatureReader::new(signature).accept_type(&mut renderer)?;
    Ok(renderer.rendered().to_string())
}

/// Field type from the signature when present, else from the descriptor.
pub fn field_type(descriptor: &str, signature: Option<&str>) -> Result<String> {
    match signature {
        Some(sig) if !sig.is_empty() => decode_field_signature(sig),
        _ => decode_field_descriptor(descriptor),
    }
}

/// Method shape from the signature when present, else from the descriptor.
/// Exceptions are not taken from either; they come from the `Exceptions`
/// attribute.
pub fn method_type(descriptor: &str, signature: Option<&str>) -> Result<MethodSignature> {
    match signature {
        Some(sig) if !sig.is_empty() => decode_method_signature(sig),
        _ => {
            let (arguments, return_type) = decode_method_descriptor(descriptor)?;
            Ok(MethodSignature {
                type_parameters: String::new(),
                argument_types: arguments.join(", "),
                return_type,
                exceptions: Vec::new(),
            })
        }
    }
}
