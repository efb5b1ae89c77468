//! Event-driven construction of the structural model.
//!
//! A class-file reader reports what it finds as a sequence of events:
//!
//! ```text
//! begin_class
//!   (visit_field | visit_method | visit_annotation | visit_annotation_value
//!    | visit_inner_class)*
//! end_class
//! ```
//!
//! [`ModelBuilder`] keeps an explicit stack of classes under construction.
//! Member and annotation events return plain index handles that later
//! events use to name their parent, so nested annotation values are
//! attached by explicit parent passing rather than through a shared cursor.
//! `end_class` sorts every child collection and freezes the class.

use tracing::trace;

use crate::errors::{ClassDeltaError, Result};
use crate::model::annotation::AnnotationInfoBuilder;
use crate::model::class::ClassInfoBuilder;
use crate::model::field::FieldInfoBuilder;
use crate::model::method::{MemberBuilder, CONSTRUCTOR_NAME};
use crate::model::{
    AccessFlags, AnnotationInfo, AnnotationValue, ClassInfo, ConstantValue, ConstructorInfo,
    FieldInfo, InnerClassInfo, MethodInfo,
};
use crate::signature;

const STATIC_INITIALIZER_NAME: &str = "<clinit>";
const LAMBDA_PREFIX: &str = "lambda$";
const ENUM_VALUES_FIELD: &str = "$VALUES";
const LAMBDA_LOOKUP_CLASS: &str = "java/lang/invoke/MethodHandles$Lookup";

/// Payload of `begin_class`.
#[derive(Debug, Clone, Default)]
pub struct ClassHeader {
    /// Internal (`com/acme/Foo`) or dotted name
    pub name: String,
    pub access: AccessFlags,
    /// Class-file major version; 0 means unknown
    pub version: u32,
    pub signature: Option<String>,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
}

/// Payload of `visit_field`.
#[derive(Debug, Clone, Default)]
pub struct FieldHeader {
    pub name: String,
    pub access: AccessFlags,
    pub descriptor: String,
    pub signature: Option<String>,
    pub constant: Option<ConstantValue>,
}

/// Payload of `visit_method`; constructors are methods named `<init>`.
#[derive(Debug, Clone, Default)]
pub struct MethodHeader {
    pub name: String,
    pub access: AccessFlags,
    pub descriptor: String,
    pub signature: Option<String>,
    pub exceptions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationId(usize);

/// Element an annotation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationTarget {
    Class,
    Field(FieldId),
    Member(MemberId),
}

#[derive(Debug)]
struct ClassDraft {
    class: ClassInfoBuilder,
    fields: Vec<FieldInfoBuilder>,
    members: Vec<MemberBuilder>,
    annotations: Vec<(AnnotationTarget, AnnotationInfoBuilder)>,
}

#[derive(Debug, Default)]
pub struct ModelBuilder {
    stack: Vec<ClassDraft>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of classes currently under construction.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// # Errors
    ///
    /// `MissingName` for an empty name, `MalformedSignature` when the
    /// class signature cannot be decoded.
    pub fn begin_class(&mut self, header: ClassHeader) -> Result<()> {
        require_name(&header.name, "class")?;

        let mut class = ClassInfo::builder(&header.name)
            .access(header.access)
            .version(header.version);
        if let Some(superclass) = header.superclass.as_deref() {
            class = class.superclass(superclass);
        }

        let mut interfaces = header.interfaces;
        if let Some(sig) = header.signature.as_deref().filter(|s| !s.is_empty()) {
            let decoded = signature::decode_class_signature(sig)?;
            class = class.type_parameters(decoded.type_parameters);
            interfaces = decoded.interfaces;
        }
        for interface in interfaces {
            class = class.interface(interface);
        }

        self.stack.push(ClassDraft {
            class,
            fields: Vec::new(),
            members: Vec::new(),
            annotations: Vec::new(),
        });
        Ok(())
    }

    /// Returns `None` for fields that are not part of the model (the
    /// synthetic `$VALUES` array of an enum).
    ///
    /// # Errors
    ///
    /// `NoOpenClass`, `MissingName` or `MalformedSignature`.
    pub fn visit_field(&mut self, header: FieldHeader) -> Result<Option<FieldId>> {
        let draft = self.current("visit_field")?;
        require_name(&header.name, "field")?;
        if header.name == ENUM_VALUES_FIELD && draft.class.is_enum() {
            return Ok(None);
        }

        let field_type = signature::field_type(&header.descriptor, header.signature.as_deref())?;
        let mut field = FieldInfo::builder(header.name, field_type).access(header.access);
        field.set_value(header.constant);

        draft.fields.push(field);
        Ok(Some(FieldId(draft.fields.len() - 1)))
    }

    /// Returns `None` for methods that are not part of the model: static
    /// initializers and synthetic lambda bodies.
    ///
    /// # Errors
    ///
    /// `NoOpenClass`, `MissingName` or `MalformedSignature`.
    pub fn visit_method(&mut self, header: MethodHeader) -> Result<Option<MemberId>> {
        let draft = self.current("visit_method")?;
        require_name(&header.name, "method")?;
        if header.name == STATIC_INITIALIZER_NAME || header.name.starts_with(LAMBDA_PREFIX) {
            return Ok(None);
        }

        let shape = signature::method_type(&header.descriptor, header.signature.as_deref())?;

        let member = if header.name == CONSTRUCTOR_NAME {
            ConstructorInfo::builder()
                .access(header.access)
                .argument_types(shape.argument_types)
                .exceptions(&header.exceptions)
        } else {
            let mut access = header.access;
            if draft.class.is_interface() && access == AccessFlags::PUBLIC {
                access |= AccessFlags::DEFAULT;
            }
            MethodInfo::builder(header.name)
                .access(access)
                .generic_types(shape.type_parameters)
                .return_type(shape.return_type)
                .argument_types(shape.argument_types)
                .exceptions(&header.exceptions)
        };

        draft.members.push(member);
        Ok(Some(MemberId(draft.members.len() - 1)))
    }

    /// # Errors
    ///
    /// `NoOpenClass`, `MissingName`, or `UnknownHandle` when the target
    /// does not belong to the current class.
    pub fn visit_annotation(
        &mut self,
        target: AnnotationTarget,
        descriptor: &str,
    ) -> Result<AnnotationId> {
        let draft = self.current("visit_annotation")?;
        require_name(descriptor, "annotation")?;
        match target {
            AnnotationTarget::Class => {}
            AnnotationTarget::Field(FieldId(id)) if id >= draft.fields.len() => {
                return Err(unknown_handle("field", id));
            }
            AnnotationTarget::Member(MemberId(id)) if id >= draft.members.len() => {
                return Err(unknown_handle("member", id));
            }
            _ => {}
        }

        draft
            .annotations
            .push((target, AnnotationInfo::builder(descriptor)));
        Ok(AnnotationId(draft.annotations.len() - 1))
    }

    /// # Errors
    ///
    /// `NoOpenClass` or `UnknownHandle`.
    pub fn visit_annotation_value(
        &mut self,
        annotation: AnnotationId,
        key: impl Into<String>,
        value: AnnotationValue,
    ) -> Result<()> {
        let draft = self.current("visit_annotation_value")?;
        let AnnotationId(id) = annotation;
        let (_, builder) = draft
            .annotations
            .get_mut(id)
            .ok_or_else(|| unknown_handle("annotation", id))?;
        builder.insert(key.into(), value);
        Ok(())
    }

    /// # Errors
    ///
    /// `NoOpenClass` or `MissingName`.
    pub fn visit_inner_class(&mut self, name: &str, access: AccessFlags) -> Result<()> {
        let draft = self.current("visit_inner_class")?;
        require_name(name, "inner class")?;
        if name == LAMBDA_LOOKUP_CLASS {
            return Ok(());
        }
        draft
            .class
            .push_inner_class(InnerClassInfo::new(name, access));
        Ok(())
    }

    /// Freeze the innermost open class and return it.
    ///
    /// # Errors
    ///
    /// `UnbalancedEnd` when no class is open.
    pub fn end_class(&mut self) -> Result<ClassInfo> {
        let draft = self.stack.pop().ok_or(ClassDeltaError::UnbalancedEnd)?;
        let ClassDraft {
            mut class,
            mut fields,
            mut members,
            annotations,
        } = draft;

        for (target, annotation) in annotations {
            let annotation = annotation.build();
            match target {
                AnnotationTarget::Class => class.push_annotation(annotation),
                AnnotationTarget::Field(FieldId(id)) => {
                    if let Some(field) = fields.get_mut(id) {
                        field.push_annotation(annotation);
                    }
                }
                AnnotationTarget::Member(MemberId(id)) => {
                    if let Some(member) = members.get_mut(id) {
                        member.push_annotation(annotation);
                    }
                }
            }
        }

        trace!(
            class_name = class.name(),
            fields = fields.len(),
            members = members.len(),
            "freezing class"
        );
        for field in fields {
            class.push_field(field.build());
        }
        for member in members {
            if member.is_constructor() {
                class.push_constructor(member.build_constructor());
            } else {
                class.push_method(member.build_method());
            }
        }

        Ok(class.build())
    }

    fn current(&mut self, event: &str) -> Result<&mut ClassDraft> {
        self.stack
            .last_mut()
            .ok_or_else(|| ClassDeltaError::NoOpenClass {
                event: event.to_string(),
            })
    }
}

fn require_name(name: &str, entity: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ClassDeltaError::MissingName {
            entity: entity.to_string(),
        });
    }
    Ok(())
}

fn unknown_handle(entity: &str, id: usize) -> ClassDeltaError {
    ClassDeltaError::UnknownHandle {
        entity: entity.to_string(),
        id,
    }
}
