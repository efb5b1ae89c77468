//! Renders signature visits into Java-like source strings.

use super::reader::{SignatureVisitor, Wildcard};

/// Stack of booleans; an empty stack reads as `false`.
///
/// `argument_stack` has one slot per class type being rendered: set while
/// its `<...>` list is open. `array_stack` has one slot per type being
/// rendered: set when that type is an array, so finishing its element type
/// drains one `[]` per set slot.
#[derive(Debug, Default)]
struct BitStack(Vec<bool>);

impl BitStack {
    fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    fn pop(&mut self) -> bool {
        self.0.pop().unwrap_or(false)
    }

    fn top(&self) -> bool {
        self.0.last().copied().unwrap_or(false)
    }

    fn set_top(&mut self) {
        match self.0.last_mut() {
            Some(top) => *top = true,
            None => self.0.push(true),
        }
    }
}

const OBJECT_INTERNAL_NAME: &str = "java/lang/Object";

#[derive(Debug)]
pub(crate) struct TypeRenderer {
    declaration: String,
    /// Render `java.lang.Object` even outside argument lists and parameters.
    keep_object: bool,
    seen_formal_parameter: bool,
    /// Length of `declaration` right after the current formal's name.
    formal_mark: usize,
    seen_parameter: bool,
    formal_parameters: Option<String>,
    return_type: Option<Box<TypeRenderer>>,
    superclass: Option<Box<TypeRenderer>>,
    interfaces: Vec<TypeRenderer>,
    exceptions: Vec<TypeRenderer>,
    separator: &'static str,
    argument_stack: BitStack,
    array_stack: BitStack,
}

impl TypeRenderer {
    fn new(keep_object: bool) -> Self {
        Self {
            declaration: String::new(),
            keep_object,
            seen_formal_parameter: false,
            formal_mark: 0,
            seen_parameter: false,
            formal_parameters: None,
            return_type: None,
            superclass: None,
            interfaces: Vec::new(),
            exceptions: Vec::new(),
            separator: "",
            argument_stack: BitStack::default(),
            // slot of the root type
            array_stack: BitStack(vec![false]),
        }
    }

    /// Renderer for a class or method signature.
    pub(crate) fn declaration() -> Self {
        Self::new(false)
    }

    /// Renderer for a standalone type (field, return, throws, interface).
    pub(crate) fn standalone() -> Self {
        Self::new(true)
    }

    pub(crate) fn rendered(&self) -> &str {
        &self.declaration
    }

    /// `<T, U extends java.lang.Number>`, empty when there are none.
    pub(crate) fn formal_parameters(&self) -> &str {
        self.formal_parameters.as_deref().unwrap_or("")
    }

    /// Parameter list between the parentheses of a method declaration.
    pub(crate) fn parameters(&self) -> &str {
        let rest = &self.declaration[self.formal_parameters().len()..];
        rest.strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .unwrap_or(rest)
    }

    pub(crate) fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref().map(TypeRenderer::rendered)
    }

    /// Generic superclass; empty when it is `java.lang.Object`.
    pub(crate) fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref().map(TypeRenderer::rendered)
    }

    pub(crate) fn interfaces(&self) -> Vec<String> {
        sorted(&self.interfaces)
    }

    pub(crate) fn exceptions(&self) -> Vec<String> {
        sorted(&self.exceptions)
    }

    fn end_formals(&mut self) {
        if self.seen_formal_parameter {
            self.declaration.push('>');
            self.seen_formal_parameter = false;
            self.formal_parameters = Some(self.declaration.clone());
        }
    }

    fn start_type(&mut self) {
        self.array_stack.push(false);
    }

    fn end_type(&mut self) {
        self.array_stack.pop();
        while self.array_stack.top() {
            self.array_stack.pop();
            self.declaration.push_str("[]");
        }
    }

    fn open_type_argument(&mut self) {
        if !self.argument_stack.top() {
            self.argument_stack.set_top();
            self.declaration.push('<');
        } else {
            self.declaration.push_str(", ");
        }
    }
}

fn sorted(renderers: &[TypeRenderer]) -> Vec<String> {
    let mut out: Vec<String> = renderers.iter().map(|r| r.declaration.clone()).collect();
    out.sort();
    out
}

impl SignatureVisitor for TypeRenderer {
    fn visit_formal_type_parameter(&mut self, name: &str) {
        self.declaration
            .push_str(if self.seen_formal_parameter { ", " } else { "<" });
        self.declaration.push_str(name);
        self.formal_mark = self.declaration.len();
        self.seen_formal_parameter = true;
    }

    fn visit_class_bound(&mut self) -> &mut dyn SignatureVisitor {
        self.separator = " extends ";
        self.start_type();
        self
    }

    fn visit_interface_bound(&mut self) -> &mut dyn SignatureVisitor {
        self.separator = if self.declaration.len() > self.formal_mark {
            " & "
        } else {
            " extends "
        };
        self.start_type();
        self
    }

    fn visit_superclass(&mut self) -> &mut dyn SignatureVisitor {
        self.end_formals();
        &mut **self
            .superclass
            .insert(Box::new(TypeRenderer::declaration()))
    }

    fn visit_interface(&mut self) -> &mut dyn SignatureVisitor {
        self.interfaces.push(TypeRenderer::standalone());
        let last = self.interfaces.len() - 1;
        &mut self.interfaces[last]
    }

    fn visit_parameter_type(&mut self) -> &mut dyn SignatureVisitor {
        self.end_formals();
        if self.seen_parameter {
            self.declaration.push_str(", ");
        } else {
            self.seen_parameter = true;
            self.declaration.push('(');
        }
        self.start_type();
        self
    }

    fn visit_return_type(&mut self) -> &mut dyn SignatureVisitor {
        self.end_formals();
        if self.seen_parameter {
            self.seen_parameter = false;
        } else {
            self.declaration.push('(');
        }
        self.declaration.push(')');
        &mut **self
            .return_type
            .insert(Box::new(TypeRenderer::standalone()))
    }

    fn visit_exception_type(&mut self) -> &mut dyn SignatureVisitor {
        self.exceptions.push(TypeRenderer::standalone());
        let last = self.exceptions.len() - 1;
        &mut self.exceptions[last]
    }

    fn visit_base_type(&mut self, descriptor: char) {
        let name = match descriptor {
            'V' => "void",
            'B' => "byte",
            'J' => "long",
            'Z' => "boolean",
            'I' => "int",
            'S' => "short",
            'C' => "char",
            'F' => "float",
            _ => "double",
        };
        self.declaration.push_str(name);
        self.end_type();
    }

    fn visit_type_variable(&mut self, name: &str) {
        self.declaration.push_str(self.separator);
        self.separator = "";
        self.declaration.push_str(name);
        self.end_type();
    }

    fn visit_array_type(&mut self) -> &mut dyn SignatureVisitor {
        self.array_stack.set_top();
        self.start_type();
        self
    }

    fn visit_class_type(&mut self, name: &str) {
        let render = name != OBJECT_INTERNAL_NAME
            || self.argument_stack.top()
            || self.seen_parameter
            || self.keep_object;
        if render {
            self.declaration.push_str(self.separator);
            self.declaration.push_str(&name.replace('/', "."));
        }
        self.separator = "";
        self.argument_stack.push(false);
    }

    fn visit_inner_class_type(&mut self, name: &str) {
        if self.argument_stack.pop() {
            self.declaration.push('>');
        }
        self.declaration.push('.');
        self.declaration.push_str(self.separator);
        self.declaration.push_str(&name.replace('/', "."));
        self.separator = "";
        self.argument_stack.push(false);
    }

    fn visit_unbounded_type_argument(&mut self) {
        self.open_type_argument();
        self.declaration.push('?');
    }

    fn visit_type_argument(&mut self, wildcard: Wildcard) -> &mut dyn SignatureVisitor {
        self.open_type_argument();
        match wildcard {
            Wildcard::Extends => self.declaration.push_str("? extends "),
            Wildcard::Super => self.declaration.push_str("? super "),
            Wildcard::Exact => {}
        }
        self.start_type();
        self
    }

    fn visit_end(&mut self) {
        if self.argument_stack.pop() {
            self.declaration.push('>');
        }
        self.end_type();
    }
}
