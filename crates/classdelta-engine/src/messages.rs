//! Built-in English message templates.
//!
//! Templates use positional placeholders (`{0}`, `{1}`, ...) that index into
//! a record's message arguments.

use classdelta_core::diff::keys;
use classdelta_core::MessageArg;

/// One template per message key, in check order.
pub const TEMPLATES: &[(&str, &str)] = &[
    (keys::CLASS_TYPE_MODIFIED, "{0}: type changed from {1} to {2}"),
    (
        keys::CLASS_VERSION_MODIFIED,
        "{0}: class file version changed from {1} to {2}",
    ),
    (
        keys::CLASS_MODIFIERS_MODIFIED,
        "{0}: modifiers changed from '{1}' ({2}) to '{3}' ({4})",
    ),
    (
        keys::CLASS_SUPERCLASS_MODIFIED,
        "{0}: superclass changed from {1} to {2}",
    ),
    (keys::CLASS_INTERFACE_REMOVED, "{0}: interface {1} removed"),
    (keys::CLASS_INTERFACE_ADDED, "{0}: interface {1} added"),
    (keys::CLASS_ANNOTATION_REMOVED, "{0}: annotation {1} removed"),
    (keys::CLASS_ANNOTATION_ADDED, "{0}: annotation {1} added"),
    (keys::CLASS_FIELD_REMOVED, "{0}: field {1} removed"),
    (keys::CLASS_FIELD_ADDED, "{0}: field {1} added"),
    (keys::CLASS_CONSTRUCTOR_REMOVED, "{0}: constructor {1} removed"),
    (keys::CLASS_CONSTRUCTOR_ADDED, "{0}: constructor {1} added"),
    (keys::CLASS_METHOD_REMOVED, "{0}: method {1} removed"),
    (keys::CLASS_METHOD_ADDED, "{0}: method {1} added"),
    (keys::CLASS_INNERCLASS_REMOVED, "{0}: inner class {1} removed"),
    (keys::CLASS_INNERCLASS_ADDED, "{0}: inner class {1} added"),
    (
        keys::INNERCLASS_MODIFIERS_MODIFIED,
        "Inner class {0}: modifiers changed from '{1}' ({2}) to '{3}' ({4})",
    ),
    (
        keys::FIELD_MODIFIERS_MODIFIED,
        "Field {0}: modifiers changed from '{1}' ({2}) to '{3}' ({4})",
    ),
    (keys::FIELD_TYPE_MODIFIED, "Field {0}: type changed from {1} to {2}"),
    (
        keys::FIELD_VALUE_MODIFIED,
        "Field {0}: constant value changed from {1} to {2}",
    ),
    (keys::FIELD_ANNOTATION_REMOVED, "Field {0}: annotation {1} removed"),
    (keys::FIELD_ANNOTATION_ADDED, "Field {0}: annotation {1} added"),
    (
        keys::CONSTRUCTOR_MODIFIERS_MODIFIED,
        "Constructor {0}: modifiers changed from '{1}' ({2}) to '{3}' ({4})",
    ),
    (
        keys::CONSTRUCTOR_EXCEPTION_REMOVED,
        "Constructor {0}: exception {1} removed",
    ),
    (
        keys::CONSTRUCTOR_EXCEPTION_ADDED,
        "Constructor {0}: exception {1} added",
    ),
    (
        keys::CONSTRUCTOR_ANNOTATION_REMOVED,
        "Constructor {0}: annotation {1} removed",
    ),
    (
        keys::CONSTRUCTOR_ANNOTATION_ADDED,
        "Constructor {0}: annotation {1} added",
    ),
    (
        keys::METHOD_MODIFIERS_MODIFIED,
        "Method {0}: modifiers changed from '{1}' ({2}) to '{3}' ({4})",
    ),
    (
        keys::METHOD_TYPE_MODIFIED,
        "Method {0}: return type changed from {1} to {2}",
    ),
    (keys::METHOD_EXCEPTION_REMOVED, "Method {0}: exception {1} removed"),
    (keys::METHOD_EXCEPTION_ADDED, "Method {0}: exception {1} added"),
    (keys::METHOD_ANNOTATION_REMOVED, "Method {0}: annotation {1} removed"),
    (keys::METHOD_ANNOTATION_ADDED, "Method {0}: annotation {1} added"),
    (keys::ANNOTATION_VALUE_REMOVED, "Annotation @{0}: value {1} removed"),
    (keys::ANNOTATION_VALUE_ADDED, "Annotation @{0}: value {1} added"),
    (
        keys::ANNOTATION_VALUE_MODIFIED,
        "Annotation @{0}: value {1} changed from {2} {3} to {4} {5}",
    ),
    (
        keys::PACKAGE_ANNOTATION_REMOVED,
        "Package {0}: annotation {1} removed",
    ),
    (keys::PACKAGE_ANNOTATION_ADDED, "Package {0}: annotation {1} added"),
    (keys::PACKAGE_CLASS_REMOVED, "Package {0}: class {1} removed"),
    (keys::PACKAGE_CLASS_ADDED, "Package {0}: class {1} added"),
];

/// Template for `key`, if it is a known message key.
pub fn template(key: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
}

/// Render a message.
///
/// Placeholders without a matching argument are left as written. An unknown
/// key renders as `key [arg, arg]`.
///
/// ```
/// use classdelta_core::MessageArg;
/// use classdelta_engine::messages::render;
///
/// let args = [MessageArg::from("com.acme.Foo"), MessageArg::from("run()")];
/// assert_eq!(
///     render("class.method.removed", &args),
///     "com.acme.Foo: method run() removed"
/// );
/// assert_eq!(render("no.such.key", &args), "no.such.key [com.acme.Foo, run()]");
/// ```
pub fn render(key: &str, args: &[MessageArg]) -> String {
    match template(key) {
        Some(template) => fill(template, args),
        None => {
            let joined: Vec<String> = args.iter().map(ToString::to_string).collect();
            format!("{} [{}]", key, joined.join(", "))
        }
    }
}

fn fill(template: &str, args: &[MessageArg]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });
        match arg {
            Some((value, close)) => {
                out.push_str(&value.to_string());
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_template() {
        for key in keys::ALL {
            assert!(template(key).is_some(), "missing template for {}", key);
        }
        assert_eq!(TEMPLATES.len(), keys::ALL.len());
    }

    #[test]
    fn test_templates_follow_key_order() {
        let template_keys: Vec<&str> = TEMPLATES.iter().map(|(k, _)| *k).collect();
        assert_eq!(template_keys, keys::ALL.to_vec());
    }

    #[test]
    fn test_render_modifiers() {
        let args = [
            MessageArg::from("com.acme.Foo"),
            MessageArg::from("public"),
            MessageArg::from(1u32),
            MessageArg::from("public final"),
            MessageArg::from(17u32),
        ];
        assert_eq!(
            render(keys::CLASS_MODIFIERS_MODIFIED, &args),
            "com.acme.Foo: modifiers changed from 'public' (1) to 'public final' (17)"
        );
    }

    #[test]
    fn test_render_null_argument() {
        let args = [
            MessageArg::from("LIMIT"),
            MessageArg::from(Some(10i64)),
            MessageArg::Null,
        ];
        assert_eq!(
            render(keys::FIELD_VALUE_MODIFIED, &args),
            "Field LIMIT: constant value changed from 10 to null"
        );
    }

    #[test]
    fn test_missing_argument_keeps_placeholder() {
        let args = [MessageArg::from("com.acme.Foo")];
        assert_eq!(
            render(keys::CLASS_FIELD_ADDED, &args),
            "com.acme.Foo: field {1} added"
        );
    }

    #[test]
    fn test_unknown_key_with_no_args() {
        assert_eq!(render("custom.check", &[]), "custom.check []");
    }

    #[test]
    fn test_literal_braces_pass_through() {
        assert_eq!(
            fill("{x} and {0}", &[MessageArg::from("a")]),
            "{x} and a"
        );
    }
}
