//! Name checks for JSX nodes

use oxc_ast::ast::{JSXElement, JSXElementName, JSXMemberExpression, JSXMemberExpressionObject};
use oxc_syntax::identifier::is_identifier_name;

use crate::constants::{HTML_TAGS, RESERVED_WORDS};

/// Check if a name can be written as a bare identifier (binding reference or
/// object key) without quoting.
pub fn is_valid_identifier(name: &str) -> bool {
    is_identifier_name(name) && !RESERVED_WORDS.contains(name)
}

/// Check if this is a standard HTML element name, ignoring case
pub fn is_html_tag(tag: &str) -> bool {
    HTML_TAGS.contains(tag.to_ascii_lowercase().as_str())
}

/// Get the tag name from a JSX element as written in source
pub fn get_tag_name(element: &JSXElement) -> String {
    get_jsx_element_name(&element.opening_element.name)
}

fn get_jsx_element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Identifier(id) => id.name.to_string(),
        JSXElementName::IdentifierReference(id) => id.name.to_string(),
        JSXElementName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
        JSXElementName::MemberExpression(member) => get_member_expression_name(member),
        JSXElementName::ThisExpression(_) => "this".to_string(),
    }
}

/// Get the dotted name of a JSX member expression (e.g., Foo.Bar.Baz)
pub fn get_member_expression_name(member: &JSXMemberExpression) -> String {
    let object = match &member.object {
        JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
        JSXMemberExpressionObject::MemberExpression(m) => get_member_expression_name(m),
        JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
    };
    format!("{}.{}", object, member.property.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("id"));
        assert!(is_valid_identifier("onClick"));
        assert!(is_valid_identifier("$store"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("Foo"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier("data-id"));
        assert!(!is_valid_identifier("aria-label"));
        assert!(!is_valid_identifier("xlink:href"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("class"));
        assert!(!is_valid_identifier("this"));
    }

    #[test]
    fn test_html_tags_ignore_case() {
        assert!(is_html_tag("div"));
        assert!(is_html_tag("DIV"));
        assert!(is_html_tag("Div"));
        assert!(is_html_tag("h1"));
        assert!(!is_html_tag("Foo"));
        assert!(!is_html_tag("my-element"));
    }
}
