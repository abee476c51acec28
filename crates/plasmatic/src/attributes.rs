//! Attribute normalization
//! Turns the attribute list of an opening element into an object expression

use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::{
    Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName, JSXAttributeValue,
    ObjectPropertyKind, PropertyKey, PropertyKind,
};
use oxc_ast::AstBuilder;
use oxc_span::{GetSpan, Span};

use common::{collapse_attribute_whitespace, decode_entities, is_valid_identifier};

use crate::element::{rewrite_element, rewrite_fragment};
use crate::ir::{RewriteContext, RewriteInfo};
use crate::output::string_literal;

/// Build `{ key: value, ... }` from the attributes, keeping source order.
///
/// Returns `None` when there are no attributes at all; the caller passes
/// `null` in that case. Duplicate keys are emitted as written.
pub fn normalize_attributes<'a>(
    attributes: &ArenaVec<'a, JSXAttributeItem<'a>>,
    context: &RewriteContext<'a>,
    info: RewriteInfo,
) -> Option<Expression<'a>> {
    if attributes.is_empty() {
        return None;
    }

    let ast = context.ast();
    let mut props = ast.vec_with_capacity(attributes.len());
    for item in attributes {
        let prop = match item {
            JSXAttributeItem::Attribute(attr) => {
                let value = attribute_value(attr, context, info);
                let key = property_key(ast, attr.name.span(), &attribute_name(&attr.name));
                ast.object_property_kind_object_property(
                    attr.span,
                    PropertyKind::Init,
                    key,
                    value,
                    false,
                    false,
                    false,
                )
            }
            JSXAttributeItem::SpreadAttribute(spread) => ObjectPropertyKind::SpreadProperty(
                ast.alloc_spread_element(spread.span, context.clone_expr(&spread.argument)),
            ),
        };
        props.push(prop);
    }

    Some(ast.expression_object(attributes_span(attributes), props))
}

/// Raw attribute name as written, `ns:name` for namespaced names
pub fn attribute_name(name: &JSXAttributeName<'_>) -> String {
    match name {
        JSXAttributeName::Identifier(id) => id.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
    }
}

/// Bare key for valid identifiers, string key for everything else
/// (`data-id`, `aria-label`, `xlink:href`, reserved words)
fn property_key<'a>(ast: AstBuilder<'a>, span: Span, raw_key: &str) -> PropertyKey<'a> {
    let key = ast.allocator.alloc_str(raw_key);
    if is_valid_identifier(raw_key) {
        PropertyKey::StaticIdentifier(ast.alloc_identifier_name(span, key))
    } else {
        PropertyKey::StringLiteral(ast.alloc_string_literal(span, key, None))
    }
}

fn attribute_value<'a>(
    attr: &JSXAttribute<'a>,
    context: &RewriteContext<'a>,
    info: RewriteInfo,
) -> Expression<'a> {
    let ast = context.ast();
    match &attr.value {
        // Only literal strings are collapsed; computed strings are left alone
        Some(JSXAttributeValue::StringLiteral(lit)) => {
            let value = collapse_attribute_whitespace(&decode_entities(&lit.value));
            string_literal(ast, lit.span, &value)
        }
        Some(JSXAttributeValue::ExpressionContainer(container)) => {
            match container.expression.as_expression() {
                Some(expr) => context.clone_expr(expr),
                None => ast.expression_boolean_literal(attr.span, true),
            }
        }
        Some(JSXAttributeValue::Element(element)) => rewrite_element(element, context, info),
        Some(JSXAttributeValue::Fragment(fragment)) => rewrite_fragment(fragment, context, info),
        None => ast.expression_boolean_literal(attr.span, true),
    }
}

fn attributes_span(attributes: &ArenaVec<'_, JSXAttributeItem<'_>>) -> Span {
    let start = attributes.first().map(|attr| attr.span().start).unwrap_or_default();
    let end = attributes.last().map(|attr| attr.span().end).unwrap_or_default();
    Span::new(start, end)
}
