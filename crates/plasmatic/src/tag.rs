//! Tag classification
//! Decides what expression stands for an element's tag name

use oxc_ast::ast::{Expression, JSXElementName, JSXMemberExpression, JSXMemberExpressionObject};
use oxc_ast::AstBuilder;
use oxc_span::Span;

use common::{is_html_tag, is_valid_identifier};

use crate::ir::{ClassifiedTag, RewriteInfo, TagExpression};
use crate::output::{ident_expr, string_literal};

/// Classify the name of an opening element
pub fn classify_tag<'a>(
    ast: AstBuilder<'a>,
    name: &JSXElementName<'a>,
    info: RewriteInfo,
) -> ClassifiedTag<'a> {
    match name {
        JSXElementName::ThisExpression(this) if info.this_bound => ClassifiedTag {
            expression: TagExpression::Expression(ast.expression_this(this.span)),
            tag_name: None,
        },
        JSXElementName::ThisExpression(this) => classify_identifier(ast, this.span, "this"),
        JSXElementName::Identifier(id) => classify_identifier(ast, id.span, &id.name),
        JSXElementName::IdentifierReference(id) => classify_identifier(ast, id.span, &id.name),
        JSXElementName::MemberExpression(member) => ClassifiedTag {
            expression: TagExpression::Expression(member_chain(ast, member)),
            tag_name: None,
        },
        JSXElementName::NamespacedName(ns) => ClassifiedTag {
            expression: TagExpression::Namespaced,
            tag_name: Some(format!("{}:{}", ns.namespace.name, ns.name.name)),
        },
    }
}

/// Known HTML tags are lowercased. Names that cannot be bare identifiers and
/// lowercase intrinsic names stay strings, everything else refers to a
/// binding in scope.
fn classify_identifier<'a>(ast: AstBuilder<'a>, span: Span, name: &str) -> ClassifiedTag<'a> {
    if is_html_tag(name) {
        let lower = name.to_ascii_lowercase();
        ClassifiedTag {
            expression: TagExpression::Expression(string_literal(ast, span, &lower)),
            tag_name: Some(lower),
        }
    } else if is_intrinsic_name(name) || !is_valid_identifier(name) {
        ClassifiedTag {
            expression: TagExpression::Expression(string_literal(ast, span, name)),
            tag_name: Some(name.to_string()),
        }
    } else {
        ClassifiedTag {
            expression: TagExpression::Expression(ident_expr(ast, span, name)),
            tag_name: Some(name.to_string()),
        }
    }
}

fn is_intrinsic_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
}

/// Left-associated member chain for `Foo.Bar.Baz`
fn member_chain<'a>(ast: AstBuilder<'a>, member: &JSXMemberExpression<'a>) -> Expression<'a> {
    let object = match &member.object {
        JSXMemberExpressionObject::IdentifierReference(id) => {
            ast.expression_identifier(id.span, id.name)
        }
        JSXMemberExpressionObject::MemberExpression(inner) => member_chain(ast, inner),
        JSXMemberExpressionObject::ThisExpression(expr) => ast.expression_this(expr.span),
    };

    let property = ast.identifier_name(member.property.span, member.property.name);
    Expression::StaticMemberExpression(ast.alloc_static_member_expression(
        member.span,
        object,
        property,
        false,
    ))
}
