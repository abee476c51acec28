//! AST construction helpers for the runtime call surface

use oxc_ast::ast::{Argument, Expression};
use oxc_ast::AstBuilder;
use oxc_span::Span;

pub fn ident_expr<'a>(ast: AstBuilder<'a>, span: Span, name: &str) -> Expression<'a> {
    ast.expression_identifier(span, ast.allocator.alloc_str(name))
}

pub fn string_literal<'a>(ast: AstBuilder<'a>, span: Span, value: &str) -> Expression<'a> {
    ast.expression_string_literal(span, ast.allocator.alloc_str(value), None)
}

pub fn static_member<'a>(
    ast: AstBuilder<'a>,
    span: Span,
    object: Expression<'a>,
    property: &str,
) -> Expression<'a> {
    let prop = ast.identifier_name(span, ast.allocator.alloc_str(property));
    Expression::StaticMemberExpression(
        ast.alloc_static_member_expression(span, object, prop, false),
    )
}

/// `Namespace.method`
pub fn runtime_method<'a>(
    ast: AstBuilder<'a>,
    span: Span,
    namespace: &str,
    method: &str,
) -> Expression<'a> {
    static_member(ast, span, ident_expr(ast, span, namespace), method)
}

pub fn call_expr<'a>(
    ast: AstBuilder<'a>,
    span: Span,
    callee: Expression<'a>,
    args: impl IntoIterator<Item = Argument<'a>>,
) -> Expression<'a> {
    let mut arguments = ast.vec();
    for arg in args {
        arguments.push(arg);
    }
    ast.expression_call(
        span,
        callee,
        None::<oxc_ast::ast::TSTypeParameterInstantiation<'a>>,
        arguments,
        false,
    )
}
