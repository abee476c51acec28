//! Working records for a single element rewrite
//!
//! A `Block` is built from one JSX element, turned into a `ComponentCall`
//! and discarded. The `RewriteContext` lives for the whole program and only
//! collects formatting hints.

use oxc_allocator::{Allocator, CloneIn};
use oxc_ast::ast::{Argument, ArrayExpressionElement, Expression};
use oxc_ast::AstBuilder;
use oxc_span::Span;
use std::cell::RefCell;

use common::TransformOptions;

use crate::output::{call_expr, runtime_method, string_literal};

/// Per-root information shared by an element and its nested JSX
#[derive(Debug, Default, Clone, Copy)]
pub struct RewriteInfo {
    /// Whether `this` resolves to a real receiver where the element appears
    pub this_bound: bool,
}

/// What the tag name of an element lowers to
pub enum TagExpression<'a> {
    /// A host expression: string literal, identifier, member chain or `this`
    Expression(Expression<'a>),
    /// A namespaced name (`svg:rect`) with no expression form
    Namespaced,
}

/// Classified tag plus the name it was derived from
pub struct ClassifiedTag<'a> {
    pub expression: TagExpression<'a>,
    /// String literal value or identifier name, `None` for other shapes
    pub tag_name: Option<String>,
}

/// A collected child of an element or fragment
pub enum Child<'a> {
    Expression(Expression<'a>),
    /// `{...items}`
    Spread(Span, Expression<'a>),
}

impl<'a> Child<'a> {
    pub fn into_argument(self, ast: AstBuilder<'a>) -> Argument<'a> {
        match self {
            Child::Expression(expr) => Argument::from(expr),
            Child::Spread(span, expr) => Argument::SpreadElement(ast.alloc_spread_element(span, expr)),
        }
    }

    pub fn into_array_element(self, ast: AstBuilder<'a>) -> ArrayExpressionElement<'a> {
        match self {
            Child::Expression(expr) => ArrayExpressionElement::from(expr),
            Child::Spread(span, expr) => {
                ArrayExpressionElement::SpreadElement(ast.alloc_spread_element(span, expr))
            }
        }
    }
}

/// Everything gathered for one element before the call is assembled
pub struct Block<'a> {
    /// Span of the source element
    pub span: Span,
    pub tag: TagExpression<'a>,
    pub tag_name: Option<String>,
    /// Attributes object, `None` when the element has no attributes
    pub attributes: Option<Expression<'a>>,
    pub children: Vec<Child<'a>>,
}

/// An assembled `Namespace.createComponent(...)` call.
///
/// `pretty` is a formatting hint for downstream printers and never changes
/// what the call does.
pub struct ComponentCall<'a> {
    pub expression: Expression<'a>,
    pub span: Span,
    pub pretty: bool,
}

/// Runtime names and collected hints for one program
pub struct RewriteContext<'a> {
    pub namespace: &'a str,
    pub component_method: &'a str,
    pub literal_method: &'a str,

    /// Spans of calls carrying the `pretty` hint, in rewrite order
    pub pretty_calls: RefCell<Vec<Span>>,

    allocator: &'a Allocator,
}

impl<'a> RewriteContext<'a> {
    pub fn new(allocator: &'a Allocator, options: &TransformOptions<'_>) -> Self {
        Self {
            namespace: allocator.alloc_str(options.namespace),
            component_method: allocator.alloc_str(options.component_method),
            literal_method: allocator.alloc_str(options.literal_method),
            pretty_calls: RefCell::new(Vec::new()),
            allocator,
        }
    }

    pub fn ast(&self) -> AstBuilder<'a> {
        AstBuilder::new(self.allocator)
    }

    pub fn clone_expr(&self, expr: &Expression<'a>) -> Expression<'a> {
        expr.clone_in(self.allocator)
    }

    /// `Namespace.createLiteral("text")`
    pub fn literal_call(&self, span: Span, text: &str) -> Expression<'a> {
        let ast = self.ast();
        let callee = runtime_method(ast, span, self.namespace, self.literal_method);
        call_expr(ast, span, callee, [Argument::from(string_literal(ast, span, text))])
    }

    /// Keep the hint of an assembled call and hand back its expression
    pub fn record(&self, call: ComponentCall<'a>) -> Expression<'a> {
        if call.pretty {
            self.pretty_calls.borrow_mut().push(call.span);
        }
        call.expression
    }
}

impl<'a> Block<'a> {
    /// Assemble `Namespace.createComponent(tag, attributes | null, ...children)`
    pub fn into_call(self, context: &RewriteContext<'a>) -> ComponentCall<'a> {
        let ast = context.ast();
        let span = self.span;

        let first = match self.tag {
            TagExpression::Expression(expr) => expr,
            TagExpression::Namespaced => {
                string_literal(ast, span, self.tag_name.as_deref().unwrap_or_default())
            }
        };
        let attributes = self
            .attributes
            .unwrap_or_else(|| ast.expression_null_literal(span));

        let pretty = !self.children.is_empty();
        let mut args = Vec::with_capacity(2 + self.children.len());
        args.push(Argument::from(first));
        args.push(Argument::from(attributes));
        for child in self.children {
            args.push(child.into_argument(ast));
        }

        let callee = runtime_method(ast, span, context.namespace, context.component_method);
        ComponentCall {
            expression: call_expr(ast, span, callee, args),
            span,
            pretty,
        }
    }
}
