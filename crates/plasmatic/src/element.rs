//! Call assembly
//! Handles <Tag attr={...}>children</Tag> -> Plasmatic.createComponent(Tag, {...}, ...children)

use oxc_ast::ast::{Expression, JSXElement, JSXFragment};

use crate::attributes::normalize_attributes;
use crate::children::collect_children;
use crate::ir::{Block, RewriteContext, RewriteInfo};
use crate::tag::classify_tag;

/// Rewrite one element, nested JSX first
pub fn rewrite_element<'a>(
    element: &JSXElement<'a>,
    context: &RewriteContext<'a>,
    info: RewriteInfo,
) -> Expression<'a> {
    let ast = context.ast();
    let opening = &element.opening_element;

    let tag = classify_tag(ast, &opening.name, info);
    let attributes = normalize_attributes(&opening.attributes, context, info);
    let children = collect_children(&element.children, context, info);

    let block = Block {
        span: element.span,
        tag: tag.expression,
        tag_name: tag.tag_name,
        attributes,
        children,
    };
    context.record(block.into_call(context))
}

/// Fragments have no runtime node of their own and become an array of their
/// collected children
pub fn rewrite_fragment<'a>(
    fragment: &JSXFragment<'a>,
    context: &RewriteContext<'a>,
    info: RewriteInfo,
) -> Expression<'a> {
    let ast = context.ast();
    let children = collect_children(&fragment.children, context, info);

    let mut elements = ast.vec_with_capacity(children.len());
    for child in children {
        elements.push(child.into_array_element(ast));
    }
    ast.expression_array(fragment.span, elements)
}
