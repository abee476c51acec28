//! Children collection
//! Lowers the child list of an element or fragment, in source order

use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::JSXChild;

use common::{decode_entities, normalize_text};

use crate::element::{rewrite_element, rewrite_fragment};
use crate::ir::{Child, RewriteContext, RewriteInfo};

/// Collect the children of an element.
///
/// Text has its character references decoded and becomes a literal call or
/// disappears when blank. Expression containers are unwrapped and empty ones
/// (`{}`, `{/* note */}`) dropped. Nested JSX is rewritten before it is
/// collected.
pub fn collect_children<'a>(
    children: &ArenaVec<'a, JSXChild<'a>>,
    context: &RewriteContext<'a>,
    info: RewriteInfo,
) -> Vec<Child<'a>> {
    let mut collected = Vec::with_capacity(children.len());

    for child in children {
        match child {
            JSXChild::Text(text) => {
                let content = normalize_text(&decode_entities(&text.value));
                if content.is_empty() {
                    log::trace!("dropping blank text at {:?}", text.span);
                    continue;
                }
                collected.push(Child::Expression(context.literal_call(text.span, &content)));
            }
            JSXChild::ExpressionContainer(container) => {
                if let Some(expr) = container.expression.as_expression() {
                    collected.push(Child::Expression(context.clone_expr(expr)));
                }
            }
            JSXChild::Element(element) => {
                collected.push(Child::Expression(rewrite_element(element, context, info)));
            }
            JSXChild::Fragment(fragment) => {
                collected.push(Child::Expression(rewrite_fragment(fragment, context, info)));
            }
            JSXChild::Spread(spread) => {
                collected.push(Child::Spread(spread.span, context.clone_expr(&spread.expression)));
            }
        }
    }

    collected
}
