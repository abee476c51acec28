//! Main JSX transform logic
//! This implements the Traverse trait to walk the AST and rewrite JSX on exit

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, Program};
use oxc_semantic::SemanticBuilder;
use oxc_span::{SourceType, Span};
use oxc_traverse::{traverse_mut, Traverse, TraverseCtx};

use common::{expr_to_string, get_tag_name, TransformOptions};

use crate::element::{rewrite_element, rewrite_fragment};
use crate::ir::{RewriteContext, RewriteInfo};
use crate::scope::{has_this_binding, in_class_field_value};

/// The Plasmatic JSX transformer
pub struct PlasmaticTransform<'a> {
    allocator: &'a Allocator,
    source_type: SourceType,
    context: RewriteContext<'a>,
}

impl<'a> PlasmaticTransform<'a> {
    pub fn new(allocator: &'a Allocator, options: &TransformOptions<'_>) -> Self {
        Self {
            allocator,
            source_type: options.source_type,
            context: RewriteContext::new(allocator, options),
        }
    }

    /// Run the transform on a program.
    ///
    /// Returns the spans of the component calls that carry the `pretty`
    /// formatting hint.
    pub fn transform(mut self, program: &mut Program<'a>) -> Vec<Span> {
        let allocator = self.allocator;
        let scoping = SemanticBuilder::new()
            .build(program)
            .semantic
            .into_scoping();
        traverse_mut(&mut self, allocator, program, scoping, ());
        self.context.pretty_calls.into_inner()
    }

    fn rewrite_info(&self, ctx: &TraverseCtx<'a, ()>) -> RewriteInfo {
        let this_bound = in_class_field_value(ctx)
            || has_this_binding(ctx.scoping(), ctx.current_scope_id(), self.source_type);
        RewriteInfo { this_bound }
    }
}

impl<'a> Traverse<'a, ()> for PlasmaticTransform<'a> {
    // Rewriting on exit means every `{...}` container below has already been
    // rewritten, and traversal never walks into the generated calls
    fn exit_expression(&mut self, node: &mut Expression<'a>, ctx: &mut TraverseCtx<'a, ()>) {
        let new_expr = match node {
            Expression::JSXElement(element) => {
                let info = self.rewrite_info(ctx);
                log::debug!(
                    "rewriting <{}> at {:?} (this_bound={})",
                    get_tag_name(element),
                    element.span,
                    info.this_bound
                );
                Some(rewrite_element(element, &self.context, info))
            }
            Expression::JSXFragment(fragment) => {
                let info = self.rewrite_info(ctx);
                log::debug!("rewriting fragment at {:?}", fragment.span);
                Some(rewrite_fragment(fragment, &self.context, info))
            }
            _ => None,
        };

        if let Some(expr) = new_expr {
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("rewrote into {}", expr_to_string(&expr));
            }
            *node = expr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_codegen::Codegen;
    use oxc_parser::Parser;

    fn run(source: &str, source_type: SourceType) -> (String, Vec<Span>) {
        let allocator = Allocator::default();
        let mut program = Parser::new(&allocator, source, source_type).parse().program;
        let options = TransformOptions {
            source_type,
            ..TransformOptions::plasmatic_defaults()
        };
        let pretty_calls = PlasmaticTransform::new(&allocator, &options).transform(&mut program);
        (Codegen::new().build(&program).code, pretty_calls)
    }

    fn run_jsx(source: &str) -> String {
        run(source, SourceType::jsx()).0
    }

    #[test]
    fn test_this_in_function_is_receiver() {
        let code = run_jsx("function render() { return <this/>; }");
        assert!(code.contains("Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_this_in_method_through_arrow() {
        let code = run_jsx("class A { render() { return () => <this/>; } }");
        assert!(code.contains("Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_this_in_class_field_is_receiver() {
        let code = run_jsx("class A { el = <this/>; }");
        assert!(code.contains("el = Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_this_in_static_field_arrow_is_receiver() {
        let code = run_jsx("class A { static render = () => <this/>; }");
        assert!(code.contains("Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_this_in_accessor_field_is_receiver() {
        let code = run_jsx("class A { accessor el = <this/>; }");
        assert!(code.contains("Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_this_in_static_block_is_receiver() {
        let code = run_jsx("class A { static { A.el = <this/>; } }");
        assert!(code.contains("Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_this_at_module_top_level_is_string() {
        let code = run_jsx("const el = <this/>;");
        assert!(code.contains("Plasmatic.createComponent(\"this\", null)"), "{code}");
    }

    #[test]
    fn test_this_at_script_top_level_is_receiver() {
        let source_type = SourceType::jsx().with_script(true);
        let (code, _) = run("var el = <this/>;", source_type);
        assert!(code.contains("Plasmatic.createComponent(this, null)"), "{code}");
    }

    #[test]
    fn test_nested_elements_in_containers() {
        let code = run_jsx("<ul>{items.map(item => <li>{item}</li>)}</ul>");
        assert!(
            code.contains("Plasmatic.createComponent(\"li\", null, item)"),
            "{code}"
        );
        assert!(!code.contains("<li>"), "{code}");
    }

    #[test]
    fn test_pretty_hints_follow_children() {
        let source = "<a><b/></a>";
        let (_, pretty_calls) = run(source, SourceType::jsx());
        // Only the outer call has children
        assert_eq!(pretty_calls, vec![Span::new(0, 11)]);
    }

    #[test]
    fn test_pretty_hints_post_order() {
        let source = "<a><b>x</b></a>";
        let (_, pretty_calls) = run(source, SourceType::jsx());
        assert_eq!(pretty_calls, vec![Span::new(3, 11), Span::new(0, 15)]);
    }
}
