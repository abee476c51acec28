//! `this` binding lookup

use oxc_semantic::Scoping;
use oxc_syntax::scope::ScopeId;
use oxc_span::SourceType;
use oxc_traverse::{Ancestor, TraverseCtx};

/// Check whether `this` at `scope_id` refers to a real receiver.
///
/// Arrow functions are transparent. The first enclosing function or class
/// static block binds `this`; reaching the program scope binds it only in
/// scripts, since module top-level `this` is `undefined`.
pub fn has_this_binding(scoping: &Scoping, scope_id: ScopeId, source_type: SourceType) -> bool {
    for id in scoping.scope_ancestors(scope_id) {
        let flags = scoping.scope_flags(id);
        if flags.is_arrow() {
            continue;
        }
        if flags.is_function() || flags.is_class_static_block() {
            return true;
        }
        if flags.is_top() {
            return source_type.is_script();
        }
    }
    false
}

/// Check whether the current node sits in a class field initializer, where
/// `this` is the instance (or the class itself for static fields). Field
/// values get no scope of their own, so this looks at the AST ancestors.
pub fn in_class_field_value(ctx: &TraverseCtx<'_, ()>) -> bool {
    ctx.ancestors().any(|ancestor| {
        matches!(
            ancestor,
            Ancestor::PropertyDefinitionValue(_) | Ancestor::AccessorPropertyValue(_)
        )
    })
}
