use crate::Value;
use crate::execution::ExecutionContext;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::utilities::value_from_ast;
use gqlrt_parser::ast;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::collections::HashSet;

/// The field nodes merged under one response key.
pub(crate) type FieldAsts<'a> = SmallVec<[&'a ast::Field; 1]>;

/// Response keys in first-occurrence order.
pub(crate) type FieldsByKey<'a> = IndexMap<&'a str, FieldAsts<'a>>;

/// Collects the fields `selection_set` selects on `runtime_type` into
/// `fields`, expanding fragments whose type condition applies.
///
/// `visited` holds the fragment names already expanded by this collection,
/// so each named fragment is expanded at most once (and cyclic fragments
/// terminate).
pub(crate) fn collect_fields<'a>(
    ctx: &ExecutionContext<'a>,
    runtime_type: &ObjectType,
    selection_set: &'a ast::SelectionSet,
    fields: &mut FieldsByKey<'a>,
    visited: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        if !should_include(ctx, selection.directives()) {
            continue;
        }
        match selection {
            ast::Selection::Field(field) => {
                fields.entry(field.response_key()).or_default().push(field);
            },

            ast::Selection::InlineFragment(inline) => {
                let type_condition = inline.type_condition.as_ref().map(|ty| ty.name.as_str());
                if does_fragment_condition_match(ctx, type_condition, runtime_type) {
                    collect_fields(ctx, runtime_type, &inline.selection_set, fields, visited);
                }
            },

            ast::Selection::FragmentSpread(spread) => {
                let name = spread.name.as_str();
                if !visited.insert(name) {
                    continue;
                }
                let Some(fragment) = ctx.fragments.get(name).copied() else {
                    continue;
                };
                let type_condition = Some(fragment.type_condition.name.as_str());
                if does_fragment_condition_match(ctx, type_condition, runtime_type) {
                    collect_fields(ctx, runtime_type, &fragment.selection_set, fields, visited);
                }
            },
        }
    }
}

/// `@skip(if: true)` excludes a selection regardless of `@include`.
fn should_include(ctx: &ExecutionContext<'_>, directives: &[ast::Directive]) -> bool {
    let condition = |directive_name: &str| -> Option<bool> {
        let directive = directives.iter().find(|d| d.name.as_str() == directive_name)?;
        let arg = directive.arguments.iter().find(|arg| arg.name.as_str() == "if")?;
        let if_type = TypeRef::named("Boolean").non_null();
        match value_from_ast(ctx.schema, &arg.value, &if_type, Some(&*ctx.variables))? {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    };

    if condition("skip") == Some(true) {
        return false;
    }
    condition("include") != Some(false)
}

fn does_fragment_condition_match(
    ctx: &ExecutionContext<'_>,
    type_condition: Option<&str>,
    runtime_type: &ObjectType,
) -> bool {
    let Some(type_name) = type_condition else {
        return true;
    };
    if type_name == runtime_type.name() {
        return true;
    }
    match ctx.schema.get_type(type_name) {
        Some(ty @ (GraphQLType::Interface(_) | GraphQLType::Union(_))) => {
            ctx.schema.is_possible_type(ty.name(), runtime_type.name())
        },
        _ => false,
    }
}
