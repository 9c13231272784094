use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// Leaf-typed fields have no selection set; every other field has one.
struct ScalarLeafs;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ScalarLeafs)
}

impl<'a> ValidationRule<'a> for ScalarLeafs {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::Field(field) = node else {
            return VisitorAction::Continue;
        };
        let Some(ty) = ctx.type_info().type_ref() else {
            return VisitorAction::Continue;
        };
        let Some(named) = ctx.schema().named_type(ty) else {
            return VisitorAction::Continue;
        };

        let field_name = field.name.as_str();
        let error = match (&field.selection_set, named.is_leaf()) {
            (Some(selection_set), true) => Some(
                GraphQLError::new(format!(
                    "Field '{field_name}' of type '{ty}' must not have a sub selection.",
                ))
                .at(selection_set.loc.as_ref()),
            ),
            (None, false) => Some(
                GraphQLError::new(format!(
                    "Field '{field_name}' of type '{ty}' must have a sub selection.",
                ))
                .at(field.loc.as_ref()),
            ),
            _ => None,
        };
        if let Some(error) = error {
            ctx.report_error(error);
        }
        VisitorAction::Continue
    }
}
