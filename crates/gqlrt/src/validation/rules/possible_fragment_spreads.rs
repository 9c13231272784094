use crate::GraphQLError;
use crate::types::GraphQLType;
use crate::utilities::do_types_overlap;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// A fragment may only be spread where some object could satisfy both the
/// fragment's type condition and the enclosing type.
struct PossibleFragmentSpreads;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(PossibleFragmentSpreads)
}

impl<'a> ValidationRule<'a> for PossibleFragmentSpreads {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let schema = ctx.schema();
        let Some(parent_type) = ctx.type_info().parent_type() else {
            return VisitorAction::Continue;
        };
        let composite = |ty: Option<&'a GraphQLType>| ty.filter(|ty| ty.is_composite());

        match node {
            Node::InlineFragment(inline) => {
                let fragment_type = composite(ctx.type_info().type_ref().and_then(|ty| schema.named_type(ty)));
                if let Some(fragment_type) = fragment_type
                    && !do_types_overlap(schema, fragment_type, parent_type)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment cannot be spread here as objects of type '{}' can never be of type '{}'.",
                            parent_type.name(),
                            fragment_type.name(),
                        ))
                        .at(inline.loc.as_ref()),
                    );
                }
            },
            Node::FragmentSpread(spread) => {
                let name = spread.name.as_str();
                let fragment_type = composite(
                    ctx.fragment(name)
                        .and_then(|fragment| schema.get_type(fragment.type_condition.name.as_str())),
                );
                if let Some(fragment_type) = fragment_type
                    && !do_types_overlap(schema, fragment_type, parent_type)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment '{name}' cannot be spread here as objects of type '{}' can never be of type '{}'.",
                            parent_type.name(),
                            fragment_type.name(),
                        ))
                        .at(spread.loc.as_ref()),
                    );
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}
