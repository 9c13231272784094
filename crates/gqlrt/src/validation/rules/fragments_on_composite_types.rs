use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// Fragments may only condition on objects, interfaces, and unions.
struct FragmentsOnCompositeTypes;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(FragmentsOnCompositeTypes)
}

fn is_non_composite(ctx: &ValidationContext<'_>, condition: &ast::NamedType) -> bool {
    ctx.schema()
        .get_type(condition.name.as_str())
        .is_some_and(|ty| !ty.is_composite())
}

impl<'a> ValidationRule<'a> for FragmentsOnCompositeTypes {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::InlineFragment(inline) => {
                if let Some(condition) = &inline.type_condition
                    && is_non_composite(ctx, condition)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment cannot condition on non composite type '{}'.",
                            condition.name.as_str(),
                        ))
                        .at(condition.loc.as_ref()),
                    );
                }
            },
            Node::FragmentDefinition(fragment) => {
                let condition = &fragment.type_condition;
                if is_non_composite(ctx, condition) {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment '{}' cannot condition on non composite type '{}'.",
                            fragment.name.as_str(),
                            condition.name.as_str(),
                        ))
                        .at(condition.loc.as_ref()),
                    );
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}
