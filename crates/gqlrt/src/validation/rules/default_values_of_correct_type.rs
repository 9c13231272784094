use crate::GraphQLError;
use crate::types::TypeRef;
use crate::utilities::is_valid_literal_value;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::print_value;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// Variable default values must be valid for the variable's type, and a
/// non-null variable cannot have one.
struct DefaultValuesOfCorrectType;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(DefaultValuesOfCorrectType)
}

impl<'a> ValidationRule<'a> for DefaultValuesOfCorrectType {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::VariableDefinition(definition) => {
                let Some(default_value) = &definition.default_value else {
                    return VisitorAction::Skip;
                };
                let Some(ty) = ctx.type_info().input_type().cloned() else {
                    return VisitorAction::Skip;
                };
                let name = definition.variable.name.as_str();

                if let TypeRef::NonNull(inner) = &ty {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Variable '${name}' of type '{ty}' is required and will not use the default value. Perhaps you meant to use type '{inner}'.",
                        ))
                        .at(default_value.loc()),
                    );
                }

                let errors = is_valid_literal_value(ctx.schema(), &ty, default_value);
                if !errors.is_empty() {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Variable '${name}' of type '{ty}' has invalid default value: {}.\n{}",
                            print_value(default_value),
                            errors.join("\n"),
                        ))
                        .at(default_value.loc()),
                    );
                }
                VisitorAction::Skip
            },
            Node::SelectionSet(_) | Node::FragmentDefinition(_) => VisitorAction::Skip,
            _ => VisitorAction::Continue,
        }
    }
}
