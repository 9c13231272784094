use crate::GraphQLError;
use crate::utilities::is_valid_literal_value;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::print_value;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// Literal argument values must be valid for the argument's type.
struct ArgumentsOfCorrectType;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ArgumentsOfCorrectType)
}

impl<'a> ValidationRule<'a> for ArgumentsOfCorrectType {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::Argument(argument) = node else {
            return VisitorAction::Continue;
        };
        if let Some(arg_def) = ctx.type_info().argument() {
            let errors = is_valid_literal_value(ctx.schema(), arg_def.ty(), &argument.value);
            if !errors.is_empty() {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Argument '{}' has invalid value {}.\n{}",
                        argument.name.as_str(),
                        print_value(&argument.value),
                        errors.join("\n"),
                    ))
                    .at(argument.value.loc()),
                );
            }
        }
        VisitorAction::Skip
    }
}
