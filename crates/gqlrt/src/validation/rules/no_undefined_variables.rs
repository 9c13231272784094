use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashSet;

/// Every variable used by an operation, directly or through the fragments
/// it spreads, must be defined by that operation.
#[derive(Default)]
struct NoUndefinedVariables<'a> {
    defined: HashSet<&'a str>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoUndefinedVariables::default())
}

impl<'a> ValidationRule<'a> for NoUndefinedVariables<'a> {
    fn enter(&mut self, _ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(_) => self.defined.clear(),
            Node::VariableDefinition(definition) => {
                self.defined.insert(definition.variable.name.as_str());
            },
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        for usage in ctx.recursive_variable_usages(operation) {
            let name = usage.variable.name.as_str();
            if self.defined.contains(name) {
                continue;
            }
            let message = match operation.name_str() {
                Some(operation_name) => {
                    format!("Variable '${name}' is not defined by operation '{operation_name}'.")
                },
                None => format!("Variable '${name}' is not defined."),
            };
            ctx.report_error(
                GraphQLError::new(message).at_all([usage.variable.loc.as_ref(), operation.loc.as_ref()]),
            );
        }
        VisitorAction::Continue
    }
}
