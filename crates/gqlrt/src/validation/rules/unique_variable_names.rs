use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

#[derive(Default)]
struct UniqueVariableNames<'a> {
    known_variables: HashMap<&'a str, &'a ast::Variable>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueVariableNames::default())
}

impl<'a> ValidationRule<'a> for UniqueVariableNames<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(_) => self.known_variables.clear(),
            Node::VariableDefinition(definition) => {
                let variable = &definition.variable;
                let name = variable.name.as_str();
                match self.known_variables.get(name) {
                    Some(known) => ctx.report_error(
                        GraphQLError::new(format!("There can be only one variable named '${name}'."))
                            .at_all([known.loc.as_ref(), variable.loc.as_ref()]),
                    ),
                    None => {
                        self.known_variables.insert(name, variable);
                    },
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}
