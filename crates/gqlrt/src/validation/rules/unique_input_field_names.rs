use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

/// Object literals may not repeat a field name. Each nested object literal
/// has its own scope.
#[derive(Default)]
struct UniqueInputFieldNames<'a> {
    known_names: HashMap<&'a str, &'a ast::Name>,
    known_names_stack: Vec<HashMap<&'a str, &'a ast::Name>>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueInputFieldNames::default())
}

impl<'a> ValidationRule<'a> for UniqueInputFieldNames<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::Value(ast::Value::Object(_)) => {
                let outer = std::mem::take(&mut self.known_names);
                self.known_names_stack.push(outer);
            },
            Node::ObjectField(field) => {
                let name = &field.name;
                match self.known_names.get(name.as_str()) {
                    Some(known) => ctx.report_error(
                        GraphQLError::new(format!(
                            "There can be only one input field named '{}'.",
                            name.as_str(),
                        ))
                        .at_all([known.loc.as_ref(), name.loc.as_ref()]),
                    ),
                    None => {
                        self.known_names.insert(name.as_str(), name);
                    },
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, _ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        if let Node::Value(ast::Value::Object(_)) = node {
            self.known_names = self.known_names_stack.pop().unwrap_or_default();
        }
        VisitorAction::Continue
    }
}
