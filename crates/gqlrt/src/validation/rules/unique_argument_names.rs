use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

#[derive(Default)]
struct UniqueArgumentNames<'a> {
    known_args: HashMap<&'a str, &'a ast::Name>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueArgumentNames::default())
}

impl<'a> ValidationRule<'a> for UniqueArgumentNames<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::Field(_) | Node::Directive(_) => {
                self.known_args.clear();
                VisitorAction::Continue
            },
            Node::Argument(argument) => {
                let name = &argument.name;
                match self.known_args.get(name.as_str()) {
                    Some(known) => ctx.report_error(
                        GraphQLError::new(format!("There can be only one argument named '{}'.", name.as_str()))
                            .at_all([known.loc.as_ref(), name.loc.as_ref()]),
                    ),
                    None => {
                        self.known_args.insert(name.as_str(), name);
                    },
                }
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}
