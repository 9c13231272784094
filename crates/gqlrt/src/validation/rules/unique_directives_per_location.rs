use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

struct UniqueDirectivesPerLocation;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueDirectivesPerLocation)
}

impl<'a> ValidationRule<'a> for UniqueDirectivesPerLocation {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let directives: &[ast::Directive] = match node {
            Node::OperationDefinition(operation) => &operation.directives,
            Node::Field(field) => &field.directives,
            Node::FragmentSpread(spread) => &spread.directives,
            Node::InlineFragment(inline) => &inline.directives,
            Node::FragmentDefinition(fragment) => &fragment.directives,
            _ => return VisitorAction::Continue,
        };

        let mut known: HashMap<&str, &ast::Directive> = HashMap::new();
        for directive in directives {
            let name = directive.name.as_str();
            match known.get(name) {
                Some(first) => ctx.report_error(
                    GraphQLError::new(format!("The directive '{name}' can only be used once at this location."))
                        .at_all([first.loc.as_ref(), directive.loc.as_ref()]),
                ),
                None => {
                    known.insert(name, directive);
                },
            }
        }
        VisitorAction::Continue
    }
}
