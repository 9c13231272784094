use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashSet;

/// Every fragment must be reachable from some operation.
#[derive(Default)]
struct NoUnusedFragments<'a> {
    operations: Vec<&'a ast::OperationDefinition>,
    fragments: Vec<&'a ast::FragmentDefinition>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoUnusedFragments::default())
}

impl<'a> ValidationRule<'a> for NoUnusedFragments<'a> {
    fn enter(&mut self, _ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(operation) => {
                self.operations.push(operation);
                VisitorAction::Skip
            },
            Node::FragmentDefinition(fragment) => {
                self.fragments.push(fragment);
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }

    fn leave(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        if let Node::Document(_) = node {
            let used: HashSet<&str> = self
                .operations
                .iter()
                .flat_map(|&operation| ctx.recursively_referenced_fragments(operation))
                .map(|fragment| fragment.name.as_str())
                .collect();
            for fragment in &self.fragments {
                let name = fragment.name.as_str();
                if !used.contains(name) {
                    ctx.report_error(
                        GraphQLError::new(format!("Fragment '{name}' is never used.")).at(fragment.loc.as_ref()),
                    );
                }
            }
        }
        VisitorAction::Continue
    }
}
