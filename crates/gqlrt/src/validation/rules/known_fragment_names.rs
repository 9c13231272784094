use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

struct KnownFragmentNames;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownFragmentNames)
}

impl<'a> ValidationRule<'a> for KnownFragmentNames {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        if let Node::FragmentSpread(spread) = node {
            let name = spread.name.as_str();
            if ctx.fragment(name).is_none() {
                ctx.report_error(
                    GraphQLError::new(format!("Unknown fragment '{name}'.")).at(spread.name.loc.as_ref()),
                );
            }
        }
        VisitorAction::Continue
    }
}
