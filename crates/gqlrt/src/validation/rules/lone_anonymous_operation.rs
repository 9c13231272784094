use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// An anonymous operation must be the document's only operation.
#[derive(Default)]
struct LoneAnonymousOperation {
    operation_count: usize,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(LoneAnonymousOperation::default())
}

impl<'a> ValidationRule<'a> for LoneAnonymousOperation {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::Document(document) => {
                self.operation_count = document.operations().count();
                VisitorAction::Continue
            },
            Node::OperationDefinition(operation) => {
                if operation.name.is_none() && self.operation_count > 1 {
                    ctx.report_error(
                        GraphQLError::new("This anonymous operation must be the only defined operation.")
                            .at(operation.loc.as_ref()),
                    );
                }
                VisitorAction::Skip
            },
            Node::FragmentDefinition(_) => VisitorAction::Skip,
            _ => VisitorAction::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::rules::test_harness::expect_fails_rule;
    use crate::validation::rules::test_harness::expect_passes_rule;

    const MESSAGE: &str = "This anonymous operation must be the only defined operation.";

    #[test]
    fn one_anonymous_operation_with_fragments() {
        expect_passes_rule(
            factory,
            r"
      { ...Fields }
      fragment Fields on QueryRoot { dog { name } }
    ",
        );
    }

    #[test]
    fn multiple_named_operations() {
        expect_passes_rule(
            factory,
            r"
      query Foo { dog { name } }
      query Bar { cat { name } }
    ",
        );
    }

    #[test]
    fn multiple_anonymous_operations() {
        expect_fails_rule(
            factory,
            r"
      { dog { name } }
      { cat { name } }
    ",
            &[(MESSAGE, &[(2, 7)]), (MESSAGE, &[(3, 7)])],
        );
    }

    #[test]
    fn anonymous_operation_with_a_mutation() {
        expect_fails_rule(
            factory,
            r"
      { dog { name } }
      mutation Foo { renameDog { name } }
    ",
            &[(MESSAGE, &[(2, 7)])],
        );
    }
}
