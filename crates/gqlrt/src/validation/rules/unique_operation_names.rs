use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

#[derive(Default)]
struct UniqueOperationNames<'a> {
    known_names: HashMap<&'a str, &'a ast::Name>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueOperationNames::default())
}

impl<'a> ValidationRule<'a> for UniqueOperationNames<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(operation) => {
                if let Some(name) = &operation.name {
                    match self.known_names.get(name.as_str()) {
                        Some(known) => ctx.report_error(
                            GraphQLError::new(format!(
                                "There can only be one operation named '{}'.",
                                name.as_str(),
                            ))
                            .at_all([known.loc.as_ref(), name.loc.as_ref()]),
                        ),
                        None => {
                            self.known_names.insert(name.as_str(), name);
                        },
                    }
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

    #[test]
    fn no_operations() {
        expect_passes_rule(factory, "fragment fragA on Dog { name }");
    }

    #[test]
    fn one_anonymous_and_named_operations() {
        expect_passes_rule(factory, "{ dog { name } }");
        expect_passes_rule(factory, "query Foo { dog { name } }");
    }

    #[test]
    fn multiple_distinct_operations() {
        expect_passes_rule(
            factory,
            r"
      query Foo { dog { name } }
      query Bar { dog { name } }
      mutation Baz { renameDog { name } }
    ",
        );
    }

    #[test]
    fn fragment_and_operation_may_share_a_name() {
        expect_passes_rule(
            factory,
            r"
      query Foo { ...Foo }
      fragment Foo on QueryRoot { dog { name } }
    ",
        );
    }

    #[test]
    fn duplicate_operation_names() {
        expect_fails_rule(
            factory,
            r"
      query Foo { dog { name } }
      query Foo { cat { name } }
    ",
            &[("There can only be one operation named 'Foo'.", &[(2, 13), (3, 13)])],
        );
    }

    #[test]
    fn duplicate_names_across_operation_kinds() {
        expect_fails_rule(
            factory,
            r"
      query Foo { dog { name } }
      subscription Foo { catEvents { name } }
    ",
            &[("There can only be one operation named 'Foo'.", &[(2, 13), (3, 20)])],
        );
    }
}
