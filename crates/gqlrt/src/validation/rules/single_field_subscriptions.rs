use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

struct SingleFieldSubscriptions;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(SingleFieldSubscriptions)
}

impl<'a> ValidationRule<'a> for SingleFieldSubscriptions {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(operation) => {
                let selections = &operation.selection_set.selections;
                if operation.operation == ast::OperationType::Subscription && selections.len() != 1 {
                    let message = match operation.name_str() {
                        Some(name) => format!("Subscription '{name}' must select only one top level field."),
                        None => "Anonymous Subscription must select only one top level field.".to_string(),
                    };
                    let locs = match selections.len() {
                        0 => vec![operation.loc.as_ref()],
                        _ => selections[1..].iter().map(ast::Selection::loc).collect(),
                    };
                    ctx.report_error(GraphQLError::new(message).at_all(locs));
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
    fn valid_subscription() {
        expect_passes_rule(factory, "subscription ImportantEmails { catEvents { name } }");
    }

    #[test]
    fn queries_may_select_many_fields() {
        expect_passes_rule(factory, "query Many { dog { name } cat { name } }");
    }

    #[test]
    fn fails_with_more_than_one_root_field() {
        expect_fails_rule(
            factory,
            r"
      subscription ImportantEmails {
        catEvents { name }
        dogEvents { name }
      }
    ",
            &[("Subscription 'ImportantEmails' must select only one top level field.", &[(4, 9)])],
        );
    }

    #[test]
    fn fails_with_many_root_fields_in_anonymous_subscription() {
        expect_fails_rule(
            factory,
            r"
      subscription {
        catEvents { name }
        dogEvents { name }
        __typename
      }
    ",
            &[("Anonymous Subscription must select only one top level field.", &[
                (4, 9),
                (5, 9),
            ])],
        );
    }
}
