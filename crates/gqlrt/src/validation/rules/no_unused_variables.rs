use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashSet;

#[derive(Default)]
struct NoUnusedVariables<'a> {
    definitions: Vec<&'a ast::VariableDefinition>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoUnusedVariables::default())
}

impl<'a> ValidationRule<'a> for NoUnusedVariables<'a> {
    fn enter(&mut self, _ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(_) => self.definitions.clear(),
            Node::VariableDefinition(definition) => self.definitions.push(definition),
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        let used: HashSet<&str> = ctx
            .recursive_variable_usages(operation)
            .into_iter()
            .map(|usage| usage.variable.name.as_str())
            .collect();

        for definition in &self.definitions {
            let name = definition.variable.name.as_str();
            if used.contains(name) {
                continue;
            }
            let message = match operation.name_str() {
                Some(operation_name) => format!("Variable '${name}' is never used in operation '{operation_name}'."),
                None => format!("Variable '${name}' is never used."),
            };
            ctx.report_error(GraphQLError::new(message).at(definition.loc.as_ref()));
        }
        VisitorAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::rules::test_harness::expect_fails_rule;
    use crate::validation::rules::test_harness::expect_passes_rule;

    #[test]
    fn uses_all_variables_including_through_fragments() {
        expect_passes_rule(
            factory,
            r"
      query Foo($a: String, $b: String, $c: String) {
        field(a: $a) { ...FragA }
      }
      fragment FragA on QueryRoot {
        field(b: $b) { ...FragB }
      }
      fragment FragB on QueryRoot {
        field(c: [$c])
      }
    ",
        );
    }

    #[test]
    fn variable_not_used() {
        expect_fails_rule(
            factory,
            r"
      query Foo($a: String, $b: String, $c: String) {
        field(a: $a, b: $b)
      }
    ",
            &[("Variable '$c' is never used in operation 'Foo'.", &[(2, 41)])],
        );
    }

    #[test]
    fn variable_not_used_by_anonymous_query() {
        expect_fails_rule(
            factory,
            r"
      query ($a: String) { dog { name } }
    ",
            &[("Variable '$a' is never used.", &[(2, 14)])],
        );
    }

    #[test]
    fn variable_used_only_by_a_fragment_the_operation_does_not_spread() {
        expect_fails_rule(
            factory,
            r"
      query Foo($b: String) { ...FragA }
      fragment FragA on QueryRoot { field(a: $a) }
      fragment FragB on QueryRoot { field(b: $b) }
    ",
            &[("Variable '$b' is never used in operation 'Foo'.", &[(2, 17)])],
        );
    }
}
