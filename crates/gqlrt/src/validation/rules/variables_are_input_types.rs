use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

struct VariablesAreInputTypes;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(VariablesAreInputTypes)
}

impl<'a> ValidationRule<'a> for VariablesAreInputTypes {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        if let Node::VariableDefinition(definition) = node {
            let named = definition.ty.named_type().name.as_str();
            let is_output_only = ctx
                .schema()
                .get_type(named)
                .is_some_and(|ty| !ty.is_input_type());
            if is_output_only {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Variable '${}' cannot be non-input type '{}'.",
                        definition.variable.name.as_str(),
                        definition.ty,
                    ))
                    .at(definition.ty.loc()),
                );
            }
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
    fn input_types_are_valid() {
        expect_passes_rule(
            factory,
            "query Foo($a: String, $b: [Boolean!]!, $c: ComplexInput, $d: FurColor) { dog { name } }",
        );
    }

    #[test]
    fn output_types_are_invalid() {
        expect_fails_rule(
            factory,
            r"
      query Foo($a: Dog, $b: [[CatOrDog!]]!, $c: Pet) {
        dog { name }
      }
    ",
            &[
                ("Variable '$a' cannot be non-input type 'Dog'.", &[(2, 21)]),
                ("Variable '$b' cannot be non-input type '[[CatOrDog!]]!'.", &[(2, 30)]),
                ("Variable '$c' cannot be non-input type 'Pet'.", &[(2, 50)]),
            ],
        );
    }
}
