use crate::GraphQLError;
use crate::types::TypeRef;
use crate::utilities::is_type_sub_type_of;
use crate::utilities::type_from_ast;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

/// A variable's type must be usable wherever the variable appears.
///
/// A nullable variable with a default value counts as non-null.
#[derive(Default)]
struct VariablesInAllowedPosition<'a> {
    definitions: HashMap<&'a str, &'a ast::VariableDefinition>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(VariablesInAllowedPosition::default())
}

impl<'a> ValidationRule<'a> for VariablesInAllowedPosition<'a> {
    fn enter(&mut self, _ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(_) => self.definitions.clear(),
            Node::VariableDefinition(definition) => {
                self.definitions.insert(definition.variable.name.as_str(), definition);
            },
            _ => {},
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        let schema = ctx.schema();
        for usage in ctx.recursive_variable_usages(operation) {
            let name = usage.variable.name.as_str();
            let (Some(definition), Some(expected)) = (self.definitions.get(name), &usage.input_type) else {
                continue;
            };
            let Some(var_type) = type_from_ast(schema, &definition.ty) else {
                continue;
            };
            let effective = match (&definition.default_value, &var_type) {
                (Some(_), TypeRef::NonNull(_)) | (None, _) => var_type.clone(),
                (Some(_), _) => var_type.clone().non_null(),
            };
            if !is_type_sub_type_of(schema, &effective, expected) {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Variable '${name}' of type '{var_type}' used in position expecting type '{expected}'.",
                    ))
                    .at_all([definition.loc.as_ref(), usage.variable.loc.as_ref()]),
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
    fn variables_in_compatible_positions() {
        expect_passes_rule(
            factory,
            r"
      query Query($booleanArg: Boolean, $nonNullBooleanArg: Boolean!) {
        complicatedArgs {
          a: booleanArgField(booleanArg: $booleanArg)
          b: booleanArgField(booleanArg: $nonNullBooleanArg)
        }
      }
    ",
        );
    }

    #[test]
    fn nullable_variable_with_default_into_non_null_position() {
        expect_passes_rule(
            factory,
            r"
      query Query($intArg: Int = 1) {
        complicatedArgs {
          nonNullIntArgField(nonNullIntArg: $intArg)
        }
      }
    ",
        );
    }

    #[test]
    fn variables_in_lists_objects_and_directives() {
        expect_passes_rule(
            factory,
            r"
      query Query($stringVar: String, $boolVar: Boolean!, $stringList: [String]) {
        complicatedArgs {
          a: stringListArgField(stringListArg: [$stringVar])
          b: stringListArgField(stringListArg: $stringList)
          complexArgField(complexArg: { requiredField: $boolVar, stringField: $stringVar })
        }
        dog @include(if: $boolVar) { name }
      }
    ",
        );
    }

    #[test]
    fn variables_used_through_fragments() {
        expect_passes_rule(
            factory,
            r"
      query Query($booleanArg: Boolean) {
        complicatedArgs { ...booleanArgFrag }
      }
      fragment booleanArgFrag on ComplicatedArgs {
        booleanArgField(booleanArg: $booleanArg)
      }
    ",
        );
    }

    #[test]
    fn nullable_variable_into_non_null_argument() {
        expect_fails_rule(
            factory,
            r"
      query Query($intArg: Int) {
        complicatedArgs {
          nonNullIntArgField(nonNullIntArg: $intArg)
        }
      }
    ",
            &[("Variable '$intArg' of type 'Int' used in position expecting type 'Int!'.", &[(2, 19), (4, 45)])],
        );
    }

    #[test]
    fn scalar_variable_into_list_position() {
        expect_fails_rule(
            factory,
            r"
      query Query($stringVar: String) {
        complicatedArgs {
          stringListArgField(stringListArg: $stringVar)
        }
      }
    ",
            &[(
                "Variable '$stringVar' of type 'String' used in position expecting type '[String]'.",
                &[(2, 19), (4, 45)],
            )],
        );
    }

    #[test]
    fn nullable_boolean_into_directive() {
        expect_fails_rule(
            factory,
            r"
      query Query($boolVar: Boolean) {
        dog @include(if: $boolVar) { name }
      }
    ",
            &[(
                "Variable '$boolVar' of type 'Boolean' used in position expecting type 'Boolean!'.",
                &[(2, 19), (3, 26)],
            )],
        );
    }
}
