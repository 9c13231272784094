use crate::GraphQLError;
use crate::Schema;
use crate::types::GraphQLType;
use crate::utilities::quoted_or_list;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use indexmap::IndexMap;

struct FieldsOnCorrectType;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(FieldsOnCorrectType)
}

impl<'a> ValidationRule<'a> for FieldsOnCorrectType {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::Field(field) = node else {
            return VisitorAction::Continue;
        };
        let Some(parent_type) = ctx.type_info().parent_type() else {
            return VisitorAction::Continue;
        };
        if ctx.type_info().field_def().is_some() {
            return VisitorAction::Continue;
        }

        let field_name = field.name.as_str();
        let schema = ctx.schema();
        let suggested_types = suggested_type_names(schema, parent_type, field_name);
        let mut message = format!("Cannot query field '{field_name}' on type '{}'.", parent_type.name());
        if !suggested_types.is_empty() {
            message.push_str(&format!(
                " Did you mean to use an inline fragment on {}?",
                quoted_or_list(&suggested_types),
            ));
        } else {
            let suggested_fields = suggested_field_names(parent_type, field_name);
            if !suggested_fields.is_empty() {
                message.push_str(&format!(" Did you mean {}?", quoted_or_list(&suggested_fields)));
            }
        }
        ctx.report_error(GraphQLError::new(message).at(field.loc.as_ref()));
        VisitorAction::Continue
    }
}

/// For an abstract type: the interfaces (most widely implemented first) and
/// then the object types that do define `field_name`.
fn suggested_type_names<'s>(schema: &'s Schema, ty: &GraphQLType, field_name: &str) -> Vec<&'s str> {
    if !ty.is_abstract() {
        return vec![];
    }

    let mut object_types = vec![];
    let mut interface_usage: IndexMap<&'s str, usize> = IndexMap::new();
    for possible in schema.possible_types(ty.name()) {
        if possible.field(field_name).is_none() {
            continue;
        }
        object_types.push(possible.name());
        for interface_name in possible.interfaces() {
            let defines_field = schema
                .get_type(interface_name)
                .and_then(GraphQLType::fields)
                .is_some_and(|fields| fields.contains_key(field_name));
            if defines_field {
                *interface_usage.entry(interface_name.as_str()).or_default() += 1;
            }
        }
    }

    let mut interfaces: Vec<(&'s str, usize)> = interface_usage.into_iter().collect();
    interfaces.sort_by(|(_, a), (_, b)| b.cmp(a));
    interfaces
        .into_iter()
        .map(|(name, _)| name)
        .chain(object_types)
        .collect()
}

fn suggested_field_names<'t>(ty: &'t GraphQLType, field_name: &str) -> Vec<&'t str> {
    match ty.fields() {
        Some(fields) => suggestion_list(field_name, fields.keys().map(String::as_str)),
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::rules::test_harness::expect_fails_rule;
    use crate::validation::rules::test_harness::expect_passes_rule;

    #[test]
    fn defined_fields_are_valid() {
        expect_passes_rule(factory, "fragment objectFieldSelection on Dog { __typename name }");
        expect_passes_rule(factory, "fragment aliasedObjectFieldSelection on Dog { tn: __typename otherName: name }");
        expect_passes_rule(factory, "fragment interfaceFieldSelection on Pet { __typename name }");
        expect_passes_rule(factory, "fragment typeNameOnUnion on CatOrDog { __typename }");
        expect_passes_rule(factory, "{ __schema { queryType { name } } __type(name: \"Dog\") { name } }");
    }

    #[test]
    fn ignores_fields_on_unknown_type() {
        expect_passes_rule(factory, "fragment unknownSelection on UnknownType { unknownField }");
    }

    #[test]
    fn aliased_field_target_not_defined() {
        expect_fails_rule(
            factory,
            r"
      fragment aliasedLyingFieldTargetNotDefined on Dog {
        barkVolume: kawVolume
      }
    ",
            &[("Cannot query field 'kawVolume' on type 'Dog'. Did you mean 'barkVolume'?", &[(3, 9)])],
        );
    }

    #[test]
    fn misspelled_field_suggests_close_match() {
        expect_fails_rule(
            factory,
            r"
      { dog { meowVolume } }
    ",
            &[("Cannot query field 'meowVolume' on type 'Dog'. Did you mean 'barkVolume'?", &[(2, 15)])],
        );
    }

    #[test]
    fn field_defined_on_implementor_of_interface() {
        expect_fails_rule(
            factory,
            r"
      fragment notDefinedOnInterface on Pet {
        meowVolume
      }
    ",
            &[(
                "Cannot query field 'meowVolume' on type 'Pet'. Did you mean to use an inline fragment on 'Cat'?",
                &[(3, 9)],
            )],
        );
    }

    #[test]
    fn field_defined_on_implementors_queried_on_union() {
        expect_fails_rule(
            factory,
            r"
      fragment definedOnImplementorsQueriedOnUnion on CatOrDog {
        name
      }
    ",
            &[(
                "Cannot query field 'name' on type 'CatOrDog'. Did you mean to use an inline fragment on 'Being', 'Pet', 'Canine', 'Cat', or 'Dog'?",
                &[(3, 9)],
            )],
        );
    }

    #[test]
    fn undefined_field_without_suggestions() {
        expect_fails_rule(
            factory,
            r"
      fragment f on Pet { tailLength }
      fragment g on CatOrDog { directField }
    ",
            &[
                ("Cannot query field 'tailLength' on type 'Pet'.", &[(2, 27)]),
                ("Cannot query field 'directField' on type 'CatOrDog'.", &[(3, 32)]),
            ],
        );
    }

    #[test]
    fn nested_unknown_fields_are_reported_once_each() {
        expect_fails_rule(
            factory,
            r"
      fragment f on Dog {
        unknownField {
          deeperUnknownField
        }
      }
    ",
            &[("Cannot query field 'unknownField' on type 'Dog'.", &[(3, 9)])],
        );
    }
}
