use crate::GraphQLError;
use crate::utilities::quoted_or_list;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

struct KnownTypeNames;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownTypeNames)
}

impl<'a> ValidationRule<'a> for KnownTypeNames {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::NamedType(named) => {
                let type_name = named.name.as_str();
                let schema = ctx.schema();
                if schema.get_type(type_name).is_none() {
                    let suggestions = suggestion_list(type_name, schema.type_map().keys().map(String::as_str));
                    let mut message = format!("Unknown type '{type_name}'.");
                    if !suggestions.is_empty() {
                        message.push_str(&format!(" Did you mean {}?", quoted_or_list(&suggestions)));
                    }
                    ctx.report_error(GraphQLError::new(message).at(named.loc.as_ref()));
                }
                VisitorAction::Continue
            },
            Node::TypeSystemDefinition(_) => VisitorAction::Skip,
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
    fn known_type_names_are_valid() {
        expect_passes_rule(
            factory,
            r"
      query Foo($var: String, $required: [String!]!) {
        dog { name }
        pet { ... on Dog { name } ...PetFields }
      }
      fragment PetFields on Pet { name }
    ",
        );
    }

    #[test]
    fn unknown_type_names_are_invalid() {
        expect_fails_rule(
            factory,
            r"
      query Foo($var: Badger) {
        dog { name }
        pet { ...PetFields }
      }
      fragment PetFields on Peettt { name }
    ",
            &[
                ("Unknown type 'Badger'.", &[(2, 23)]),
                ("Unknown type 'Peettt'. Did you mean 'Pet'?", &[(6, 29)]),
            ],
        );
    }
}
