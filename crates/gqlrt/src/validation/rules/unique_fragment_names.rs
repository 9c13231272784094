use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;

#[derive(Default)]
struct UniqueFragmentNames<'a> {
    known_names: HashMap<&'a str, &'a ast::Name>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueFragmentNames::default())
}

impl<'a> ValidationRule<'a> for UniqueFragmentNames<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::FragmentDefinition(fragment) => {
                let name = &fragment.name;
                match self.known_names.get(name.as_str()) {
                    Some(known) => ctx.report_error(
                        GraphQLError::new(format!(
                            "There can only be one fragment named '{}'.",
                            name.as_str(),
                        ))
                        .at_all([known.loc.as_ref(), name.loc.as_ref()]),
                    ),
                    None => {
                        self.known_names.insert(name.as_str(), name);
                    },
                }
                VisitorAction::Skip
            },
            Node::OperationDefinition(_) => VisitorAction::Skip,
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
    fn many_distinct_fragments() {
        expect_passes_rule(
            factory,
            r"
      { dog { ...fragA ...fragB ...fragC } }
      fragment fragA on Dog { name }
      fragment fragB on Dog { nickname }
      fragment fragC on Dog { barkVolume }
    ",
        );
    }

    #[test]
    fn inline_fragments_are_always_unique() {
        expect_passes_rule(factory, "{ dog { ... on Dog { name } ... on Dog { name } } }");
    }

    #[test]
    fn fragments_named_the_same() {
        expect_fails_rule(
            factory,
            r"
      { dog { ...fragA } }
      fragment fragA on Dog { name }
      fragment fragA on Dog { barkVolume }
    ",
            &[("There can only be one fragment named 'fragA'.", &[(3, 16), (4, 16)])],
        );
    }
}
