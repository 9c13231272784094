use crate::GraphQLError;
use crate::types::InputValue;
use crate::utilities::quoted_or_list;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use indexmap::IndexMap;

struct KnownArgumentNames;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownArgumentNames)
}

fn with_suggestions(mut message: String, arg_name: &str, args: &IndexMap<String, InputValue>) -> String {
    let suggestions = suggestion_list(arg_name, args.keys().map(String::as_str));
    if !suggestions.is_empty() {
        message.push_str(&format!(" Did you mean {}?", quoted_or_list(&suggestions)));
    }
    message
}

impl<'a> ValidationRule<'a> for KnownArgumentNames {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::Argument(argument) = node else {
            return VisitorAction::Continue;
        };
        if ctx.type_info().argument().is_some() {
            return VisitorAction::Continue;
        }
        let arg_name = argument.name.as_str();

        let message = match ancestors.last() {
            Some(Node::Field(_)) => {
                let (Some(field_def), Some(parent_type)) =
                    (ctx.type_info().field_def(), ctx.type_info().parent_type())
                else {
                    return VisitorAction::Continue;
                };
                with_suggestions(
                    format!(
                        "Unknown argument '{arg_name}' on field '{}' of type '{}'.",
                        field_def.name(),
                        parent_type.name(),
                    ),
                    arg_name,
                    field_def.args(),
                )
            },
            Some(Node::Directive(_)) => {
                let Some(directive) = ctx.type_info().directive() else {
                    return VisitorAction::Continue;
                };
                with_suggestions(
                    format!("Unknown argument '{arg_name}' on directive '@{}'.", directive.name()),
                    arg_name,
                    directive.args(),
                )
            },
            _ => return VisitorAction::Continue,
        };
        ctx.report_error(GraphQLError::new(message).at(argument.loc.as_ref()));
        VisitorAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::factory;
    use crate::validation::rules::test_harness::expect_fails_rule;
    use crate::validation::rules::test_harness::expect_passes_rule;

    #[test]
    fn known_arguments_are_valid() {
        expect_passes_rule(
            factory,
            r"
      fragment multipleArgs on ComplicatedArgs {
        multipleReqs(req1: 1, req2: 2)
        multipleOpts(opt2: 1, opt1: 2)
      }
      fragment onDog on Dog {
        doesKnowCommand(dogCommand: SIT)
        name @include(if: true)
      }
    ",
        );
    }

    #[test]
    fn arguments_of_unknown_fields_and_directives_are_ignored() {
        expect_passes_rule(factory, "fragment f on Dog { unknown(unknownArg: SIT) name @unknown(arg: 1) }");
    }

    #[test]
    fn unknown_directive_argument() {
        expect_fails_rule(
            factory,
            r"
      { dog @skip(unless: true) { name } }
    ",
            &[("Unknown argument 'unless' on directive '@skip'.", &[(2, 19)])],
        );
    }

    #[test]
    fn misspelled_field_argument_suggests_close_match() {
        expect_fails_rule(
            factory,
            r"
      fragment invalidArgName on Dog { doesKnowCommand(dogcommand: true) }
    ",
            &[(
                "Unknown argument 'dogcommand' on field 'doesKnowCommand' of type 'Dog'. Did you mean 'dogCommand'?",
                &[(2, 56)],
            )],
        );
    }

    #[test]
    fn unknown_field_argument() {
        expect_fails_rule(
            factory,
            r"
      { dog { isHousetrained(unknown: true) } }
    ",
            &[("Unknown argument 'unknown' on field 'isHousetrained' of type 'Dog'.", &[(2, 30)])],
        );
    }
}
