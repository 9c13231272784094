use crate::GraphQLError;
use crate::types::DirectiveLocation;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// Directives must be defined by the schema and used where they are allowed.
struct KnownDirectives;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownDirectives)
}

/// Where a directive attached to `applied_to` is being used.
fn directive_location(applied_to: Option<&Node<'_>>) -> Option<DirectiveLocation> {
    match applied_to? {
        Node::OperationDefinition(operation) => Some(match operation.operation {
            ast::OperationType::Query => DirectiveLocation::Query,
            ast::OperationType::Mutation => DirectiveLocation::Mutation,
            ast::OperationType::Subscription => DirectiveLocation::Subscription,
        }),
        Node::Field(_) => Some(DirectiveLocation::Field),
        Node::FragmentSpread(_) => Some(DirectiveLocation::FragmentSpread),
        Node::InlineFragment(_) => Some(DirectiveLocation::InlineFragment),
        Node::FragmentDefinition(_) => Some(DirectiveLocation::FragmentDefinition),
        _ => None,
    }
}

impl<'a> ValidationRule<'a> for KnownDirectives {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::Directive(directive) = node else {
            return VisitorAction::Continue;
        };
        let name = directive.name.as_str();
        let Some(definition) = ctx.schema().get_directive(name) else {
            ctx.report_error(
                GraphQLError::new(format!("Unknown directive '{name}'.")).at(directive.loc.as_ref()),
            );
            return VisitorAction::Continue;
        };

        match directive_location(ancestors.last()) {
            Some(location) if definition.locations().contains(&location) => {},
            Some(location) => ctx.report_error(
                GraphQLError::new(format!(
                    "Directive '{name}' may not be used on {}.",
                    location.as_str(),
                ))
                .at(directive.loc.as_ref()),
            ),
            None => ctx.report_error(
                GraphQLError::new(format!("Directive '{name}' may not be used here."))
                    .at(directive.loc.as_ref()),
            ),
        }
        VisitorAction::Continue
    }
}
