use crate::GraphQLError;
use crate::types::InputValue;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use indexmap::IndexMap;

/// Non-null arguments without a default value must be supplied.
struct ProvidedNonNullArguments;

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ProvidedNonNullArguments)
}

fn missing_arguments<'d>(
    defs: &'d IndexMap<String, InputValue>,
    provided: &[ast::Argument],
) -> impl Iterator<Item = &'d InputValue> {
    let provided: Vec<&str> = provided.iter().map(|arg| arg.name.as_str()).collect();
    defs.values().filter(move |def| {
        def.ty().is_non_null() && def.get_default_value().is_none() && !provided.contains(&def.name())
    })
}

impl<'a> ValidationRule<'a> for ProvidedNonNullArguments {
    fn leave(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let errors: Vec<GraphQLError> = match node {
            Node::Field(field) => {
                let Some(field_def) = ctx.type_info().field_def() else {
                    return VisitorAction::Continue;
                };
                missing_arguments(field_def.args(), &field.arguments)
                    .map(|arg| {
                        GraphQLError::new(format!(
                            "Field '{}' argument '{}' of type '{}' is required but not provided.",
                            field.name.as_str(),
                            arg.name(),
                            arg.ty(),
                        ))
                        .at(field.loc.as_ref())
                    })
                    .collect()
            },
            Node::Directive(directive) => {
                let Some(directive_def) = ctx.type_info().directive() else {
                    return VisitorAction::Continue;
                };
                missing_arguments(directive_def.args(), &directive.arguments)
                    .map(|arg| {
                        GraphQLError::new(format!(
                            "Directive '@{}' argument '{}' of type '{}' is required but not provided.",
                            directive.name.as_str(),
                            arg.name(),
                            arg.ty(),
                        ))
                        .at(directive.loc.as_ref())
                    })
                    .collect()
            },
            _ => return VisitorAction::Continue,
        };
        for error in errors {
            ctx.report_error(error);
        }
        VisitorAction::Continue
    }
}
