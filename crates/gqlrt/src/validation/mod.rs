//! Static validation of an executable document against a [`Schema`].
//!
//! Every rule observes the same walk of the document. A rule that returns
//! [`VisitorAction::Skip`] stops seeing the skipped node's subtree (the
//! other rules still see it), and one that returns [`VisitorAction::Break`]
//! sees nothing further.

mod rules;
mod type_info;
mod validation_context;

pub use rules::RuleFactory;
pub use rules::ValidationRule;
pub use rules::specified_rules;
pub use type_info::TypeInfo;
pub use validation_context::ValidationContext;
pub use validation_context::VariableUsage;

use crate::GraphQLError;
use crate::Schema;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::Visitor;
use gqlrt_parser::visit::VisitorAction;
use gqlrt_parser::visit::visit;

/// Validates `document` with every [specified rule](specified_rules).
///
/// An empty result means the document may be executed.
pub fn validate(schema: &Schema, document: &ast::Document) -> Vec<GraphQLError> {
    validate_with_rules(schema, document, &specified_rules())
}

/// Validates `document` with `rules` only, in one walk of the document.
///
/// Errors are ordered by the point of the walk at which they were found,
/// then by rule order.
pub fn validate_with_rules(
    schema: &Schema,
    document: &ast::Document,
    rules: &[RuleFactory],
) -> Vec<GraphQLError> {
    let ctx = ValidationContext::new(schema, document);
    let rules = rules
        .iter()
        .map(|factory| (factory(&ctx), RuleState::Active))
        .collect();
    let mut walker = ParallelVisitor { ctx, rules };
    visit(Node::Document(document), &mut walker);

    let errors = walker.ctx.into_errors();
    if errors.is_empty() {
        tracing::trace!("document is valid");
    } else {
        tracing::debug!(error_count = errors.len(), "document failed validation");
    }
    errors
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RuleState {
    Active,
    /// Skipping the subtree of the node entered at this depth.
    SkippingUntil(usize),
    Done,
}

struct ParallelVisitor<'a> {
    ctx: ValidationContext<'a>,
    rules: Vec<(Box<dyn ValidationRule<'a> + 'a>, RuleState)>,
}

impl<'a> Visitor<'a> for ParallelVisitor<'a> {
    fn enter(&mut self, node: Node<'a>, ancestors: &[Node<'a>]) -> VisitorAction {
        self.ctx.type_info.enter(node);
        for (rule, state) in &mut self.rules {
            if *state != RuleState::Active {
                continue;
            }
            match rule.enter(&mut self.ctx, node, ancestors) {
                VisitorAction::Continue => {},
                VisitorAction::Skip => *state = RuleState::SkippingUntil(ancestors.len()),
                VisitorAction::Break => *state = RuleState::Done,
            }
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: Node<'a>, ancestors: &[Node<'a>]) -> VisitorAction {
        for (rule, state) in &mut self.rules {
            match *state {
                RuleState::Active => {
                    if rule.leave(&mut self.ctx, node, ancestors) == VisitorAction::Break {
                        *state = RuleState::Done;
                    }
                },
                RuleState::SkippingUntil(depth) if depth == ancestors.len() => {
                    *state = RuleState::Active;
                },
                RuleState::SkippingUntil(_) | RuleState::Done => {},
            }
        }
        self.ctx.type_info.leave(node);
        VisitorAction::Continue
    }
}

#[cfg(test)]
mod tests;
