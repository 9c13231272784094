mod arguments_of_correct_type;
mod default_values_of_correct_type;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_non_null_arguments;
mod scalar_leafs;
mod single_field_subscriptions;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_variable_names;
mod variables_are_input_types;
mod variables_in_allowed_position;

use crate::validation::ValidationContext;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

/// One validation rule.
///
/// Rules see every node of the document in walk order, after the
/// context's [`TypeInfo`](crate::validation::TypeInfo) has entered it and
/// before it has left it.
pub trait ValidationRule<'a> {
    fn enter(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _node: Node<'a>,
        _ancestors: &[Node<'a>],
    ) -> VisitorAction {
        VisitorAction::Continue
    }

    fn leave(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _node: Node<'a>,
        _ancestors: &[Node<'a>],
    ) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Builds a fresh instance of a rule for one validation pass.
pub type RuleFactory = for<'a> fn(&ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a>;

/// The rules a document must pass before it is executed, in the order
/// their errors are reported.
pub fn specified_rules() -> Vec<RuleFactory> {
    let rules: [RuleFactory; 26] = [
        unique_operation_names::factory,
        lone_anonymous_operation::factory,
        single_field_subscriptions::factory,
        known_type_names::factory,
        fragments_on_composite_types::factory,
        variables_are_input_types::factory,
        scalar_leafs::factory,
        fields_on_correct_type::factory,
        unique_fragment_names::factory,
        known_fragment_names::factory,
        no_unused_fragments::factory,
        possible_fragment_spreads::factory,
        no_fragment_cycles::factory,
        unique_variable_names::factory,
        no_undefined_variables::factory,
        no_unused_variables::factory,
        known_directives::factory,
        unique_directives_per_location::factory,
        known_argument_names::factory,
        unique_argument_names::factory,
        arguments_of_correct_type::factory,
        provided_non_null_arguments::factory,
        default_values_of_correct_type::factory,
        variables_in_allowed_position::factory,
        overlapping_fields_can_be_merged::factory,
        unique_input_field_names::factory,
    ];
    rules.to_vec()
}

#[cfg(test)]
pub(crate) mod test_harness;
