use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragment spreads must not form cycles.
///
/// Each fragment is explored depth first at most once; a spread of a
/// fragment that is already on the current spread path closes a cycle,
/// which is reported at every spread along it.
#[derive(Default)]
struct NoFragmentCycles<'a> {
    visited: HashSet<&'a str>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    spread_path_index: HashMap<&'a str, usize>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoFragmentCycles::default())
}

impl<'a> NoFragmentCycles<'a> {
    fn detect_cycles(
        &mut self,
        ctx: &ValidationContext<'a>,
        fragment: &'a ast::FragmentDefinition,
        errors: &mut Vec<GraphQLError>,
    ) {
        let fragment_name = fragment.name.as_str();
        self.visited.insert(fragment_name);

        let spreads = ctx.fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index.insert(fragment_name, self.spread_path.len());
        for spread in spreads {
            let spread_name = spread.name.as_str();
            let cycle_index = self.spread_path_index.get(spread_name).copied();
            self.spread_path.push(spread);

            match cycle_index {
                None => {
                    if !self.visited.contains(spread_name)
                        && let Some(spread_fragment) = ctx.fragment(spread_name)
                    {
                        self.detect_cycles(ctx, spread_fragment, errors);
                    }
                },
                Some(index) => {
                    let cycle_path = &self.spread_path[index..];
                    let via: Vec<String> = cycle_path[..cycle_path.len() - 1]
                        .iter()
                        .map(|spread| format!("'{}'", spread.name.as_str()))
                        .collect();
                    let message = if via.is_empty() {
                        format!("Cannot spread fragment '{spread_name}' within itself.")
                    } else {
                        format!(
                            "Cannot spread fragment '{spread_name}' within itself via {}.",
                            via.join(", "),
                        )
                    };
                    errors.push(
                        GraphQLError::new(message)
                            .at_all(cycle_path.iter().map(|spread| spread.loc.as_ref())),
                    );
                },
            }
            self.spread_path.pop();
        }
        self.spread_path_index.remove(fragment_name);
    }
}

impl<'a> ValidationRule<'a> for NoFragmentCycles<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match node {
            Node::OperationDefinition(_) => VisitorAction::Skip,
            Node::FragmentDefinition(fragment) => {
                if !self.visited.contains(fragment.name.as_str()) {
                    let mut errors = vec![];
                    self.detect_cycles(ctx, fragment, &mut errors);
                    for error in errors {
                        ctx.report_error(error);
                    }
                }
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}
