use crate::GraphQLError;
use crate::Schema;
use crate::types::TypeRef;
use crate::validation::TypeInfo;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::Visitor;
use gqlrt_parser::visit::VisitorAction;
use gqlrt_parser::visit::visit;
use std::collections::HashMap;
use std::collections::HashSet;

/// A `$variable` in value position, with the input type expected there.
#[derive(Clone, Debug)]
pub struct VariableUsage<'a> {
    pub variable: &'a ast::Variable,
    pub input_type: Option<TypeRef>,
}

/// The state shared by every rule during one validation pass.
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    document: &'a ast::Document,
    pub(crate) type_info: TypeInfo<'a>,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    errors: Vec<GraphQLError>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let mut fragments = HashMap::new();
        for fragment in document.fragments() {
            fragments.entry(fragment.name.as_str()).or_insert(fragment);
        }
        Self {
            schema,
            document,
            type_info: TypeInfo::new(schema),
            fragments,
            errors: vec![],
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }

    pub fn report_error(&mut self, error: GraphQLError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[GraphQLError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// The fragment spreads directly inside `selection_set`, looking through
    /// fields and inline fragments but not into other fragments.
    pub fn fragment_spreads(&self, selection_set: &'a ast::SelectionSet) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                match selection {
                    ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                    ast::Selection::InlineFragment(inline) => sets_to_visit.push(&inline.selection_set),
                    ast::Selection::Field(field) => {
                        if let Some(sub) = &field.selection_set {
                            sets_to_visit.push(sub);
                        }
                    },
                }
            }
        }
        spreads
    }

    /// Every defined fragment reachable from `operation` through spreads,
    /// each listed once.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut fragments = vec![];
        let mut collected: HashSet<&'a str> = HashSet::new();
        let mut sets_to_visit = vec![&operation.selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for spread in self.fragment_spreads(set) {
                let name = spread.name.as_str();
                if !collected.insert(name) {
                    continue;
                }
                if let Some(fragment) = self.fragment(name) {
                    fragments.push(fragment);
                    sets_to_visit.push(&fragment.selection_set);
                }
            }
        }
        fragments
    }

    /// The variable usages written directly inside `node` (an operation or
    /// a fragment definition).
    pub fn variable_usages(&self, node: Node<'a>) -> Vec<VariableUsage<'a>> {
        let mut collector = UsageCollector {
            type_info: TypeInfo::new(self.schema),
            usages: vec![],
        };
        visit(node, &mut collector);
        collector.usages
    }

    /// The variable usages of `operation` and of every fragment it
    /// references, directly or not.
    pub fn recursive_variable_usages(&self, operation: &'a ast::OperationDefinition) -> Vec<VariableUsage<'a>> {
        let mut usages = self.variable_usages(Node::OperationDefinition(operation));
        for fragment in self.recursively_referenced_fragments(operation) {
            usages.extend(self.variable_usages(Node::FragmentDefinition(fragment)));
        }
        usages
    }
}

struct UsageCollector<'a> {
    type_info: TypeInfo<'a>,
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> Visitor<'a> for UsageCollector<'a> {
    fn enter(&mut self, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        self.type_info.enter(node);
        if let Node::Value(ast::Value::Variable(variable)) = node {
            self.usages.push(VariableUsage {
                variable,
                input_type: self.type_info.input_type().cloned(),
            });
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        self.type_info.leave(node);
        VisitorAction::Continue
    }
}
