//! Fields that share a response key must be mergeable into one result.
//!
//! Two fields with the same response key conflict when their parent types
//! could be the same object and they differ in field name or arguments, or
//! (regardless of parents) when their return types differ in shape: list
//! versus non-list, non-null versus nullable, or two different leaf types.
//! Sub-selections of same-keyed fields are compared recursively, looking
//! through fragment spreads.
//!
//! Every pair of fragments is compared at most once per exclusivity mode,
//! which keeps the comparison finite even for cyclic fragments.

use crate::GraphQLError;
use crate::Schema;
use crate::introspection::get_field_def;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlrt_parser::ast;
use gqlrt_parser::print_value;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

// =============================================================================
// Rule
// =============================================================================

#[derive(Default)]
struct OverlappingFieldsCanBeMerged<'a> {
    compared_fragment_pairs: PairSet<'a>,
}

pub(crate) fn factory<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(OverlappingFieldsCanBeMerged::default())
}

impl<'a> ValidationRule<'a> for OverlappingFieldsCanBeMerged<'a> {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        let Node::SelectionSet(selection_set) = node else {
            return VisitorAction::Continue;
        };
        let conflicts = {
            let mut finder = ConflictFinder {
                ctx: &*ctx,
                compared_fragment_pairs: &mut self.compared_fragment_pairs,
            };
            let parent_type = finder.ctx.type_info().parent_type();
            finder.find_conflicts_within_selection_set(parent_type, selection_set)
        };

        for conflict in conflicts {
            let message = format!(
                "Fields '{}' conflict because {}. Use different aliases on the fields to fetch both if this was intentional.",
                conflict.response_name,
                conflict.reason,
            );
            let locations = conflict
                .fields1
                .iter()
                .chain(&conflict.fields2)
                .map(|field| field.loc.as_ref());
            ctx.report_error(GraphQLError::new(message).at_all(locations));
        }
        VisitorAction::Continue
    }
}

// =============================================================================
// Conflicts
// =============================================================================

enum ConflictReason {
    Message(String),
    Subfields(Vec<(String, ConflictReason)>),
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictReason::Message(message) => f.write_str(message),
            ConflictReason::Subfields(subfields) => {
                for (i, (response_name, reason)) in subfields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "subfields '{response_name}' conflict because {reason}")?;
                }
                Ok(())
            },
        }
    }
}

struct Conflict<'a> {
    response_name: String,
    reason: ConflictReason,
    fields1: Vec<&'a ast::Field>,
    fields2: Vec<&'a ast::Field>,
}

impl<'a> Conflict<'a> {
    fn new(response_name: &str, reason: String, field1: &'a ast::Field, field2: &'a ast::Field) -> Self {
        Self {
            response_name: response_name.to_string(),
            reason: ConflictReason::Message(reason),
            fields1: vec![field1],
            fields2: vec![field2],
        }
    }
}

/// A field selection together with the type it was selected on and its
/// definition there, if any.
#[derive(Clone, Copy)]
struct FieldAndDef<'a> {
    parent_type: Option<&'a GraphQLType>,
    node: &'a ast::Field,
    def: Option<&'a Field>,
}

type FieldMap<'a> = IndexMap<&'a str, Vec<FieldAndDef<'a>>>;

struct FieldsAndFragments<'a> {
    selection_set: &'a ast::SelectionSet,
    fields: FieldMap<'a>,
    fragment_names: Vec<&'a str>,
}

// =============================================================================
// Fragment pair bookkeeping
// =============================================================================

/// Unordered pairs of fragment names, each remembered with whether it was
/// compared under mutually exclusive parents.
#[derive(Default)]
struct PairSet<'a> {
    data: HashMap<(&'a str, &'a str), bool>,
}

impl<'a> PairSet<'a> {
    fn key(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// A non-exclusive comparison covers the exclusive one, not the other
    /// way round.
    fn contains(&self, a: &'a str, b: &'a str, are_mutually_exclusive: bool) -> bool {
        match self.data.get(&Self::key(a, b)) {
            None => false,
            Some(&stored) => are_mutually_exclusive || !stored,
        }
    }

    fn insert(&mut self, a: &'a str, b: &'a str, are_mutually_exclusive: bool) {
        let entry = self.data.entry(Self::key(a, b)).or_insert(are_mutually_exclusive);
        *entry = *entry && are_mutually_exclusive;
    }
}

// =============================================================================
// Conflict search
// =============================================================================

struct ConflictFinder<'c, 'a> {
    ctx: &'c ValidationContext<'a>,
    compared_fragment_pairs: &'c mut PairSet<'a>,
}

impl<'a> ConflictFinder<'_, 'a> {
    fn schema(&self) -> &'a Schema {
        self.ctx.schema()
    }

    fn find_conflicts_within_selection_set(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let own = self.fields_and_fragment_names(parent_type, selection_set);

        self.collect_conflicts_within(&mut conflicts, &own.fields);

        let names = &own.fragment_names;
        for (i, &name) in names.iter().enumerate() {
            let mut compared = HashSet::new();
            self.collect_conflicts_between_fields_and_fragment(&mut conflicts, &mut compared, false, &own, name);
            for &other in &names[i + 1..] {
                self.collect_conflicts_between_fragments(&mut conflicts, false, name, other);
            }
        }
        conflicts
    }

    fn collect_conflicts_between_fields_and_fragment(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        compared: &mut HashSet<&'a str>,
        are_mutually_exclusive: bool,
        fields: &FieldsAndFragments<'a>,
        fragment_name: &'a str,
    ) {
        if !compared.insert(fragment_name) {
            return;
        }
        let Some(fragment) = self.ctx.fragment(fragment_name) else {
            return;
        };
        if std::ptr::eq(fields.selection_set, &fragment.selection_set) {
            return;
        }
        let referenced = self.referenced_fields_and_fragment_names(fragment);
        self.collect_conflicts_between(conflicts, are_mutually_exclusive, &fields.fields, &referenced.fields);
        for &name in &referenced.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                conflicts,
                compared,
                are_mutually_exclusive,
                fields,
                name,
            );
        }
    }

    fn collect_conflicts_between_fragments(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        are_mutually_exclusive: bool,
        name1: &'a str,
        name2: &'a str,
    ) {
        if name1 == name2 || self.compared_fragment_pairs.contains(name1, name2, are_mutually_exclusive) {
            return;
        }
        self.compared_fragment_pairs.insert(name1, name2, are_mutually_exclusive);

        let (Some(fragment1), Some(fragment2)) = (self.ctx.fragment(name1), self.ctx.fragment(name2)) else {
            return;
        };
        let referenced1 = self.referenced_fields_and_fragment_names(fragment1);
        let referenced2 = self.referenced_fields_and_fragment_names(fragment2);

        self.collect_conflicts_between(conflicts, are_mutually_exclusive, &referenced1.fields, &referenced2.fields);
        for &name in &referenced2.fragment_names {
            self.collect_conflicts_between_fragments(conflicts, are_mutually_exclusive, name1, name);
        }
        for &name in &referenced1.fragment_names {
            self.collect_conflicts_between_fragments(conflicts, are_mutually_exclusive, name, name2);
        }
    }

    fn find_conflicts_between_sub_selection_sets(
        &mut self,
        are_mutually_exclusive: bool,
        parent_type1: Option<&'a GraphQLType>,
        selection_set1: &'a ast::SelectionSet,
        parent_type2: Option<&'a GraphQLType>,
        selection_set2: &'a ast::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let first = self.fields_and_fragment_names(parent_type1, selection_set1);
        let second = self.fields_and_fragment_names(parent_type2, selection_set2);

        self.collect_conflicts_between(&mut conflicts, are_mutually_exclusive, &first.fields, &second.fields);

        let mut compared = HashSet::new();
        for &name in &second.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                &mut compared,
                are_mutually_exclusive,
                &first,
                name,
            );
        }
        let mut compared = HashSet::new();
        for &name in &first.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                &mut compared,
                are_mutually_exclusive,
                &second,
                name,
            );
        }
        for &name1 in &first.fragment_names {
            for &name2 in &second.fragment_names {
                self.collect_conflicts_between_fragments(&mut conflicts, are_mutually_exclusive, name1, name2);
            }
        }
        conflicts
    }

    fn collect_conflicts_within(&mut self, conflicts: &mut Vec<Conflict<'a>>, fields: &FieldMap<'a>) {
        for (&response_name, same_key) in fields {
            for (i, &field1) in same_key.iter().enumerate() {
                for &field2 in &same_key[i + 1..] {
                    if let Some(conflict) = self.find_conflict(false, response_name, field1, field2) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn collect_conflicts_between(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        parent_fields_are_mutually_exclusive: bool,
        fields1: &FieldMap<'a>,
        fields2: &FieldMap<'a>,
    ) {
        for (&response_name, same_key1) in fields1 {
            let Some(same_key2) = fields2.get(response_name) else {
                continue;
            };
            for &field1 in same_key1 {
                for &field2 in same_key2 {
                    if let Some(conflict) =
                        self.find_conflict(parent_fields_are_mutually_exclusive, response_name, field1, field2)
                    {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn find_conflict(
        &mut self,
        parent_fields_are_mutually_exclusive: bool,
        response_name: &str,
        field1: FieldAndDef<'a>,
        field2: FieldAndDef<'a>,
    ) -> Option<Conflict<'a>> {
        let (node1, node2) = (field1.node, field2.node);

        // Fields on two different object types can never both apply.
        let both_objects = matches!(
            (field1.parent_type, field2.parent_type),
            (Some(GraphQLType::Object(a)), Some(GraphQLType::Object(b))) if a.name() != b.name()
        );
        let are_mutually_exclusive = parent_fields_are_mutually_exclusive || both_objects;

        if !are_mutually_exclusive {
            let (name1, name2) = (node1.name.as_str(), node2.name.as_str());
            if name1 != name2 {
                return Some(Conflict::new(
                    response_name,
                    format!("'{name1}' and '{name2}' are different fields"),
                    node1,
                    node2,
                ));
            }
            if !same_arguments(&node1.arguments, &node2.arguments) {
                return Some(Conflict::new(response_name, "they have differing arguments".to_string(), node1, node2));
            }
        }

        let type1 = field1.def.map(Field::ty);
        let type2 = field2.def.map(Field::ty);
        if let (Some(type1), Some(type2)) = (type1, type2)
            && do_types_conflict(self.schema(), type1, type2)
        {
            return Some(Conflict::new(
                response_name,
                format!("they return conflicting types '{type1}' and '{type2}'"),
                node1,
                node2,
            ));
        }

        let (Some(selection_set1), Some(selection_set2)) = (&node1.selection_set, &node2.selection_set) else {
            return None;
        };
        let schema = self.schema();
        let sub_conflicts = self.find_conflicts_between_sub_selection_sets(
            are_mutually_exclusive,
            type1.and_then(|ty| schema.named_type(ty)),
            selection_set1,
            type2.and_then(|ty| schema.named_type(ty)),
            selection_set2,
        );
        subfield_conflicts(sub_conflicts, response_name, node1, node2)
    }

    fn fields_and_fragment_names(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) -> FieldsAndFragments<'a> {
        let mut result = FieldsAndFragments {
            selection_set,
            fields: IndexMap::new(),
            fragment_names: vec![],
        };
        self.collect_fields_and_fragment_names(parent_type, selection_set, &mut result);
        result
    }

    fn referenced_fields_and_fragment_names(&self, fragment: &'a ast::FragmentDefinition) -> FieldsAndFragments<'a> {
        let fragment_type = self.schema().get_type(fragment.type_condition.name.as_str());
        self.fields_and_fragment_names(fragment_type, &fragment.selection_set)
    }

    fn collect_fields_and_fragment_names(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
        result: &mut FieldsAndFragments<'a>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(node) => {
                    let def = parent_type.and_then(|parent| get_field_def(self.schema(), parent, node.name.as_str()));
                    result.fields.entry(node.response_key()).or_default().push(FieldAndDef {
                        parent_type,
                        node,
                        def,
                    });
                },
                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    if !result.fragment_names.contains(&name) {
                        result.fragment_names.push(name);
                    }
                },
                ast::Selection::InlineFragment(inline) => {
                    let inline_type = match &inline.type_condition {
                        Some(condition) => self.schema().get_type(condition.name.as_str()),
                        None => parent_type,
                    };
                    self.collect_fields_and_fragment_names(inline_type, &inline.selection_set, result);
                },
            }
        }
    }
}

fn same_arguments(args1: &[ast::Argument], args2: &[ast::Argument]) -> bool {
    args1.len() == args2.len()
        && args1.iter().all(|arg1| {
            args2
                .iter()
                .find(|arg2| arg2.name.as_str() == arg1.name.as_str())
                .is_some_and(|arg2| print_value(&arg1.value) == print_value(&arg2.value))
        })
}

/// Whether two field types could not be merged into one response value.
fn do_types_conflict(schema: &Schema, type1: &TypeRef, type2: &TypeRef) -> bool {
    match (type1, type2) {
        (TypeRef::List(item1), TypeRef::List(item2)) => do_types_conflict(schema, item1, item2),
        (TypeRef::List(_), _) | (_, TypeRef::List(_)) => true,
        (TypeRef::NonNull(inner1), TypeRef::NonNull(inner2)) => do_types_conflict(schema, inner1, inner2),
        (TypeRef::NonNull(_), _) | (_, TypeRef::NonNull(_)) => true,
        (TypeRef::Named(name1), TypeRef::Named(name2)) => {
            let is_leaf = |name: &str| schema.get_type(name).is_some_and(GraphQLType::is_leaf);
            (is_leaf(name1) || is_leaf(name2)) && name1 != name2
        },
    }
}

fn subfield_conflicts<'a>(
    conflicts: Vec<Conflict<'a>>,
    response_name: &str,
    node1: &'a ast::Field,
    node2: &'a ast::Field,
) -> Option<Conflict<'a>> {
    if conflicts.is_empty() {
        return None;
    }
    let mut fields1 = vec![node1];
    let mut fields2 = vec![node2];
    let mut reasons = Vec::with_capacity(conflicts.len());
    for conflict in conflicts {
        reasons.push((conflict.response_name, conflict.reason));
        fields1.extend(conflict.fields1);
        fields2.extend(conflict.fields2);
    }
    Some(Conflict {
        response_name: response_name.to_string(),
        reason: ConflictReason::Subfields(reasons),
        fields1,
        fields2,
    })
}
