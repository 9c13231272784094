use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// A validated, immutable GraphQL schema.
///
/// The type map holds every type reachable from the root types, the
/// explicitly added types, the directive arguments, and the introspection
/// types. A `Schema` is `Send + Sync` and is shared by any number of
/// concurrent executions.
#[derive(Debug)]
pub struct Schema {
    pub(crate) query_type: Arc<ObjectType>,
    pub(crate) mutation_type: Option<Arc<ObjectType>>,
    pub(crate) subscription_type: Option<Arc<ObjectType>>,
    pub(crate) types: IndexMap<String, GraphQLType>,
    pub(crate) directives: IndexMap<String, Arc<DirectiveDefinition>>,
    pub(crate) possible_types: HashMap<String, Vec<Arc<ObjectType>>>,
}

impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn query_type(&self) -> &Arc<ObjectType> {
        &self.query_type
    }

    pub fn mutation_type(&self) -> Option<&Arc<ObjectType>> {
        self.mutation_type.as_ref()
    }

    pub fn subscription_type(&self) -> Option<&Arc<ObjectType>> {
        self.subscription_type.as_ref()
    }

    /// All types in the schema, in discovery order.
    pub fn type_map(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The named type at the core of `type_ref`.
    pub fn named_type(&self, type_ref: &TypeRef) -> Option<&GraphQLType> {
        self.get_type(type_ref.named_type())
    }

    /// The object types an abstract type may resolve to. Empty for anything
    /// that is not a union or interface of this schema.
    pub fn possible_types(&self, abstract_type: &str) -> &[Arc<ObjectType>] {
        self.possible_types
            .get(abstract_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_possible_type(&self, abstract_type: &str, object_type: &str) -> bool {
        self.possible_types(abstract_type)
            .iter()
            .any(|possible| possible.name() == object_type)
    }

    pub fn directives(&self) -> impl Iterator<Item = &Arc<DirectiveDefinition>> {
        self.directives.values()
    }

    pub fn get_directive(&self, name: &str) -> Option<&Arc<DirectiveDefinition>> {
        self.directives.get(name)
    }
}
