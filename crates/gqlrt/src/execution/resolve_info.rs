use crate::PathSegment;
use crate::Schema;
use crate::Value;
use crate::execution::FieldValue;
use crate::types::ObjectType;
use crate::types::TypeRef;
use gqlrt_parser::ast;
use indexmap::IndexMap;
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

/// Everything a resolver may want to know about the field it is resolving.
#[derive(Clone)]
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    /// Every field node merged under this response key.
    pub field_asts: &'a [&'a ast::Field],
    pub return_type: &'a TypeRef,
    pub parent_type: &'a ObjectType,
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub root_value: &'a FieldValue,
    pub operation: &'a ast::OperationDefinition,
    pub variable_values: &'a IndexMap<String, Value>,
    pub path: ResponsePath,
    pub(crate) context: &'a dyn Any,
}

impl<'a> ResolveInfo<'a> {
    /// The context value passed to the execution, if it is a `T`.
    pub fn context<T: Any>(&self) -> Option<&'a T> {
        self.context.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for ResolveInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveInfo")
            .field("field_name", &self.field_name)
            .field("return_type", &self.return_type)
            .field("parent_type", &self.parent_type.name())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// The response path of a field: a persistent linked list, so sibling
/// fields share their parent's prefix.
#[derive(Clone, Default)]
pub struct ResponsePath(Option<Rc<PathNode>>);

struct PathNode {
    prev: ResponsePath,
    segment: PathSegment,
}

impl ResponsePath {
    pub fn root() -> Self {
        Self(None)
    }

    pub fn with(&self, segment: impl Into<PathSegment>) -> Self {
        Self(Some(Rc::new(PathNode {
            prev: self.clone(),
            segment: segment.into(),
        })))
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.as_ref().map(|node| &node.segment)
    }

    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = vec![];
        let mut current = self;
        while let Some(node) = &current.0 {
            segments.push(node.segment.clone());
            current = &node.prev;
        }
        segments.reverse();
        segments
    }
}

impl std::fmt::Debug for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}
