use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::sync::Arc;

/// The kind of a type as reported by introspection's `__TypeKind`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }
}

/// Any named type that can live in a [`Schema`](crate::Schema) type map.
///
/// Types are shared behind [`Arc`], so registering the same type twice (the
/// same `Arc`) is not a conflict.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Object(t) => t.description(),
            GraphQLType::Interface(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            GraphQLType::Scalar(_) => TypeKind::Scalar,
            GraphQLType::Object(_) => TypeKind::Object,
            GraphQLType::Interface(_) => TypeKind::Interface,
            GraphQLType::Union(_) => TypeKind::Union,
            GraphQLType::Enum(_) => TypeKind::Enum,
            GraphQLType::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Scalars, enums, and input objects.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) | GraphQLType::InputObject(_),
        )
    }

    /// Everything except input objects.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GraphQLType::Scalar(_) | GraphQLType::Enum(_))
    }

    /// Objects, interfaces, and unions.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphQLType::Object(_) | GraphQLType::Interface(_) | GraphQLType::Union(_),
        )
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, GraphQLType::Interface(_) | GraphQLType::Union(_))
    }

    /// The field map of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Object(t) => Some(t.fields()),
            GraphQLType::Interface(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        if let GraphQLType::Object(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        if let GraphQLType::InputObject(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Whether `self` and `other` are the same shared definition.
    pub(crate) fn ptr_eq(&self, other: &GraphQLType) -> bool {
        match (self, other) {
            (GraphQLType::Scalar(a), GraphQLType::Scalar(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Object(a), GraphQLType::Object(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Interface(a), GraphQLType::Interface(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Union(a), GraphQLType::Union(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Enum(a), GraphQLType::Enum(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::InputObject(a), GraphQLType::InputObject(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

macro_rules! impl_from_named_type {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for GraphQLType {
            fn from(ty: $ty) -> Self {
                GraphQLType::$variant(Arc::new(ty))
            }
        }

        impl From<Arc<$ty>> for GraphQLType {
            fn from(ty: Arc<$ty>) -> Self {
                GraphQLType::$variant(ty)
            }
        }

        impl From<&Arc<$ty>> for GraphQLType {
            fn from(ty: &Arc<$ty>) -> Self {
                GraphQLType::$variant(Arc::clone(ty))
            }
        }
    };
}

impl_from_named_type!(Scalar, ScalarType);
impl_from_named_type!(Object, ObjectType);
impl_from_named_type!(Interface, InterfaceType);
impl_from_named_type!(Union, UnionType);
impl_from_named_type!(Enum, EnumType);
impl_from_named_type!(InputObject, InputObjectType);
