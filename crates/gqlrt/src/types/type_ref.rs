/// A reference to a type as written in a field, argument, or variable
/// position: a named type, optionally wrapped in list and non-null
/// modifiers.
///
/// Named references are resolved through the [`Schema`](crate::Schema) type
/// map, which is how mutually recursive object types refer to each other.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wraps this reference in a list: `T` becomes `[T]`.
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// Wraps this reference as non-null: `T` becomes `T!`.
    pub fn non_null(self) -> Self {
        TypeRef::NonNull(Box::new(self))
    }

    /// The name at the core of all wrapping.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }

    /// This reference with one outer non-null modifier removed, if present.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            TypeRef::NonNull(inner) => inner,
            other => other,
        }
    }

    /// The item type of a (possibly non-null) list reference.
    pub fn list_item(&self) -> Option<&TypeRef> {
        match self.nullable() {
            TypeRef::List(item) => Some(item),
            _ => None,
        }
    }

    /// Whether `!!` appears anywhere in this reference.
    pub(crate) fn has_nested_non_null(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::NonNull(inner) => inner.is_non_null() || inner.has_nested_non_null(),
            TypeRef::List(inner) => inner.has_nested_non_null(),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::Named(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        TypeRef::Named(name)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
