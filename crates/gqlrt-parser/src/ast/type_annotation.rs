use crate::ast::Loc;
use crate::ast::Name;

/// A type reference such as `String`, `[Int]`, or `[ID!]!`.
///
/// The parser guarantees that a [`NonNullType`] never directly wraps another
/// [`NonNullType`].
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(Box<ListType>),
    NonNull(Box<NonNullType>),
}

impl Type {
    /// The [`NamedType`] at the core of any list/non-null wrapping.
    pub fn named_type(&self) -> &NamedType {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.ty.named_type(),
            Type::NonNull(non_null) => non_null.ty.named_type(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Type::Named(named) => named.loc.as_ref(),
            Type::List(list) => list.loc.as_ref(),
            Type::NonNull(non_null) => non_null.loc.as_ref(),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Named(named) => f.write_str(&named.name.value),
            Type::List(list) => write!(f, "[{}]", list.ty),
            Type::NonNull(non_null) => write!(f, "{}!", non_null.ty),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub ty: Type,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub ty: Type,
    pub loc: Option<Loc>,
}
