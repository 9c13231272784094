//! The runtime type system: named types, type references, fields, and
//! directives.

mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod interface_type;
mod lazy_map;
mod object_type;
mod scalar_type;
pub mod scalars;
mod type_ref;
mod union_type;

pub use directive::DEFAULT_DEPRECATION_REASON;
pub use directive::DEPRECATED;
pub use directive::DirectiveDefinition;
pub use directive::DirectiveLocation;
pub use directive::INCLUDE;
pub use directive::SKIP;
pub use directive::specified_directives;
pub use enum_type::EnumType;
pub use enum_type::EnumTypeBuilder;
pub use enum_type::EnumValue;
pub use field::Field;
pub use field::InputValue;
pub use field::Resolver;
pub use graphql_type::GraphQLType;
pub use graphql_type::TypeKind;
pub use input_object_type::InputObjectType;
pub use input_object_type::InputObjectTypeBuilder;
pub use interface_type::InterfaceType;
pub use interface_type::InterfaceTypeBuilder;
pub use interface_type::ResolveTypeFn;
pub use object_type::IsTypeOfFn;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeBuilder;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ParseValueFn;
pub use scalar_type::ScalarType;
pub use scalar_type::ScalarTypeBuilder;
pub use scalar_type::SerializeFn;
pub use type_ref::TypeRef;
pub use union_type::UnionType;
pub use union_type::UnionTypeBuilder;
