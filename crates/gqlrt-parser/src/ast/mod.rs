//! The abstract syntax tree produced by [`parse`](crate::parse).
//!
//! Nodes own their strings so a [`Document`] can outlive the text it was
//! parsed from. Every node carries an optional [`Loc`]; it is `None` when
//! parsing with [`ParseOptions::no_location`](crate::ParseOptions).

mod document;
mod loc;
mod name;
mod selection;
mod type_annotation;
mod type_system;
mod value;

pub use document::Definition;
pub use document::Document;
pub use document::FragmentDefinition;
pub use document::OperationDefinition;
pub use document::OperationType;
pub use document::VariableDefinition;
pub use loc::Loc;
pub use name::Name;
pub use selection::Argument;
pub use selection::Directive;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::Type;
pub use type_system::DirectiveDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::OperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtensionDefinition;
pub use type_system::TypeSystemDefinition;
pub use type_system::UnionTypeDefinition;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::Variable;
