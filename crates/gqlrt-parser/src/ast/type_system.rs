use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;

/// Schema-definition-language constructs.
///
/// These parse and print, but validation and execution ignore them: runtime
/// schemas are assembled programmatically.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeExtensionDefinition),
    Directive(DirectiveDefinition),
}

impl TypeSystemDefinition {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            TypeSystemDefinition::Schema(def) => def.loc.as_ref(),
            TypeSystemDefinition::Type(def) => def.loc(),
            TypeSystemDefinition::TypeExtension(def) => def.loc.as_ref(),
            TypeSystemDefinition::Directive(def) => def.loc.as_ref(),
        }
    }
}

/// `schema { query: Query mutation: Mutation }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub ty: NamedType,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            TypeDefinition::Scalar(def) => def.loc.as_ref(),
            TypeDefinition::Object(def) => def.loc.as_ref(),
            TypeDefinition::Interface(def) => def.loc.as_ref(),
            TypeDefinition::Union(def) => def.loc.as_ref(),
            TypeDefinition::Enum(def) => def.loc.as_ref(),
            TypeDefinition::InputObject(def) => def.loc.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Loc>,
}

/// `name(arguments): Type @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: Type,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

/// An argument definition or input object field definition:
/// `name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Loc>,
}

/// `union Name = A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Loc>,
}

/// `extend type Name { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
    pub loc: Option<Loc>,
}

/// `directive @name(arguments) on LOCATION | LOCATION`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<Name>,
    pub loc: Option<Loc>,
}
