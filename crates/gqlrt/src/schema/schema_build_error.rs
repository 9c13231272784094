use thiserror::Error;

/// Why [`SchemaBuilder::build`](crate::SchemaBuilder::build) rejected a
/// schema.
///
/// Positions are named by schema coordinates such as `Query.dog`,
/// `Query.dog(name:)`, `PetInput.name`, or `@skip(if:)`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("A schema requires a query root type")]
    MissingQueryType,

    #[error("Schema must contain unique named types but contains multiple types named \"{type_name}\"")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error(
        "Name \"{type_name}\" must not begin with \"__\", which is reserved by GraphQL \
        introspection"
    )]
    ReservedTypeName {
        type_name: String,
    },

    #[error("Type \"{type_name}\" defines the field \"{field_name}\" more than once")]
    DuplicateFieldName {
        type_name: String,
        field_name: String,
    },

    #[error("Field \"{coordinate}\" defines the argument \"{argument_name}\" more than once")]
    DuplicateArgumentName {
        coordinate: String,
        argument_name: String,
    },

    #[error("Enum \"{type_name}\" defines the value \"{value_name}\" more than once")]
    DuplicateEnumValue {
        type_name: String,
        value_name: String,
    },

    #[error("Schema must contain unique named directives but contains multiple directives named \"@{directive_name}\"")]
    DuplicateDirectiveName {
        directive_name: String,
    },

    #[error(
        "Type \"{type_name}\" is referenced{} but was never added to the schema",
        .referenced_by.as_ref().map(|coord| format!(" by \"{coord}\"")).unwrap_or_default(),
    )]
    UnknownType {
        type_name: String,
        referenced_by: Option<String>,
    },

    #[error("Type \"{type_name}\" declares that it implements \"{interface_name}\", which is not an interface type")]
    ImplementsNonInterface {
        type_name: String,
        interface_name: String,
    },

    #[error("Type \"{type_name}\" declares that it implements the \"{interface_name}\" interface more than once")]
    DuplicateInterfaceImplementation {
        type_name: String,
        interface_name: String,
    },

    #[error("\"{interface_name}.{field_name}\" expects a field but \"{type_name}\" does not provide it")]
    InterfaceFieldNotImplemented {
        type_name: String,
        interface_name: String,
        field_name: String,
    },

    #[error(
        "\"{interface_name}.{field_name}\" expects type \"{expected}\" but \
        \"{type_name}.{field_name}\" provides type \"{found}\""
    )]
    InterfaceFieldTypeMismatch {
        type_name: String,
        interface_name: String,
        field_name: String,
        expected: String,
        found: String,
    },

    #[error(
        "\"{interface_name}.{field_name}({argument_name}:)\" expects an argument of type \
        \"{expected}\" but \"{type_name}.{field_name}\" {}",
        .found.as_ref()
            .map(|found| format!("provides type \"{found}\""))
            .unwrap_or_else(|| "does not provide it".to_string()),
    )]
    InterfaceArgumentMismatch {
        type_name: String,
        interface_name: String,
        field_name: String,
        argument_name: String,
        expected: String,
        found: Option<String>,
    },

    #[error("Union \"{union_name}\" can only include object types, but \"{member_name}\" is not one")]
    UnionMemberNotObject {
        union_name: String,
        member_name: String,
    },

    #[error("Union \"{union_name}\" includes \"{member_name}\" more than once")]
    DuplicateUnionMember {
        union_name: String,
        member_name: String,
    },

    #[error("\"{coordinate}\" must be an input type but \"{type_ref}\" is not one")]
    InputTypeExpected {
        coordinate: String,
        type_ref: String,
    },

    #[error("\"{coordinate}\" must be an output type but \"{type_ref}\" is not one")]
    OutputTypeExpected {
        coordinate: String,
        type_ref: String,
    },

    #[error("\"{coordinate}\" has the type \"{type_ref}\", which wraps a non-null type in a non-null type")]
    NestedNonNull {
        coordinate: String,
        type_ref: String,
    },
}
