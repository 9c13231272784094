//! The introspection types (`__Schema`, `__Type`, ...) and the meta-fields
//! `__schema`, `__type`, and `__typename`.
//!
//! Introspection types are ordinary object and enum types whose resolvers
//! read from the executing [`Schema`] (`info.schema`). Their source values
//! are small wrapper objects around type references and definitions.

use crate::FieldError;
use crate::Schema;
use crate::Value;
use crate::execution::FieldResult;
use crate::execution::FieldValue;
use crate::execution::ObjectSource;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::utilities::ast_from_value;
use gqlrt_parser::print_value;
use std::sync::Arc;
use std::sync::LazyLock;

pub const SCHEMA_TYPE_NAME: &str = "__Schema";
pub const SCHEMA_FIELD_NAME: &str = "__schema";
pub const TYPE_FIELD_NAME: &str = "__type";
pub const TYPENAME_FIELD_NAME: &str = "__typename";

/// The field definition for `field_name` on `parent_type`, including the
/// meta-fields: `__typename` on every composite type, `__schema` and
/// `__type` on the query root only.
pub fn get_field_def<'s>(
    schema: &'s Schema,
    parent_type: &'s GraphQLType,
    field_name: &str,
) -> Option<&'s Field> {
    meta_field_def(schema, parent_type.name(), parent_type.is_composite(), field_name)
        .or_else(|| parent_type.fields()?.get(field_name))
}

pub(crate) fn get_object_field_def<'s>(
    schema: &Schema,
    parent_type: &'s ObjectType,
    field_name: &str,
) -> Option<&'s Field> {
    meta_field_def(schema, parent_type.name(), true, field_name)
        .or_else(|| parent_type.field(field_name))
}

fn meta_field_def(
    schema: &Schema,
    parent_name: &str,
    is_composite: bool,
    field_name: &str,
) -> Option<&'static Field> {
    let is_query_root = parent_name == schema.query_type().name();
    match field_name {
        SCHEMA_FIELD_NAME if is_query_root => Some(&*SCHEMA_META_FIELD),
        TYPE_FIELD_NAME if is_query_root => Some(&*TYPE_META_FIELD),
        TYPENAME_FIELD_NAME if is_composite => Some(&*TYPENAME_META_FIELD),
        _ => None,
    }
}

/// The introspection type named `name`, if there is one.
pub(crate) fn introspection_type(name: &str) -> Option<GraphQLType> {
    Some(match name {
        "__Schema" => GraphQLType::from(&*SCHEMA_TYPE),
        "__Type" => GraphQLType::from(&*TYPE_TYPE),
        "__Field" => GraphQLType::from(&*FIELD_TYPE),
        "__InputValue" => GraphQLType::from(&*INPUT_VALUE_TYPE),
        "__EnumValue" => GraphQLType::from(&*ENUM_VALUE_TYPE),
        "__Directive" => GraphQLType::from(&*DIRECTIVE_TYPE),
        "__TypeKind" => GraphQLType::from(&*TYPE_KIND_TYPE),
        "__DirectiveLocation" => GraphQLType::from(&*DIRECTIVE_LOCATION_TYPE),
        _ => return None,
    })
}

// =============================================================================
// Meta-fields
// =============================================================================

pub static SCHEMA_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    named(
        SCHEMA_FIELD_NAME,
        Field::new(TypeRef::named("__Schema").non_null())
            .description("Access the current type schema of this server.")
            .resolve(|_, _, _| Ok(FieldValue::object(SchemaSource))),
    )
});

pub static TYPE_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    named(
        TYPE_FIELD_NAME,
        Field::new("__Type")
            .description("Request the type information of a single type.")
            .argument("name", InputValue::new(TypeRef::named("String").non_null()))
            .resolve(|_, args, info| {
                let name = args.get_str("name").unwrap_or_default();
                Ok(match info.schema.get_type(name) {
                    Some(_) => type_value(TypeRef::named(name)),
                    None => FieldValue::null(),
                })
            }),
    )
});

pub static TYPENAME_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    named(
        TYPENAME_FIELD_NAME,
        Field::new(TypeRef::named("String").non_null())
            .description("The name of the current Object type at runtime.")
            .resolve(|_, _, info| Ok(Value::from(info.parent_type.name()).into())),
    )
});

fn named(name: &str, mut field: Field) -> Field {
    field.name = name.to_string();
    field
}

// =============================================================================
// Source values
// =============================================================================

struct SchemaSource;
impl ObjectSource for SchemaSource {}

struct TypeSource(TypeRef);
impl ObjectSource for TypeSource {}

struct FieldSource(Field);
impl ObjectSource for FieldSource {}

struct InputValueSource(InputValue);
impl ObjectSource for InputValueSource {}

struct EnumValueSource {
    name: String,
    value: EnumValue,
}
impl ObjectSource for EnumValueSource {}

struct DirectiveSource(Arc<DirectiveDefinition>);
impl ObjectSource for DirectiveSource {}

fn source<T: 'static>(value: &FieldValue) -> Result<&T, FieldError> {
    value.downcast_ref::<T>().ok_or_else(|| {
        FieldError::new(format!(
            "Introspection field resolved on a value that is not a {}",
            std::any::type_name::<T>(),
        ))
    })
}

fn type_value(type_ref: TypeRef) -> FieldValue {
    FieldValue::object(TypeSource(type_ref))
}

fn string_or_null(s: Option<&str>) -> FieldResult {
    Ok(Value::from(s).into())
}

// =============================================================================
// Introspection object types
// =============================================================================

fn list_of(name: &str) -> TypeRef {
    TypeRef::named(name).non_null().list().non_null()
}

fn nullable_list_of(name: &str) -> TypeRef {
    TypeRef::named(name).non_null().list()
}

fn include_deprecated_arg() -> InputValue {
    InputValue::new("Boolean").default_value(false)
}

static SCHEMA_TYPE: LazyLock<Arc<ObjectType>> = LazyLock::new(|| {
    Arc::new(
        ObjectType::builder("__Schema")
            .description(
                "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
                available types and directives on the server, as well as the entry points for \
                query, mutation, and subscription operations.",
            )
            .field(
                "types",
                Field::new(list_of("__Type"))
                    .description("A list of all types supported by this server.")
                    .resolve(|_, _, info| {
                        Ok(FieldValue::list(
                            info.schema.type_map().keys().map(|name| type_value(TypeRef::named(name))),
                        ))
                    }),
            )
            .field(
                "queryType",
                Field::new(TypeRef::named("__Type").non_null())
                    .description("The type that query operations will be rooted at.")
                    .resolve(|_, _, info| {
                        Ok(type_value(TypeRef::named(info.schema.query_type().name())))
                    }),
            )
            .field(
                "mutationType",
                Field::new("__Type")
                    .description(
                        "If this server supports mutation, the type that mutation operations \
                        will be rooted at.",
                    )
                    .resolve(|_, _, info| {
                        Ok(info.schema
                            .mutation_type()
                            .map(|ty| type_value(TypeRef::named(ty.name())))
                            .unwrap_or_else(FieldValue::null))
                    }),
            )
            .field(
                "subscriptionType",
                Field::new("__Type")
                    .description(
                        "If this server support subscription, the type that subscription \
                        operations will be rooted at.",
                    )
                    .resolve(|_, _, info| {
                        Ok(info.schema
                            .subscription_type()
                            .map(|ty| type_value(TypeRef::named(ty.name())))
                            .unwrap_or_else(FieldValue::null))
                    }),
            )
            .field(
                "directives",
                Field::new(list_of("__Directive"))
                    .description("A list of all directives supported by this server.")
                    .resolve(|_, _, info| {
                        Ok(FieldValue::list(
                            info.schema
                                .directives()
                                .map(|directive| FieldValue::object(DirectiveSource(Arc::clone(directive)))),
                        ))
                    }),
            )
            .build(),
    )
});

static TYPE_TYPE: LazyLock<Arc<ObjectType>> = LazyLock::new(|| {
    Arc::new(
        ObjectType::builder("__Type")
            .description(
                "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
                types in GraphQL as represented by the `__TypeKind` enum.\n\nDepending on the \
                kind of a type, certain fields describe information about that type. Scalar \
                types provide no information beyond a name and description, while Enum types \
                provide their values. Object and Interface types provide the fields they \
                describe. Abstract types, Union and Interface, provide the Object types possible \
                at runtime. List and NonNull types compose other types.",
            )
            .field(
                "kind",
                Field::new(TypeRef::named("__TypeKind").non_null()).resolve(|source_value, _, info| {
                    let kind = match &source::<TypeSource>(source_value)?.0 {
                        TypeRef::NonNull(_) => TypeKind::NonNull,
                        TypeRef::List(_) => TypeKind::List,
                        TypeRef::Named(name) => match info.schema.get_type(name) {
                            Some(ty) => ty.kind(),
                            None => return Err(FieldError::new(format!("Unknown type \"{name}\""))),
                        },
                    };
                    Ok(Value::String(kind.as_str().to_string()).into())
                }),
            )
            .field(
                "name",
                Field::new("String").resolve(|source_value, _, _| {
                    match &source::<TypeSource>(source_value)?.0 {
                        TypeRef::Named(name) => string_or_null(Some(name)),
                        _ => string_or_null(None),
                    }
                }),
            )
            .field(
                "description",
                Field::new("String").resolve(|source_value, _, info| {
                    let type_ref = &source::<TypeSource>(source_value)?.0;
                    string_or_null(named_type_of(info.schema, type_ref).and_then(GraphQLType::description))
                }),
            )
            .field(
                "fields",
                Field::new(nullable_list_of("__Field"))
                    .argument("includeDeprecated", include_deprecated_arg())
                    .resolve(|source_value, args, info| {
                        let type_ref = &source::<TypeSource>(source_value)?.0;
                        let include_deprecated = args.get_bool("includeDeprecated").unwrap_or(false);
                        let Some(fields) = named_type_of(info.schema, type_ref).and_then(GraphQLType::fields)
                        else {
                            return Ok(FieldValue::null());
                        };
                        Ok(FieldValue::list(
                            fields.values()
                                .filter(|field| include_deprecated || !field.is_deprecated())
                                .map(|field| FieldValue::object(FieldSource(field.clone()))),
                        ))
                    }),
            )
            .field(
                "interfaces",
                Field::new(nullable_list_of("__Type")).resolve(|source_value, _, info| {
                    let type_ref = &source::<TypeSource>(source_value)?.0;
                    match named_type_of(info.schema, type_ref) {
                        Some(GraphQLType::Object(object)) => Ok(FieldValue::list(
                            object.interfaces().iter().map(|name| type_value(TypeRef::named(name))),
                        )),
                        _ => Ok(FieldValue::null()),
                    }
                }),
            )
            .field(
                "possibleTypes",
                Field::new(nullable_list_of("__Type")).resolve(|source_value, _, info| {
                    let type_ref = &source::<TypeSource>(source_value)?.0;
                    match named_type_of(info.schema, type_ref) {
                        Some(ty) if ty.is_abstract() => Ok(FieldValue::list(
                            info.schema
                                .possible_types(ty.name())
                                .iter()
                                .map(|object| type_value(TypeRef::named(object.name()))),
                        )),
                        _ => Ok(FieldValue::null()),
                    }
                }),
            )
            .field(
                "enumValues",
                Field::new(nullable_list_of("__EnumValue"))
                    .argument("includeDeprecated", include_deprecated_arg())
                    .resolve(|source_value, args, info| {
                        let type_ref = &source::<TypeSource>(source_value)?.0;
                        let include_deprecated = args.get_bool("includeDeprecated").unwrap_or(false);
                        let Some(GraphQLType::Enum(enum_type)) = named_type_of(info.schema, type_ref) else {
                            return Ok(FieldValue::null());
                        };
                        Ok(FieldValue::list(
                            enum_type.values()
                                .iter()
                                .filter(|(_, value)| include_deprecated || !value.is_deprecated())
                                .map(|(name, value)| FieldValue::object(EnumValueSource {
                                    name: name.clone(),
                                    value: value.clone(),
                                })),
                        ))
                    }),
            )
            .field(
                "inputFields",
                Field::new(nullable_list_of("__InputValue")).resolve(|source_value, _, info| {
                    let type_ref = &source::<TypeSource>(source_value)?.0;
                    let Some(GraphQLType::InputObject(input)) = named_type_of(info.schema, type_ref) else {
                        return Ok(FieldValue::null());
                    };
                    Ok(FieldValue::list(
                        input.fields()
                            .values()
                            .map(|field| FieldValue::object(InputValueSource(field.clone()))),
                    ))
                }),
            )
            .field(
                "ofType",
                Field::new("__Type").resolve(|source_value, _, _| {
                    match &source::<TypeSource>(source_value)?.0 {
                        TypeRef::List(inner) | TypeRef::NonNull(inner) => Ok(type_value((**inner).clone())),
                        TypeRef::Named(_) => Ok(FieldValue::null()),
                    }
                }),
            )
            .build(),
    )
});

/// The schema type behind a bare named reference. Wrapped references
/// describe themselves only through `kind` and `ofType`.
fn named_type_of<'s>(schema: &'s Schema, type_ref: &TypeRef) -> Option<&'s GraphQLType> {
    match type_ref {
        TypeRef::Named(name) => schema.get_type(name),
        _ => None,
    }
}

static FIELD_TYPE: LazyLock<Arc<ObjectType>> = LazyLock::new(|| {
    Arc::new(
        ObjectType::builder("__Field")
            .description(
                "Object and Interface types are described by a list of Fields, each of which has \
                a name, potentially a list of arguments, and a return type.",
            )
            .field(
                "name",
                Field::new(TypeRef::named("String").non_null()).resolve(|source_value, _, _| {
                    string_or_null(Some(source::<FieldSource>(source_value)?.0.name()))
                }),
            )
            .field(
                "description",
                Field::new("String").resolve(|source_value, _, _| {
                    string_or_null(source::<FieldSource>(source_value)?.0.get_description())
                }),
            )
            .field(
                "args",
                Field::new(list_of("__InputValue")).resolve(|source_value, _, _| {
                    Ok(FieldValue::list(
                        source::<FieldSource>(source_value)?
                            .0
                            .args()
                            .values()
                            .map(|arg| FieldValue::object(InputValueSource(arg.clone()))),
                    ))
                }),
            )
            .field(
                "type",
                Field::new(TypeRef::named("__Type").non_null()).resolve(|source_value, _, _| {
                    Ok(type_value(source::<FieldSource>(source_value)?.0.ty().clone()))
                }),
            )
            .field(
                "isDeprecated",
                Field::new(TypeRef::named("Boolean").non_null()).resolve(|source_value, _, _| {
                    Ok(Value::from(source::<FieldSource>(source_value)?.0.is_deprecated()).into())
                }),
            )
            .field(
                "deprecationReason",
                Field::new("String").resolve(|source_value, _, _| {
                    string_or_null(source::<FieldSource>(source_value)?.0.deprecation_reason())
                }),
            )
            .build(),
    )
});

static INPUT_VALUE_TYPE: LazyLock<Arc<ObjectType>> = LazyLock::new(|| {
    Arc::new(
        ObjectType::builder("__InputValue")
            .description(
                "Arguments provided to Fields or Directives and the input fields of an \
                InputObject are represented as Input Values which describe their type and \
                optionally a default value.",
            )
            .field(
                "name",
                Field::new(TypeRef::named("String").non_null()).resolve(|source_value, _, _| {
                    string_or_null(Some(source::<InputValueSource>(source_value)?.0.name()))
                }),
            )
            .field(
                "description",
                Field::new("String").resolve(|source_value, _, _| {
                    string_or_null(source::<InputValueSource>(source_value)?.0.get_description())
                }),
            )
            .field(
                "type",
                Field::new(TypeRef::named("__Type").non_null()).resolve(|source_value, _, _| {
                    Ok(type_value(source::<InputValueSource>(source_value)?.0.ty().clone()))
                }),
            )
            .field(
                "defaultValue",
                Field::new("String")
                    .description(
                        "A GraphQL-formatted string representing the default value for this \
                        input value.",
                    )
                    .resolve(|source_value, _, info| {
                        let input = &source::<InputValueSource>(source_value)?.0;
                        let printed = input
                            .get_default_value()
                            .and_then(|default| ast_from_value(info.schema, default, input.ty()))
                            .map(|literal| print_value(&literal));
                        string_or_null(printed.as_deref())
                    }),
            )
            .build(),
    )
});

static ENUM_VALUE_TYPE: LazyLock<Arc<ObjectType>> = LazyLock::new(|| {
    Arc::new(
        ObjectType::builder("__EnumValue")
            .description(
                "One possible value for a given Enum. Enum values are unique values, not a \
                placeholder for a string or numeric value. However an Enum value is returned in \
                a JSON response as a string.",
            )
            .field(
                "name",
                Field::new(TypeRef::named("String").non_null()).resolve(|source_value, _, _| {
                    string_or_null(Some(&source::<EnumValueSource>(source_value)?.name))
                }),
            )
            .field(
                "description",
                Field::new("String").resolve(|source_value, _, _| {
                    string_or_null(source::<EnumValueSource>(source_value)?.value.get_description())
                }),
            )
            .field(
                "isDeprecated",
                Field::new(TypeRef::named("Boolean").non_null()).resolve(|source_value, _, _| {
                    Ok(Value::from(source::<EnumValueSource>(source_value)?.value.is_deprecated()).into())
                }),
            )
            .field(
                "deprecationReason",
                Field::new("String").resolve(|source_value, _, _| {
                    string_or_null(source::<EnumValueSource>(source_value)?.value.deprecation_reason())
                }),
            )
            .build(),
    )
});

static DIRECTIVE_TYPE: LazyLock<Arc<ObjectType>> = LazyLock::new(|| {
    Arc::new(
        ObjectType::builder("__Directive")
            .description(
                "A Directive provides a way to describe alternate runtime execution and type \
                validation behavior in a GraphQL document.\n\nIn some cases, you need to provide \
                options to alter GraphQL's execution behavior in ways field arguments will not \
                suffice, such as conditionally including or skipping a field. Directives provide \
                this by describing additional information to the executor.",
            )
            .field(
                "name",
                Field::new(TypeRef::named("String").non_null()).resolve(|source_value, _, _| {
                    string_or_null(Some(source::<DirectiveSource>(source_value)?.0.name()))
                }),
            )
            .field(
                "description",
                Field::new("String").resolve(|source_value, _, _| {
                    string_or_null(source::<DirectiveSource>(source_value)?.0.get_description())
                }),
            )
            .field(
                "locations",
                Field::new(list_of("__DirectiveLocation")).resolve(|source_value, _, _| {
                    Ok(FieldValue::list(
                        source::<DirectiveSource>(source_value)?
                            .0
                            .locations()
                            .iter()
                            .map(|location| Value::String(location.as_str().to_string())),
                    ))
                }),
            )
            .field(
                "args",
                Field::new(list_of("__InputValue")).resolve(|source_value, _, _| {
                    Ok(FieldValue::list(
                        source::<DirectiveSource>(source_value)?
                            .0
                            .args()
                            .values()
                            .map(|arg| FieldValue::object(InputValueSource(arg.clone()))),
                    ))
                }),
            )
            .build(),
    )
});

static TYPE_KIND_TYPE: LazyLock<Arc<EnumType>> = LazyLock::new(|| {
    let kinds = [
        (TypeKind::Scalar, "Indicates this type is a scalar."),
        (
            TypeKind::Object,
            "Indicates this type is an object. `fields` and `interfaces` are valid fields.",
        ),
        (
            TypeKind::Interface,
            "Indicates this type is an interface. `fields` and `possibleTypes` are valid fields.",
        ),
        (TypeKind::Union, "Indicates this type is a union. `possibleTypes` is a valid field."),
        (TypeKind::Enum, "Indicates this type is an enum. `enumValues` is a valid field."),
        (
            TypeKind::InputObject,
            "Indicates this type is an input object. `inputFields` is a valid field.",
        ),
        (TypeKind::List, "Indicates this type is a list. `ofType` is a valid field."),
        (TypeKind::NonNull, "Indicates this type is a non-null. `ofType` is a valid field."),
    ];
    let builder = kinds.into_iter().fold(
        EnumType::builder("__TypeKind")
            .description("An enum describing what kind of type a given `__Type` is."),
        |builder, (kind, description)| {
            builder.value(
                kind.as_str(),
                EnumValue::new(kind.as_str()).description(description),
            )
        },
    );
    Arc::new(builder.build())
});

static DIRECTIVE_LOCATION_TYPE: LazyLock<Arc<EnumType>> = LazyLock::new(|| {
    let builder = DirectiveLocation::ALL.into_iter().fold(
        EnumType::builder("__DirectiveLocation").description(
            "A Directive can be adjacent to many parts of the GraphQL language, a \
            __DirectiveLocation describes one such possible adjacencies.",
        ),
        |builder, location| builder.simple_value(location.as_str()),
    );
    Arc::new(builder.build())
});
