use crate::introspection;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::scalars;
use crate::types::specified_directives;
use crate::utilities::is_type_sub_type_of;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// ```rust
/// use gqlrt::Schema;
/// use gqlrt::types::Field;
/// use gqlrt::types::ObjectType;
///
/// let query = ObjectType::builder("Query")
///     .field("hello", Field::new("String").resolve(|_, _, _| Ok("world".into())))
///     .build();
/// let schema = Schema::builder().query(query).build()?;
/// assert!(schema.get_type("String").is_some());
/// # Ok::<(), gqlrt::SchemaBuildError>(())
/// ```
#[derive(Default)]
pub struct SchemaBuilder {
    query_type: Option<Arc<ObjectType>>,
    mutation_type: Option<Arc<ObjectType>>,
    subscription_type: Option<Arc<ObjectType>>,
    types: Vec<GraphQLType>,
    directives: Vec<Arc<DirectiveDefinition>>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query_type: impl Into<Arc<ObjectType>>) -> Self {
        self.query_type = Some(query_type.into());
        self
    }

    pub fn mutation(mut self, mutation_type: impl Into<Arc<ObjectType>>) -> Self {
        self.mutation_type = Some(mutation_type.into());
        self
    }

    pub fn subscription(mut self, subscription_type: impl Into<Arc<ObjectType>>) -> Self {
        self.subscription_type = Some(subscription_type.into());
        self
    }

    /// Adds a type that may not be reachable from the root types, such as an
    /// object type only ever returned through an interface. Every type that a
    /// field, argument, or union refers to by name must be added here (or be
    /// a root or built-in type).
    pub fn add_type(mut self, ty: impl Into<GraphQLType>) -> Self {
        self.types.push(ty.into());
        self
    }

    pub fn add_types<T: Into<GraphQLType>>(mut self, types: impl IntoIterator<Item = T>) -> Self {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Adds a directive alongside the built-in `@skip`, `@include`, and
    /// `@deprecated`.
    pub fn add_directive(mut self, directive: impl Into<Arc<DirectiveDefinition>>) -> Self {
        self.directives.push(directive.into());
        self
    }

    pub fn build(self) -> Result<Schema> {
        let query_type = self.query_type.ok_or(SchemaBuildError::MissingQueryType)?;

        let roots: Vec<GraphQLType> = [
            Some(&query_type),
            self.mutation_type.as_ref(),
            self.subscription_type.as_ref(),
        ]
            .into_iter()
            .flatten()
            .map(GraphQLType::from)
            .chain(self.types)
            .collect();

        let mut collector = TypeCollector::default();
        for ty in &roots {
            collector.register(ty)?;
        }
        for ty in &roots {
            collector.collect(ty.name(), None)?;
        }

        let mut directives = IndexMap::new();
        for directive in specified_directives().into_iter().chain(self.directives) {
            if directives.contains_key(directive.name()) {
                return Err(SchemaBuildError::DuplicateDirectiveName {
                    directive_name: directive.name().to_string(),
                });
            }
            for (arg_name, arg) in directive.args() {
                let coordinate = format!("@{}({arg_name}:)", directive.name());
                check_wrapping(&arg.ty, &coordinate)?;
                collector.collect(arg.ty.named_type(), Some(&coordinate))?;
            }
            directives.insert(directive.name().to_string(), directive);
        }

        collector.collect(introspection::SCHEMA_TYPE_NAME, None)?;

        let types = collector.types;
        let possible_types = collect_possible_types(&types)?;
        let schema = Schema {
            query_type,
            mutation_type: self.mutation_type,
            subscription_type: self.subscription_type,
            types,
            directives,
            possible_types,
        };
        validate_positions(&schema)?;
        validate_interface_implementations(&schema)?;

        tracing::debug!(
            types = schema.types.len(),
            directives = schema.directives.len(),
            "built schema",
        );
        Ok(schema)
    }
}

// =============================================================================
// Type discovery
// =============================================================================

#[derive(Default)]
struct TypeCollector {
    registered: HashMap<String, GraphQLType>,
    types: IndexMap<String, GraphQLType>,
}

impl TypeCollector {
    fn register(&mut self, ty: &GraphQLType) -> Result<()> {
        let name = ty.name();
        if name.starts_with("__") {
            return Err(SchemaBuildError::ReservedTypeName {
                type_name: name.to_string(),
            });
        }
        match self.registered.get(name) {
            Some(existing) if !existing.ptr_eq(ty) => Err(SchemaBuildError::DuplicateTypeName {
                type_name: name.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.registered.insert(name.to_string(), ty.clone());
                Ok(())
            },
        }
    }

    fn lookup(&self, name: &str) -> Option<GraphQLType> {
        self.registered
            .get(name)
            .cloned()
            .or_else(|| scalars::builtin_scalar(name).map(GraphQLType::from))
            .or_else(|| introspection::introspection_type(name))
    }

    /// Adds `name` and everything it refers to, depth first.
    fn collect(&mut self, name: &str, referenced_by: Option<&str>) -> Result<()> {
        if self.types.contains_key(name) {
            return Ok(());
        }
        let ty = self.lookup(name).ok_or_else(|| SchemaBuildError::UnknownType {
            type_name: name.to_string(),
            referenced_by: referenced_by.map(str::to_string),
        })?;
        self.types.insert(name.to_string(), ty.clone());

        match &ty {
            GraphQLType::Scalar(_) => (),
            GraphQLType::Object(object) => {
                self.collect_fields(object.name(), object.fields(), object.fields.duplicates())?;
                for interface in object.interfaces() {
                    self.collect(interface, Some(object.name()))?;
                }
            },
            GraphQLType::Interface(interface) => {
                self.collect_fields(
                    interface.name(),
                    interface.fields(),
                    interface.fields.duplicates(),
                )?;
            },
            GraphQLType::Union(union) => {
                for member in union.types() {
                    self.collect(member, Some(union.name()))?;
                }
            },
            GraphQLType::Enum(enum_type) => {
                if let Some(value_name) = enum_type.duplicate_values.first() {
                    return Err(SchemaBuildError::DuplicateEnumValue {
                        type_name: enum_type.name().to_string(),
                        value_name: value_name.clone(),
                    });
                }
            },
            GraphQLType::InputObject(input) => {
                if let Some(field_name) = input.fields.duplicates().first() {
                    return Err(SchemaBuildError::DuplicateFieldName {
                        type_name: input.name().to_string(),
                        field_name: field_name.clone(),
                    });
                }
                for (field_name, field) in input.fields() {
                    let coordinate = format!("{}.{field_name}", input.name());
                    check_wrapping(&field.ty, &coordinate)?;
                    self.collect(field.ty.named_type(), Some(&coordinate))?;
                }
            },
        }
        Ok(())
    }

    fn collect_fields(
        &mut self,
        type_name: &str,
        fields: &IndexMap<String, Field>,
        duplicates: &[String],
    ) -> Result<()> {
        if let Some(field_name) = duplicates.first() {
            return Err(SchemaBuildError::DuplicateFieldName {
                type_name: type_name.to_string(),
                field_name: field_name.clone(),
            });
        }
        for (field_name, field) in fields {
            let coordinate = format!("{type_name}.{field_name}");
            if let Some(argument_name) = field.duplicate_args.first() {
                return Err(SchemaBuildError::DuplicateArgumentName {
                    coordinate,
                    argument_name: argument_name.clone(),
                });
            }
            check_wrapping(&field.ty, &coordinate)?;
            self.collect(field.ty.named_type(), Some(&coordinate))?;
            for (arg_name, arg) in field.args() {
                let arg_coordinate = format!("{coordinate}({arg_name}:)");
                check_wrapping(&arg.ty, &arg_coordinate)?;
                self.collect(arg.ty.named_type(), Some(&arg_coordinate))?;
            }
        }
        Ok(())
    }
}

fn check_wrapping(type_ref: &TypeRef, coordinate: &str) -> Result<()> {
    if type_ref.has_nested_non_null() {
        return Err(SchemaBuildError::NestedNonNull {
            coordinate: coordinate.to_string(),
            type_ref: type_ref.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Abstract type membership
// =============================================================================

fn collect_possible_types(
    types: &IndexMap<String, GraphQLType>,
) -> Result<HashMap<String, Vec<Arc<ObjectType>>>> {
    let mut possible_types: HashMap<String, Vec<Arc<ObjectType>>> = HashMap::new();

    for ty in types.values() {
        match ty {
            GraphQLType::Object(object) => {
                let mut seen = HashSet::new();
                for interface_name in object.interfaces() {
                    if !seen.insert(interface_name.as_str()) {
                        return Err(SchemaBuildError::DuplicateInterfaceImplementation {
                            type_name: object.name().to_string(),
                            interface_name: interface_name.clone(),
                        });
                    }
                    let Some(GraphQLType::Interface(_)) = types.get(interface_name) else {
                        return Err(SchemaBuildError::ImplementsNonInterface {
                            type_name: object.name().to_string(),
                            interface_name: interface_name.clone(),
                        });
                    };
                    possible_types
                        .entry(interface_name.clone())
                        .or_default()
                        .push(Arc::clone(object));
                }
            },

            GraphQLType::Union(union) => {
                let mut members = Vec::with_capacity(union.types().len());
                for member_name in union.types() {
                    let Some(GraphQLType::Object(member)) = types.get(member_name) else {
                        return Err(SchemaBuildError::UnionMemberNotObject {
                            union_name: union.name().to_string(),
                            member_name: member_name.clone(),
                        });
                    };
                    if members.iter().any(|m: &Arc<ObjectType>| Arc::ptr_eq(m, member)) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            union_name: union.name().to_string(),
                            member_name: member_name.clone(),
                        });
                    }
                    members.push(Arc::clone(member));
                }
                possible_types.insert(union.name().to_string(), members);
            },

            _ => (),
        }
    }
    Ok(possible_types)
}

// =============================================================================
// Type positions
// =============================================================================

/// Fields must have output types and arguments and input fields must have
/// input types.
fn validate_positions(schema: &Schema) -> Result<()> {
    let named = |type_ref: &TypeRef| schema.named_type(type_ref);
    let check_input = |arg: &InputValue, coordinate: String| -> Result<()> {
        match named(&arg.ty) {
            Some(ty) if ty.is_input_type() => Ok(()),
            _ => Err(SchemaBuildError::InputTypeExpected {
                coordinate,
                type_ref: arg.ty.to_string(),
            }),
        }
    };

    for ty in schema.types.values() {
        if let Some(input) = ty.as_input_object() {
            for (field_name, field) in input.fields() {
                check_input(field, format!("{}.{field_name}", input.name()))?;
            }
            continue;
        }
        let Some(fields) = ty.fields() else {
            continue;
        };
        for (field_name, field) in fields {
            let coordinate = format!("{}.{field_name}", ty.name());
            match named(&field.ty) {
                Some(field_type) if field_type.is_output_type() => (),
                _ => return Err(SchemaBuildError::OutputTypeExpected {
                    coordinate,
                    type_ref: field.ty.to_string(),
                }),
            }
            for (arg_name, arg) in field.args() {
                check_input(arg, format!("{coordinate}({arg_name}:)"))?;
            }
        }
    }

    for directive in schema.directives.values() {
        for (arg_name, arg) in directive.args() {
            check_input(arg, format!("@{}({arg_name}:)", directive.name()))?;
        }
    }
    Ok(())
}

fn validate_interface_implementations(schema: &Schema) -> Result<()> {
    for ty in schema.types.values() {
        let GraphQLType::Object(object) = ty else {
            continue;
        };
        for interface_name in object.interfaces() {
            let Some(GraphQLType::Interface(interface)) = schema.get_type(interface_name) else {
                continue;
            };
            for (field_name, interface_field) in interface.fields() {
                let Some(object_field) = object.field(field_name) else {
                    return Err(SchemaBuildError::InterfaceFieldNotImplemented {
                        type_name: object.name().to_string(),
                        interface_name: interface_name.clone(),
                        field_name: field_name.clone(),
                    });
                };
                if !is_type_sub_type_of(schema, &object_field.ty, &interface_field.ty) {
                    return Err(SchemaBuildError::InterfaceFieldTypeMismatch {
                        type_name: object.name().to_string(),
                        interface_name: interface_name.clone(),
                        field_name: field_name.clone(),
                        expected: interface_field.ty.to_string(),
                        found: object_field.ty.to_string(),
                    });
                }
                for (arg_name, interface_arg) in interface_field.args() {
                    let found = object_field.args().get(arg_name).map(|arg| &arg.ty);
                    if found != Some(&interface_arg.ty) {
                        return Err(SchemaBuildError::InterfaceArgumentMismatch {
                            type_name: object.name().to_string(),
                            interface_name: interface_name.clone(),
                            field_name: field_name.clone(),
                            argument_name: arg_name.clone(),
                            expected: interface_arg.ty.to_string(),
                            found: found.map(TypeRef::to_string),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
