use crate::Schema;
use crate::Value;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use gqlrt_parser::ast;

/// Produces a literal for an internal value of `type_ref`, the inverse of
/// [`value_from_ast`](crate::utilities::value_from_ast).
///
/// Returns `None` when the value cannot be represented, for instance an
/// internal value that matches no enum value.
pub fn ast_from_value(schema: &Schema, value: &Value, type_ref: &TypeRef) -> Option<ast::Value> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                return None;
            }
            ast_from_value(schema, value, inner)
        },

        _ if value.is_null() => Some(ast::Value::Null(ast::NullValue { loc: None })),

        TypeRef::List(item_type) => match value {
            Value::List(items) => Some(ast::Value::List(ast::ListValue {
                values: items
                    .iter()
                    .map(|item| ast_from_value(schema, item, item_type))
                    .collect::<Option<_>>()?,
                loc: None,
            })),
            single => ast_from_value(schema, single, item_type),
        },

        TypeRef::Named(name) => match schema.get_type(name)? {
            GraphQLType::InputObject(input) => {
                let Value::Object(entries) = value else {
                    return None;
                };
                let fields = input.fields()
                    .iter()
                    .filter_map(|(field_name, field_def)| {
                        let field_value = entries.get(field_name)?;
                        Some(ast::ObjectField {
                            name: ast::Name::new(field_name.as_str()),
                            value: ast_from_value(schema, field_value, &field_def.ty)?,
                            loc: None,
                        })
                    })
                    .collect();
                Some(ast::Value::Object(ast::ObjectValue { fields, loc: None }))
            },

            GraphQLType::Enum(enum_type) => match enum_type.serialize(value)? {
                Value::Enum(name) => Some(ast::Value::Enum(ast::EnumValue { value: name, loc: None })),
                _ => None,
            },

            GraphQLType::Scalar(scalar) => {
                let serialized = scalar.serialize(value).ok()?;
                literal_from_serialized(&serialized, name == "ID")
            },

            _ => None,
        },
    }
}

fn literal_from_serialized(value: &Value, is_id: bool) -> Option<ast::Value> {
    Some(match value {
        Value::Null => ast::Value::Null(ast::NullValue { loc: None }),
        Value::Boolean(b) => ast::Value::Boolean(ast::BooleanValue { value: *b, loc: None }),
        Value::Int(i) => ast::Value::Int(ast::IntValue { value: i.to_string(), loc: None }),
        Value::Float(f) => {
            let text = f.to_string();
            if f.fract() == 0.0 && !text.contains(['e', 'E']) {
                ast::Value::Int(ast::IntValue { value: text, loc: None })
            } else {
                ast::Value::Float(ast::FloatValue { value: text, loc: None })
            }
        },
        // IDs that look like integers print as Int literals.
        Value::String(s) if is_id && !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            ast::Value::Int(ast::IntValue { value: s.clone(), loc: None })
        },
        Value::String(s) | Value::Enum(s) => {
            ast::Value::String(ast::StringValue { value: s.clone(), loc: None })
        },
        Value::List(items) => ast::Value::List(ast::ListValue {
            values: items
                .iter()
                .map(|item| literal_from_serialized(item, is_id))
                .collect::<Option<_>>()?,
            loc: None,
        }),
        Value::Object(entries) => ast::Value::Object(ast::ObjectValue {
            fields: entries
                .iter()
                .map(|(key, item)| Some(ast::ObjectField {
                    name: ast::Name::new(key.as_str()),
                    value: literal_from_serialized(item, is_id)?,
                    loc: None,
                }))
                .collect::<Option<_>>()?,
            loc: None,
        }),
    })
}
