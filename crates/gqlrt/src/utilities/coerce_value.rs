use crate::Schema;
use crate::Value;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// Checks an external input value (such as a variable from the request)
/// against `type_ref` and converts it into an internal value.
///
/// A single value given where a list is expected is treated as a list of
/// one. On failure, returns one message per problem found, each prefixed by
/// its position (`In element #1: ...`, `In field "name": ...`).
pub fn coerce_value(schema: &Schema, value: &Value, type_ref: &TypeRef) -> Result<Value, Vec<String>> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                return Err(vec![format!("Expected \"{type_ref}\", found null.")]);
            }
            coerce_value(schema, value, inner)
        },

        _ if value.is_null() => Ok(Value::Null),

        TypeRef::List(item_type) => match value {
            Value::List(items) => {
                let mut coerced = Vec::with_capacity(items.len());
                let mut errors = vec![];
                for (index, item) in items.iter().enumerate() {
                    match coerce_value(schema, item, item_type) {
                        Ok(item) => coerced.push(item),
                        Err(item_errors) => errors.extend(
                            item_errors.into_iter().map(|err| format!("In element #{index}: {err}")),
                        ),
                    }
                }
                if errors.is_empty() { Ok(Value::List(coerced)) } else { Err(errors) }
            },
            single => Ok(Value::List(vec![coerce_value(schema, single, item_type)?])),
        },

        TypeRef::Named(name) => {
            let invalid = || vec![format!("Expected type \"{name}\", found {value}.")];
            match schema.get_type(name) {
                Some(GraphQLType::Scalar(scalar)) => scalar.parse_value(value).ok_or_else(invalid),
                Some(GraphQLType::Enum(enum_type)) => enum_type.parse_value(value).ok_or_else(invalid),
                Some(GraphQLType::InputObject(input)) => {
                    let Value::Object(entries) = value else {
                        return Err(vec![format!("Expected \"{name}\", found not an object.")]);
                    };
                    let fields = input.fields();
                    let mut errors: Vec<String> = entries
                        .keys()
                        .filter(|key| !fields.contains_key(key.as_str()))
                        .map(|key| format!("In field \"{key}\": Unknown field."))
                        .collect();
                    let mut coerced = IndexMap::with_capacity(fields.len());
                    for (field_name, field_def) in fields {
                        let field_value = match entries.get(field_name) {
                            Some(field_value) => field_value,
                            None => {
                                if let Some(default) = &field_def.default_value {
                                    coerced.insert(field_name.clone(), default.clone());
                                    continue;
                                }
                                &Value::Null
                            },
                        };
                        match coerce_value(schema, field_value, &field_def.ty) {
                            Ok(v) if entries.contains_key(field_name) => {
                                coerced.insert(field_name.clone(), v);
                            },
                            Ok(_) => (),
                            Err(field_errors) => errors.extend(
                                field_errors
                                    .into_iter()
                                    .map(|err| format!("In field \"{field_name}\": {err}")),
                            ),
                        }
                    }
                    if errors.is_empty() { Ok(Value::Object(coerced)) } else { Err(errors) }
                },
                _ => Err(vec![format!("Unknown input type \"{name}\".")]),
            }
        },
    }
}
