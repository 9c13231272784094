use crate::Schema;
use crate::Value;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use gqlrt_parser::ast;
use indexmap::IndexMap;

/// Converts a document literal into an internal value of `type_ref`.
///
/// Variables are read from `variables` (already coerced values); a
/// variable with no runtime value reads as `null`. Returns `None` when the
/// literal is not a valid value of the type.
pub fn value_from_ast(
    schema: &Schema,
    value_ast: &ast::Value,
    type_ref: &TypeRef,
    variables: Option<&IndexMap<String, Value>>,
) -> Option<Value> {
    if let ast::Value::Variable(var) = value_ast {
        let value = variables
            .and_then(|vars| vars.get(var.name.as_str()))
            .cloned()
            .unwrap_or(Value::Null);
        // Coerced variables already carry their declared type, which
        // validation has checked against this position.
        if value.is_null() && type_ref.is_non_null() {
            return None;
        }
        return Some(value);
    }

    match type_ref {
        TypeRef::NonNull(inner) => {
            if matches!(value_ast, ast::Value::Null(_)) {
                return None;
            }
            value_from_ast(schema, value_ast, inner, variables)
        },

        _ if matches!(value_ast, ast::Value::Null(_)) => Some(Value::Null),

        TypeRef::List(item_type) => match value_ast {
            ast::Value::List(list) => list.values
                .iter()
                .map(|item| value_from_ast(schema, item, item_type, variables))
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            single => Some(Value::List(vec![value_from_ast(schema, single, item_type, variables)?])),
        },

        TypeRef::Named(name) => match schema.get_type(name)? {
            GraphQLType::Scalar(scalar) => scalar.parse_literal(value_ast),
            GraphQLType::Enum(enum_type) => enum_type.parse_literal(value_ast),
            GraphQLType::InputObject(input) => {
                let ast::Value::Object(obj) = value_ast else {
                    return None;
                };
                let fields = input.fields();
                if obj.fields.iter().any(|field| !fields.contains_key(field.name.as_str())) {
                    return None;
                }
                let mut coerced = IndexMap::with_capacity(fields.len());
                for (field_name, field_def) in fields {
                    let field_ast = obj.fields.iter().find(|field| field.name.value == *field_name);
                    match field_ast {
                        Some(field_ast) => {
                            let value = value_from_ast(schema, &field_ast.value, &field_def.ty, variables)?;
                            coerced.insert(field_name.clone(), value);
                        },
                        None => match &field_def.default_value {
                            Some(default) => {
                                coerced.insert(field_name.clone(), default.clone());
                            },
                            None if field_def.ty.is_non_null() => return None,
                            None => (),
                        },
                    }
                }
                Some(Value::Object(coerced))
            },
            _ => None,
        },
    }
}
