use crate::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use gqlrt_parser::ast;
use gqlrt_parser::print_value;

/// Static check of a literal against an input type, used by validation.
///
/// Variables are always accepted here; their types are checked separately.
/// Returns one message per problem, empty when the literal is valid.
pub fn is_valid_literal_value(schema: &Schema, type_ref: &TypeRef, value_ast: &ast::Value) -> Vec<String> {
    if let TypeRef::NonNull(inner) = type_ref {
        if matches!(value_ast, ast::Value::Null(_)) {
            return vec![format!("Expected \"{type_ref}\", found null.")];
        }
        return is_valid_literal_value(schema, inner, value_ast);
    }

    match value_ast {
        ast::Value::Null(_) | ast::Value::Variable(_) => return vec![],
        _ => (),
    }

    match type_ref {
        TypeRef::NonNull(_) => vec![],

        TypeRef::List(item_type) => match value_ast {
            ast::Value::List(list) => list.values
                .iter()
                .enumerate()
                .flat_map(|(index, item)| {
                    is_valid_literal_value(schema, item_type, item)
                        .into_iter()
                        .map(move |err| format!("In element #{index}: {err}"))
                })
                .collect(),
            single => is_valid_literal_value(schema, item_type, single),
        },

        TypeRef::Named(name) => match schema.get_type(name) {
            Some(GraphQLType::InputObject(input)) => {
                let ast::Value::Object(obj) = value_ast else {
                    return vec![format!("Expected \"{name}\", found not an object.")];
                };
                let fields = input.fields();
                let mut errors: Vec<String> = obj.fields
                    .iter()
                    .filter(|field| !fields.contains_key(field.name.as_str()))
                    .map(|field| format!("In field \"{}\": Unknown field.", field.name))
                    .collect();
                for (field_name, field_def) in fields {
                    let field_ast = obj.fields.iter().find(|field| field.name.value == *field_name);
                    let field_errors = match field_ast {
                        Some(field_ast) => is_valid_literal_value(schema, &field_def.ty, &field_ast.value),
                        None if field_def.ty.is_non_null() && field_def.default_value.is_none() => {
                            vec![format!("Expected \"{}\", found null.", field_def.ty)]
                        },
                        None => vec![],
                    };
                    errors.extend(
                        field_errors
                            .into_iter()
                            .map(|err| format!("In field \"{field_name}\": {err}")),
                    );
                }
                errors
            },

            Some(GraphQLType::Scalar(scalar)) => match scalar.parse_literal(value_ast) {
                Some(_) => vec![],
                None => vec![format!("Expected type \"{name}\", found {}.", print_value(value_ast))],
            },

            Some(GraphQLType::Enum(enum_type)) => match enum_type.parse_literal(value_ast) {
                Some(_) => vec![],
                None => vec![format!("Expected type \"{name}\", found {}.", print_value(value_ast))],
            },

            // Unknown and non-input types are reported by other rules.
            _ => vec![],
        },
    }
}
