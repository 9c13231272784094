use crate::GraphQLError;
use crate::Schema;
use crate::Value;
use crate::execution::Arguments;
use crate::types::InputValue;
use crate::utilities::coerce_value;
use crate::utilities::type_from_ast;
use crate::utilities::value_from_ast;
use gqlrt_parser::ast;
use gqlrt_parser::print_type;
use gqlrt_parser::print_value;
use indexmap::IndexMap;

/// Coerces the request's variable inputs against the operation's variable
/// definitions.
///
/// Variables that are neither provided nor defaulted are left out of the
/// result. Every definition is checked; all problems are reported together.
pub(crate) fn get_variable_values(
    schema: &Schema,
    definitions: &[ast::VariableDefinition],
    inputs: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, Vec<GraphQLError>> {
    let mut coerced = IndexMap::with_capacity(definitions.len());
    let mut errors = vec![];

    for definition in definitions {
        let name = definition.variable.name.as_str();
        let located = |message: String| GraphQLError::new(message).at(definition.loc.as_ref());

        let var_type = match type_from_ast(schema, &definition.ty) {
            Some(var_type) if schema.named_type(&var_type).is_some_and(|ty| ty.is_input_type()) => var_type,
            _ => {
                errors.push(located(format!(
                    "Variable \"${name}\" expected value of type \"{}\" which cannot be used as an \
                    input type.",
                    print_type(&definition.ty),
                )));
                continue;
            },
        };

        let Some(input) = inputs.get(name) else {
            if let Some(default) = &definition.default_value {
                if let Some(value) = value_from_ast(schema, default, &var_type, None) {
                    coerced.insert(name.to_string(), value);
                }
            } else if var_type.is_non_null() {
                errors.push(located(format!(
                    "Variable \"${name}\" of required type \"{var_type}\" was not provided.",
                )));
            }
            continue;
        };

        match coerce_value(schema, input, &var_type) {
            Ok(value) => {
                coerced.insert(name.to_string(), value);
            },
            Err(problems) => errors.push(located(format!(
                "Variable \"${name}\" got invalid value {}.\n{}",
                input.to_json_string(),
                problems.join("\n"),
            ))),
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        tracing::debug!(count = errors.len(), "variable coercion failed");
        Err(errors)
    }
}

/// Builds the argument values of one field or directive invocation.
///
/// Returns the message of the first argument that cannot be coerced.
pub(crate) fn get_argument_values(
    schema: &Schema,
    definitions: &IndexMap<String, InputValue>,
    arguments: &[ast::Argument],
    variables: &IndexMap<String, Value>,
) -> Result<Arguments, String> {
    let mut coerced = IndexMap::with_capacity(definitions.len());

    for (name, definition) in definitions {
        let arg_type = definition.ty();
        let argument = arguments.iter().find(|arg| arg.name.as_str() == name);

        let value = match argument.map(|arg| &arg.value) {
            None => match definition.get_default_value() {
                Some(default) => default.clone(),
                None if arg_type.is_non_null() => {
                    return Err(format!(
                        "Argument \"{name}\" of required type \"{arg_type}\" was not provided.",
                    ));
                },
                None => continue,
            },

            Some(ast::Value::Variable(var)) => match variables.get(var.name.as_str()) {
                Some(value) => value.clone(),
                None => match definition.get_default_value() {
                    Some(default) => default.clone(),
                    None if arg_type.is_non_null() => {
                        return Err(format!(
                            "Argument \"{name}\" of required type \"{arg_type}\" was provided the \
                            variable \"${}\" which was not provided a runtime value.",
                            var.name,
                        ));
                    },
                    None => continue,
                },
            },

            Some(literal) => match value_from_ast(schema, literal, arg_type, Some(variables)) {
                Some(value) => value,
                None => {
                    return Err(format!(
                        "Argument \"{name}\" has invalid value {}.",
                        print_value(literal),
                    ));
                },
            },
        };
        coerced.insert(name.clone(), value);
    }

    Ok(Arguments::new(coerced))
}
