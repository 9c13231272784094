//! Prints an AST back to GraphQL source in a canonical layout: two-space
//! indentation, one selection per line, and a blank line between definitions.
//!
//! Printing then re-parsing any document yields an AST equal to the original
//! (ignoring locations).

use crate::ast;

/// Prints a whole document, terminated by a newline.
pub fn print(document: &ast::Document) -> String {
    let definitions: Vec<String> = document.definitions.iter().map(print_definition).collect();
    format!("{}\n", join(&definitions, "\n\n"))
}

pub fn print_definition(definition: &ast::Definition) -> String {
    match definition {
        ast::Definition::Operation(op) => print_operation_definition(op),
        ast::Definition::Fragment(frag) => print_fragment_definition(frag),
        ast::Definition::TypeSystem(def) => print_type_system_definition(def),
    }
}

pub fn print_value(value: &ast::Value) -> String {
    match value {
        ast::Value::Variable(var) => print_variable(var),
        ast::Value::Int(int) => int.value.clone(),
        ast::Value::Float(float) => float.value.clone(),
        ast::Value::String(string) => print_string(&string.value),
        ast::Value::Boolean(boolean) => boolean.value.to_string(),
        ast::Value::Null(_) => "null".to_string(),
        ast::Value::Enum(enum_value) => enum_value.value.clone(),
        ast::Value::List(list) => {
            let values: Vec<String> = list.values.iter().map(print_value).collect();
            format!("[{}]", join(&values, ", "))
        },
        ast::Value::Object(obj) => {
            let fields: Vec<String> = obj.fields
                .iter()
                .map(|field| format!("{}: {}", field.name, print_value(&field.value)))
                .collect();
            format!("{{{}}}", join(&fields, ", "))
        },
    }
}

pub fn print_type(ty: &ast::Type) -> String {
    ty.to_string()
}

pub fn print_selection_set(selection_set: &ast::SelectionSet) -> String {
    let selections: Vec<String> = selection_set.selections.iter().map(print_selection).collect();
    block(&selections)
}

// =============================================================================
// Executable definitions
// =============================================================================

fn print_operation_definition(op: &ast::OperationDefinition) -> String {
    let name = op.name.as_ref().map(|name| name.value.clone()).unwrap_or_default();
    let variable_definitions: Vec<String> = op.variable_definitions
        .iter()
        .map(print_variable_definition)
        .collect();
    let var_defs = wrap("(", &join(&variable_definitions, ", "), ")");
    let directives = print_directives(&op.directives);
    let selection_set = print_selection_set(&op.selection_set);

    // Anonymous queries without decoration print in shorthand form.
    if name.is_empty()
        && var_defs.is_empty()
        && directives.is_empty()
        && op.operation == ast::OperationType::Query
    {
        return selection_set;
    }

    join(
        &[
            op.operation.as_str().to_string(),
            format!("{name}{var_defs}"),
            directives,
            selection_set,
        ],
        " ",
    )
}

fn print_variable_definition(var_def: &ast::VariableDefinition) -> String {
    let default_value = var_def.default_value
        .as_ref()
        .map(print_value)
        .unwrap_or_default();
    format!(
        "{}: {}{}",
        print_variable(&var_def.variable),
        var_def.ty,
        wrap(" = ", &default_value, ""),
    )
}

fn print_variable(var: &ast::Variable) -> String {
    format!("${}", var.name)
}

fn print_fragment_definition(frag: &ast::FragmentDefinition) -> String {
    format!(
        "fragment {} on {} {}{}",
        frag.name,
        frag.type_condition.name,
        wrap("", &print_directives(&frag.directives), " "),
        print_selection_set(&frag.selection_set),
    )
}

fn print_selection(selection: &ast::Selection) -> String {
    match selection {
        ast::Selection::Field(field) => {
            let alias = field.alias
                .as_ref()
                .map(|alias| format!("{alias}: "))
                .unwrap_or_default();
            let selection_set = field.selection_set
                .as_ref()
                .map(print_selection_set)
                .unwrap_or_default();
            join(
                &[
                    format!("{alias}{}{}", field.name, print_arguments(&field.arguments)),
                    print_directives(&field.directives),
                    selection_set,
                ],
                " ",
            )
        },

        ast::Selection::FragmentSpread(spread) => {
            format!(
                "...{}{}",
                spread.name,
                wrap(" ", &print_directives(&spread.directives), ""),
            )
        },

        ast::Selection::InlineFragment(inline) => {
            let type_condition = inline.type_condition
                .as_ref()
                .map(|cond| format!("on {}", cond.name))
                .unwrap_or_default();
            join(
                &[
                    "...".to_string(),
                    type_condition,
                    print_directives(&inline.directives),
                    print_selection_set(&inline.selection_set),
                ],
                " ",
            )
        },
    }
}

fn print_arguments(arguments: &[ast::Argument]) -> String {
    let arguments: Vec<String> = arguments
        .iter()
        .map(|arg| format!("{}: {}", arg.name, print_value(&arg.value)))
        .collect();
    wrap("(", &join(&arguments, ", "), ")")
}

fn print_directives(directives: &[ast::Directive]) -> String {
    let directives: Vec<String> = directives
        .iter()
        .map(|directive| format!("@{}{}", directive.name, print_arguments(&directive.arguments)))
        .collect();
    join(&directives, " ")
}

fn print_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

// =============================================================================
// Type system definitions
// =============================================================================

fn print_type_system_definition(def: &ast::TypeSystemDefinition) -> String {
    match def {
        ast::TypeSystemDefinition::Schema(schema) => {
            let operation_types: Vec<String> = schema.operation_types
                .iter()
                .map(|op_type| format!("{}: {}", op_type.operation, op_type.ty.name))
                .collect();
            join(
                &[
                    "schema".to_string(),
                    print_directives(&schema.directives),
                    block(&operation_types),
                ],
                " ",
            )
        },
        ast::TypeSystemDefinition::Type(type_def) => print_type_definition(type_def),
        ast::TypeSystemDefinition::TypeExtension(ext) => {
            format!("extend {}", print_object_type_definition(&ext.definition))
        },
        ast::TypeSystemDefinition::Directive(directive) => {
            let arguments: Vec<String> = directive.arguments
                .iter()
                .map(print_input_value_definition)
                .collect();
            let locations: Vec<String> = directive.locations
                .iter()
                .map(|loc| loc.value.clone())
                .collect();
            format!(
                "directive @{}{} on {}",
                directive.name,
                wrap("(", &join(&arguments, ", "), ")"),
                join(&locations, " | "),
            )
        },
    }
}

fn print_type_definition(def: &ast::TypeDefinition) -> String {
    match def {
        ast::TypeDefinition::Scalar(scalar) => join(
            &[
                "scalar".to_string(),
                scalar.name.value.clone(),
                print_directives(&scalar.directives),
            ],
            " ",
        ),

        ast::TypeDefinition::Object(object) => print_object_type_definition(object),

        ast::TypeDefinition::Interface(interface) => {
            let fields: Vec<String> = interface.fields.iter().map(print_field_definition).collect();
            join(
                &[
                    "interface".to_string(),
                    interface.name.value.clone(),
                    print_directives(&interface.directives),
                    block(&fields),
                ],
                " ",
            )
        },

        ast::TypeDefinition::Union(union) => {
            let types: Vec<String> = union.types
                .iter()
                .map(|ty| ty.name.value.clone())
                .collect();
            join(
                &[
                    "union".to_string(),
                    union.name.value.clone(),
                    print_directives(&union.directives),
                    format!("= {}", join(&types, " | ")),
                ],
                " ",
            )
        },

        ast::TypeDefinition::Enum(enum_def) => {
            let values: Vec<String> = enum_def.values
                .iter()
                .map(|value| join(
                    &[value.name.value.clone(), print_directives(&value.directives)],
                    " ",
                ))
                .collect();
            join(
                &[
                    "enum".to_string(),
                    enum_def.name.value.clone(),
                    print_directives(&enum_def.directives),
                    block(&values),
                ],
                " ",
            )
        },

        ast::TypeDefinition::InputObject(input) => {
            let fields: Vec<String> = input.fields
                .iter()
                .map(print_input_value_definition)
                .collect();
            join(
                &[
                    "input".to_string(),
                    input.name.value.clone(),
                    print_directives(&input.directives),
                    block(&fields),
                ],
                " ",
            )
        },
    }
}

fn print_object_type_definition(object: &ast::ObjectTypeDefinition) -> String {
    let interfaces: Vec<String> = object.interfaces
        .iter()
        .map(|iface| iface.name.value.clone())
        .collect();
    let fields: Vec<String> = object.fields.iter().map(print_field_definition).collect();
    join(
        &[
            "type".to_string(),
            object.name.value.clone(),
            wrap("implements ", &join(&interfaces, ", "), ""),
            print_directives(&object.directives),
            block(&fields),
        ],
        " ",
    )
}

fn print_field_definition(field: &ast::FieldDefinition) -> String {
    let arguments: Vec<String> = field.arguments.iter().map(print_input_value_definition).collect();
    format!(
        "{}{}: {}{}",
        field.name,
        wrap("(", &join(&arguments, ", "), ")"),
        field.ty,
        wrap(" ", &print_directives(&field.directives), ""),
    )
}

fn print_input_value_definition(input: &ast::InputValueDefinition) -> String {
    let default_value = input.default_value
        .as_ref()
        .map(print_value)
        .unwrap_or_default();
    join(
        &[
            format!("{}: {}", input.name, input.ty),
            wrap("= ", &default_value, ""),
            print_directives(&input.directives),
        ],
        " ",
    )
}

// =============================================================================
// Layout helpers
// =============================================================================

/// Joins the non-empty `parts` with `separator`.
fn join(parts: &[String], separator: &str) -> String {
    parts.iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// `start + inner + end`, or the empty string if `inner` is empty.
fn wrap(start: &str, inner: &str, end: &str) -> String {
    if inner.is_empty() {
        String::new()
    } else {
        format!("{start}{inner}{end}")
    }
}

/// Renders `items` one per line inside braces, indented two spaces.
fn block(items: &[String]) -> String {
    if items.is_empty() {
        return "{}".to_string();
    }
    let body = join(items, "\n").replace('\n', "\n  ");
    format!("{{\n  {body}\n}}")
}
