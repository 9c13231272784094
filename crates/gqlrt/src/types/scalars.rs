//! The five built-in scalars: `Int`, `Float`, `String`, `Boolean`, and `ID`.

use crate::Value;
use crate::types::ScalarType;
use gqlrt_parser::ast;
use std::sync::Arc;
use std::sync::LazyLock;

pub static INT: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder("Int")
            .description(
                "The `Int` scalar type represents non-fractional signed whole numeric values. \
                Int can represent values between -(2^31) and 2^31 - 1.",
            )
            .serialize(serialize_int)
            .parse_value(|value| match value {
                Value::Int(i) => to_i32(*i),
                Value::Float(f) => float_to_i32(*f),
                _ => None,
            })
            .parse_literal(|literal| match literal {
                ast::Value::Int(int) => to_i32(int.value.parse().ok()?),
                _ => None,
            })
            .build(),
    )
});

pub static FLOAT: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder("Float")
            .description(
                "The `Float` scalar type represents signed double-precision fractional values \
                as specified by [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).",
            )
            .serialize(serialize_float)
            .parse_value(|value| match value {
                Value::Int(i) => Some(Value::Float(*i as f64)),
                Value::Float(f) if f.is_finite() => Some(Value::Float(*f)),
                _ => None,
            })
            .parse_literal(|literal| match literal {
                ast::Value::Int(ast::IntValue { value, .. })
                | ast::Value::Float(ast::FloatValue { value, .. }) => {
                    let f: f64 = value.parse().ok()?;
                    f.is_finite().then_some(Value::Float(f))
                },
                _ => None,
            })
            .build(),
    )
});

pub static STRING: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder("String")
            .description(
                "The `String` scalar type represents textual data, represented as UTF-8 \
                character sequences. The String type is most often used by GraphQL to \
                represent free-form human-readable text.",
            )
            .serialize(|value| match value {
                Value::String(s) | Value::Enum(s) => Ok(Value::String(s.clone())),
                Value::Int(i) => Ok(Value::String(i.to_string())),
                Value::Float(f) => Ok(Value::String(f.to_string())),
                Value::Boolean(b) => Ok(Value::String(b.to_string())),
                Value::Null => Ok(Value::Null),
                other => Err(format!("String cannot represent value: {other}")),
            })
            .parse_value(|value| match value {
                Value::String(s) => Some(Value::String(s.clone())),
                _ => None,
            })
            .parse_literal(|literal| match literal {
                ast::Value::String(string) => Some(Value::String(string.value.clone())),
                _ => None,
            })
            .build(),
    )
});

pub static BOOLEAN: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder("Boolean")
            .description("The `Boolean` scalar type represents `true` or `false`.")
            .serialize(|value| match value {
                Value::Boolean(b) => Ok(Value::Boolean(*b)),
                Value::Int(i) => Ok(Value::Boolean(*i != 0)),
                Value::Float(f) => Ok(Value::Boolean(*f != 0.0)),
                Value::Null => Ok(Value::Null),
                other => Err(format!("Boolean cannot represent a non boolean value: {other}")),
            })
            .parse_value(|value| match value {
                Value::Boolean(b) => Some(Value::Boolean(*b)),
                _ => None,
            })
            .parse_literal(|literal| match literal {
                ast::Value::Boolean(boolean) => Some(Value::Boolean(boolean.value)),
                _ => None,
            })
            .build(),
    )
});

pub static ID: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder("ID")
            .description(
                "The `ID` scalar type represents a unique identifier, often used to refetch \
                an object or as key for a cache. The ID type appears in a JSON response as a \
                String; however, it is not intended to be human-readable. When expected as an \
                input type, any string (such as `\"4\"`) or integer (such as `4`) input value \
                will be accepted as an ID.",
            )
            .serialize(|value| match value {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Int(i) => Ok(Value::String(i.to_string())),
                Value::Null => Ok(Value::Null),
                other => Err(format!("ID cannot represent value: {other}")),
            })
            .parse_value(|value| match value {
                Value::String(s) => Some(Value::String(s.clone())),
                Value::Int(i) => Some(Value::String(i.to_string())),
                _ => None,
            })
            .parse_literal(|literal| match literal {
                ast::Value::String(ast::StringValue { value, .. })
                | ast::Value::Int(ast::IntValue { value, .. }) => Some(Value::String(value.clone())),
                _ => None,
            })
            .build(),
    )
});

/// The built-in scalar named `name`, if there is one.
pub fn builtin_scalar(name: &str) -> Option<&'static Arc<ScalarType>> {
    match name {
        "Int" => Some(&*INT),
        "Float" => Some(&*FLOAT),
        "String" => Some(&*STRING),
        "Boolean" => Some(&*BOOLEAN),
        "ID" => Some(&*ID),
        _ => None,
    }
}

fn to_i32(i: i64) -> Option<Value> {
    i32::try_from(i).ok().map(Value::from)
}

fn float_to_i32(f: f64) -> Option<Value> {
    if f.fract() != 0.0 || f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
        return None;
    }
    Some(Value::Int(f as i64))
}

fn serialize_int(value: &Value) -> Result<Value, String> {
    let out_of_range = || format!("Int cannot represent non 32-bit signed integer value: {value}");
    match value {
        Value::Int(i) => to_i32(*i).ok_or_else(out_of_range),
        Value::Float(f) if f.fract() == 0.0 => float_to_i32(*f).ok_or_else(out_of_range),
        Value::Boolean(b) => Ok(Value::Int(i64::from(*b))),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.fract() == 0.0 => float_to_i32(f).ok_or_else(out_of_range),
            _ => Err(format!("Int cannot represent non-integer value: {value}")),
        },
        Value::Null => Ok(Value::Null),
        _ => Err(format!("Int cannot represent non-integer value: {value}")),
    }
}

fn serialize_float(value: &Value) -> Result<Value, String> {
    let non_numeric = || format!("Float cannot represent non numeric value: {value}");
    let f = match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| non_numeric())?,
        Value::Null => return Ok(Value::Null),
        _ => return Err(non_numeric()),
    };
    if f.is_finite() {
        Ok(Value::Float(f))
    } else {
        Err(non_numeric())
    }
}
