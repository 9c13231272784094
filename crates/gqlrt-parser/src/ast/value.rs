use crate::ast::Loc;
use crate::ast::Name;

/// A literal or variable in argument position.
///
/// Numeric literals keep their raw source text; interpreting them (and range
/// checking) is left to the scalar type they are coerced against.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Value::Variable(v) => v.loc.as_ref(),
            Value::Int(v) => v.loc.as_ref(),
            Value::Float(v) => v.loc.as_ref(),
            Value::String(v) => v.loc.as_ref(),
            Value::Boolean(v) => v.loc.as_ref(),
            Value::Null(v) => v.loc.as_ref(),
            Value::Enum(v) => v.loc.as_ref(),
            Value::List(v) => v.loc.as_ref(),
            Value::Object(v) => v.loc.as_ref(),
        }
    }

    /// `true` when no `$variable` appears anywhere inside this value.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(obj) => obj.fields.iter().all(|field| field.value.is_const()),
            _ => true,
        }
    }
}

/// `$name`
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Loc>,
}

/// A string literal with escape sequences already decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Loc>,
}

/// Any bare name other than `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Loc>,
}

/// `{ name: value, ... }`. Field names are unique within one literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}
