use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::{Error as _, SerializeSeq, Serializer};

/// Numeric literal. The grammar distinguishes `42` from `42.0` and the
/// distinction survives all the way through serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// A `.{name}.` reference. Only exists between parsing and resolution;
    /// never present in a `Document` returned to callers.
    ConstRef(String),
}

/// The result of parsing one VEX document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Declared variables, fully resolved, in declaration order.
    pub variables: IndexMap<String, Value>,
    /// The optional trailing bare value.
    #[serde(rename = "_result", skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Number(Number::Int(i)) = self { Some(*i) } else { None }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Number(Number::Float(x)) = self { Some(*x) } else { None }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self { Some(items) } else { None }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Keep the decimal point so float-ness stays visible in
            // interpolated strings
            Number::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::ConstRef(name) => write!(f, ".{{{}}}.", name),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(x)) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::ConstRef(name) => Err(S::Error::custom(format!(
                "unresolved constant reference '{}'",
                name
            ))),
        }
    }
}
