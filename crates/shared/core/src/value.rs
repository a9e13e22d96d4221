//! Dynamically typed values
//!
//! Used where the API hands over schema-less payloads (fundamental ratios)
//! and as the operand type for the checked greeks arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::greeks::OptionComputation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Greeks(OptionComputation),
}

impl Value {
    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Greeks(_) => OptionComputation::TYPE_NAME,
        }
    }

    /// Numeric value, if this is an int or a float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a raw payload token: integer, then float, otherwise string
    pub fn parse(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            Value::Int(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            Value::Float(f)
        } else {
            Value::Str(raw.to_string())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Greeks(g) => write!(f, "{:?}", g),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<OptionComputation> for Value {
    fn from(g: OptionComputation) -> Self {
        Value::Greeks(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(Value::parse("42"), Value::Int(42));
        assert_eq!(Value::parse("-99999.99"), Value::Float(-99999.99));
        assert_eq!(Value::parse("USD"), Value::Str("USD".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from("USD").to_string(), "\"USD\"");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(3).type_name(), "int");
        assert_eq!(Value::from(OptionComputation::default()).type_name(), "OptionComputation");
    }
}
