//! Attribute types and typed values.
//!
//! Values are the typed payload of attribute defaults and of the
//! per-node/per-edge `attvalue` entries.

use std::fmt::{self, Write};

/// Separator between liststring items.
pub const LIST_SEPARATOR: char = '|';

/// Attribute value types recognized by GEXF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Long,
    Double,
    Float,
    Boolean,
    ListString,
    String,
    AnyUri,
}

impl AttributeType {
    /// Returns the token written in the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeType::Long => "long",
            AttributeType::Double => "double",
            AttributeType::Float => "float",
            AttributeType::Boolean => "boolean",
            AttributeType::ListString => "liststring",
            AttributeType::String => "string",
            AttributeType::AnyUri => "anyURI",
        }
    }

    /// Creates an AttributeType from its GEXF token.
    pub fn from_name(name: &str) -> Option<AttributeType> {
        match name {
            "long" => Some(AttributeType::Long),
            "double" => Some(AttributeType::Double),
            "float" => Some(AttributeType::Float),
            "boolean" => Some(AttributeType::Boolean),
            "liststring" => Some(AttributeType::ListString),
            "string" => Some(AttributeType::String),
            "anyURI" => Some(AttributeType::AnyUri),
            _ => None,
        }
    }

    /// Converts `value` into the representation stored for this type.
    ///
    /// Integers widen to floats for `double`/`float`. Returns the value
    /// unchanged in `Err` when it cannot represent this type, including a
    /// liststring item that contains the `|` separator.
    pub fn coerce(self, value: Value) -> Result<Value, Value> {
        match (self, value) {
            (AttributeType::Long, v @ Value::Integer(_)) => Ok(v),
            (AttributeType::Double | AttributeType::Float, Value::Integer(n)) => {
                Ok(Value::Float(n as f64))
            }
            (AttributeType::Double | AttributeType::Float, v @ Value::Float(_)) => Ok(v),
            (AttributeType::Boolean, v @ Value::Boolean(_)) => Ok(v),
            (AttributeType::String | AttributeType::AnyUri, v @ Value::String(_)) => Ok(v),
            (AttributeType::ListString, Value::ListString(items))
                if !items.iter().any(|item| item.contains(LIST_SEPARATOR)) =>
            {
                Ok(Value::ListString(items))
            }
            (_, v) => Err(v),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed attribute value.
///
/// `Display` renders the lexical form written to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    /// Rendered `|`-separated. Items must not contain `|`.
    ListString(Vec<String>),
}

impl Value {
    /// Short description of the value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::ListString(items) if items.iter().any(|i| i.contains(LIST_SEPARATOR)) => {
                "liststring with '|' in an item"
            }
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::ListString(_) => "liststring",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) if x.is_nan() => f.write_str("NaN"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "INF" } else { "-INF" })
            }
            Value::Float(x) => {
                let abs = x.abs();
                if abs != 0.0 && !(1e-4..1e21).contains(&abs) {
                    write!(f, "{:e}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
            Value::ListString(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(LIST_SEPARATOR)?;
                    }
                    f.write_str(item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::ListString(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::ListString(v.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_roundtrip() {
        for t in [
            AttributeType::Long,
            AttributeType::Double,
            AttributeType::Float,
            AttributeType::Boolean,
            AttributeType::ListString,
            AttributeType::String,
            AttributeType::AnyUri,
        ] {
            assert_eq!(AttributeType::from_name(t.as_str()), Some(t));
        }
        assert_eq!(AttributeType::from_name("integer"), None);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Float(1.0).to_string(), "1");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(0.1).to_string(), "0.1");
        assert_eq!(Value::Float(-0.0).to_string(), "-0");
        assert_eq!(Value::Float(1e300).to_string(), "1e300");
        assert_eq!(Value::Float(-2.5e300).to_string(), "-2.5e300");
        assert_eq!(Value::Float(1e-10).to_string(), "1e-10");
        assert_eq!(Value::Float(1e-4).to_string(), "0.0001");
        assert_eq!(Value::Float(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Float(1e21).to_string(), "1e21");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "INF");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-INF");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::from("verbatim <text>").to_string(), "verbatim <text>");
        assert_eq!(Value::from(vec!["a", "b", "c"]).to_string(), "a|b|c");
        assert_eq!(Value::ListString(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_coerce_widens_integers_to_floats() {
        assert_eq!(AttributeType::Float.coerce(Value::Integer(2)), Ok(Value::Float(2.0)));
        assert_eq!(AttributeType::Double.coerce(Value::Integer(-3)), Ok(Value::Float(-3.0)));
        assert_eq!(AttributeType::Long.coerce(Value::Integer(7)), Ok(Value::Integer(7)));
    }

    #[test]
    fn test_coerce_rejects_mismatches() {
        assert!(AttributeType::Long.coerce(Value::Float(1.5)).is_err());
        assert!(AttributeType::Boolean.coerce(Value::from("true")).is_err());
        assert!(AttributeType::String.coerce(Value::Integer(1)).is_err());
        assert!(AttributeType::ListString.coerce(Value::from("a")).is_err());
        assert_eq!(
            AttributeType::ListString.coerce(Value::from(vec!["a|b", "c"])),
            Err(Value::from(vec!["a|b", "c"]))
        );
        assert_eq!(
            AttributeType::AnyUri.coerce(Value::from("https://gephi.org")),
            Ok(Value::from("https://gephi.org"))
        );
    }
}
