use crate::date::Date;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Value
/// Dynamic field value as handed over by an external frontmatter or JSON
/// parser. Untyped records are maps of these; the schema layer decides
/// which shapes each field accepts.
///
/// Serialization is untagged, so a record round-trips as a plain JSON
/// object. Strings deserialize as `Text` even when date-shaped; coercing
/// text into a `Date` is a schema decision, not a parsing one.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(Date),
}

impl Value {
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Null => ValueTag::Null,
            Self::Bool(_) => ValueTag::Bool,
            Self::Int(_) => ValueTag::Int,
            Self::Float(_) => ValueTag::Float,
            Self::Text(_) => ValueTag::Text,
            Self::Date(_) => ValueTag::Date,
        }
    }

    /// Convert a scalar JSON value. Arrays and objects have no scalar
    /// shape and return `None`.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

///
/// ValueTag
/// Shape taxonomy used in validation messages.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ValueTag {
    #[display("bool")]
    Bool,
    #[display("date")]
    Date,
    #[display("float")]
    Float,
    #[display("int")]
    Int,
    #[display("null")]
    Null,
    #[display("text")]
    Text,
}

///
/// TESTS
///
