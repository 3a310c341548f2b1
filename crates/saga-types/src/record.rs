use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RecordError
/// Boundary errors raised while ingesting external parser output, before
/// any schema validation runs.
///

#[derive(Debug, ThisError)]
pub enum RecordError {
    #[error("record input must be a json object, got {0}")]
    NotAnObject(&'static str),
}

///
/// Record
/// Ordered field-name → value map: the untyped record a content loader
/// hands to the schema layer.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Ingest a JSON object produced by an external parser.
    ///
    /// Non-scalar members (arrays, nested objects) are skipped: no declared
    /// field has such a shape, so they can only ever be unknown fields.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, RecordError> {
        let serde_json::Value::Object(map) = json else {
            return Err(RecordError::NotAnObject(json_kind(json)));
        };

        let mut record = Self::new();
        for (field, value) in map {
            if let Some(value) = Value::from_json(value) {
                record.insert(field.clone(), value);
            }
        }

        Ok(record)
    }
}

const fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Build a [`Record`] from `field => value` pairs.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(record.insert($field, $value);)+
        record
    }};
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn record_macro_builds_in_any_order() {
        let a = record! {
            "name" => "main-story",
            "number" => 1,
        };
        let b = Record::new().with("number", 1).with("name", "main-story");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn get_and_contains_see_inserted_fields() {
        let record = record! { "name" => "main-story" };
        assert!(record.contains("name"));
        assert_eq!(record.get("name"), Some(&Value::from("main-story")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn from_json_accepts_objects_only() {
        let json = serde_json::json!({"name": "main-story", "number": 3});
        let record = Record::from_json(&json).unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("main-story")));
        assert_eq!(record.get("number"), Some(&Value::Int(3)));

        let err = Record::from_json(&serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "record input must be a json object, got array"
        );
    }

    #[test]
    fn from_json_skips_non_scalar_members() {
        let json = serde_json::json!({
            "name": "main-story",
            "tags": ["a", "b"],
            "nested": {"x": 1},
        });
        let record = Record::from_json(&json).unwrap();
        assert_eq!(record.len(), 1);
        assert!(!record.contains("tags"));
        assert!(!record.contains("nested"));
    }
}
