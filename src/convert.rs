//! Conversion between [`serde_json::Value`] and [`Value`].

use crate::{evaluator, value::Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // u64 beyond i64::MAX and every non-integer land here
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Decode a JSON text.
    ///
    /// ```
    /// use sift_query::Value;
    ///
    /// assert_eq!(Value::from_json_str("[1, 2.5]").unwrap(),
    ///            Value::Array(vec![Value::Integer(1), Value::Float(2.5)]));
    /// assert!(Value::from_json_str("{").is_err());
    /// ```
    pub fn from_json_str(s: &str) -> Result<Value, serde_json::Error> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Ok(Value::from(json))
    }
}

/// Decode a JSON query and JSON documents, then sift.
///
/// Only decoding can fail; the filtering itself never does.
///
/// ```
/// use sift_query::sift_json;
///
/// let matches = sift_json(r#"{"n": {"$in": [1, 3]}}"#, r#"[{"n": 1}, {"n": 2}, {"n": 3}]"#).unwrap();
/// assert_eq!(matches.len(), 2);
/// ```
pub fn sift_json(query: &str, documents: &str) -> Result<Vec<Value>, serde_json::Error> {
    let query = Value::from_json_str(query)?;
    let documents = Value::from_json_str(documents)?;
    Ok(evaluator::sift(&query, &documents))
}
