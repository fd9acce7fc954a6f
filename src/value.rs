use std::{borrow::Cow, collections::HashMap};

use thiserror::Error;

/// A decoded, dynamically-typed value.
///
/// Documents, queries and operator operands all share this one type: a query
/// is just nested objects, arrays and scalars interpreted structurally by the
/// evaluator.
///
/// # Numbers
///
/// Integers and floats are kept apart so that operators such as `$size` can
/// demand an integer, but they form a single numeric kind for comparison:
/// `Integer(1)` and `Float(1.0)` are deep-equal.
///
/// # Examples
///
/// ```
/// use sift_query::Value;
/// use std::collections::HashMap;
///
/// let mut obj = HashMap::new();
/// obj.insert("tags".to_string(), Value::Array(vec![Value::String("a".into())]));
/// let doc = Value::Object(obj);
///
/// assert!(doc.is_map());
/// assert!(!doc.is_array_like());
/// assert!(Value::Integer(3).deep_eq(&Value::Float(3.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Object with unique string keys; iteration order carries no meaning
    Object(HashMap<String, Value>),
}

/// Failure to view a value as a particular shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// The value is not an object.
    #[error("expected an object, got {0}")]
    NotAMap(&'static str),
}

impl Value {
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Strings are not array-like; only `Array` is.
    pub fn is_array_like(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_number_like(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    pub fn is_int_like(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Widen either number tag to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// View the value as a string-keyed map.
    pub fn as_map(&self) -> Result<&HashMap<String, Value>, CoerceError> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(CoerceError::NotAMap(other.type_name())),
        }
    }

    /// View the value as a sequence.
    ///
    /// Arrays yield their elements; every other value is promoted to a
    /// one-element sequence holding itself. This never fails.
    ///
    /// ```
    /// use sift_query::Value;
    ///
    /// let scalar = Value::Integer(7);
    /// assert_eq!(scalar.as_sequence().as_ref(), &[Value::Integer(7)]);
    /// ```
    pub fn as_sequence(&self) -> Cow<'_, [Value]> {
        match self {
            Value::Array(arr) => Cow::Borrowed(arr.as_slice()),
            other => Cow::Owned(vec![other.clone()]),
        }
    }

    /// Deep structural equality.
    ///
    /// Arrays compare element-wise in order, objects compare by key set and
    /// per-key value. Integer and float compare by numeric value; any other
    /// pairing of different variants is unequal.
    pub fn deep_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Boolean(a), Boolean(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Integer(_) | Float(_), Integer(_) | Float(_)) => self.as_float() == other.as_float(),
            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.deep_eq(y))
            }
            (Object(a), Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|w| v.deep_eq(w)))
            }
            _ => false,
        }
    }

    /// Human-readable type name, used in errors and log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}
