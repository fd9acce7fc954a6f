use crate::{operators::Operator, value::Value};

/// Evaluation settings for a [`Sifter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiftOptions {
    /// Maximum query nesting depth. `None` recurses as deep as the query
    /// goes; `Some(n)` makes anything nested deeper than `n` levels fail.
    pub max_depth: Option<usize>,
}

impl SiftOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        SiftOptions {
            max_depth: Some(max_depth),
        }
    }
}

/// The query evaluator.
///
/// Walks a query value against a document value. Holds no state besides
/// its options, so one `Sifter` can be reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct Sifter {
    options: SiftOptions,
}

impl Sifter {
    /// Creates an evaluator with the given options.
    pub fn new(options: SiftOptions) -> Self {
        Sifter { options }
    }

    pub fn options(&self) -> SiftOptions {
        self.options
    }

    /// Tests a single document against a query.
    ///
    /// Never fails: malformed or type-mismatched comparisons are simply
    /// `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_query::{Sifter, Value};
    ///
    /// let query = Value::from_json_str(r#"{"age": {"$gte": 18}}"#).unwrap();
    /// let adult = Value::from_json_str(r#"{"age": 30}"#).unwrap();
    /// let child = Value::from_json_str(r#"{"age": 9}"#).unwrap();
    ///
    /// let sifter = Sifter::default();
    /// assert!(sifter.compare(&query, &adult));
    /// assert!(!sifter.compare(&query, &child));
    /// ```
    pub fn compare(&self, query: &Value, document: &Value) -> bool {
        self.compare_at(query, document, 0)
    }

    /// Filters a collection, keeping the documents that match in their
    /// original order.
    ///
    /// A non-array `documents` is treated as a one-element collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_query::{Sifter, Value};
    ///
    /// let query = Value::from_json_str(r#"{"foo": "bar"}"#).unwrap();
    /// let docs = Value::from_json_str(
    ///     r#"[{"foo": "bar"}, {"foo": "baz"}, {"baz": "qux"}]"#,
    /// ).unwrap();
    ///
    /// let matches = Sifter::default().sift(&query, &docs);
    /// assert_eq!(matches, vec![Value::from_json_str(r#"{"foo": "bar"}"#).unwrap()]);
    /// ```
    pub fn sift(&self, query: &Value, documents: &Value) -> Vec<Value> {
        let documents = documents.as_sequence();
        let matches: Vec<Value> = documents
            .iter()
            .filter(|doc| self.compare(query, doc))
            .cloned()
            .collect();
        log::debug!(
            "sift matched {} of {} documents",
            matches.len(),
            documents.len()
        );
        matches
    }

    pub(crate) fn compare_at(&self, query: &Value, document: &Value, depth: usize) -> bool {
        if let Some(max) = self.options.max_depth
            && depth > max
        {
            log::debug!("query nesting exceeds max depth {max}, treating as no match");
            return false;
        }

        match query {
            // An array query is an implicit OR of its elements.
            Value::Array(alternatives) => alternatives
                .iter()
                .any(|q| self.compare_at(q, document, depth + 1)),
            Value::Object(conditions) => {
                // An empty condition set never matches.
                if conditions.is_empty() {
                    return false;
                }
                conditions
                    .iter()
                    .all(|(key, operand)| self.condition(key, operand, document, depth))
            }
            literal => literal.deep_eq(document),
        }
    }

    /// One key of a query object: either an operator or a field name.
    fn condition(&self, key: &str, operand: &Value, document: &Value, depth: usize) -> bool {
        if let Some(op) = Operator::from_name(key) {
            log::trace!("dispatch {op} against {}", document.type_name());
            return op.apply(self, document, operand, depth);
        }

        let Ok(fields) = document.as_map() else {
            log::trace!("field {key:?} looked up on {}", document.type_name());
            return false;
        };
        match fields.get(key) {
            Some(field) => self.compare_at(operand, field, depth + 1),
            None => {
                log::trace!("field {key:?} missing from document");
                false
            }
        }
    }
}

/// Tests a single document against a query with default options.
///
/// ```
/// use sift_query::{compare, Value};
///
/// let query = Value::from_json_str(r#"{"$size": 2}"#).unwrap();
/// assert!(compare(&query, &Value::from_json_str("[1, 2]").unwrap()));
/// assert!(!compare(&query, &Value::from("ab")));
/// ```
pub fn compare(query: &Value, document: &Value) -> bool {
    Sifter::default().compare(query, document)
}

/// Filters `documents` by `query` with default options.
pub fn sift(query: &Value, documents: &Value) -> Vec<Value> {
    Sifter::default().sift(query, documents)
}
