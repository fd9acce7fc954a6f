//! MongoDB-style queries over in-memory, dynamically-typed documents.
//!
//! A query is an ordinary [`Value`]: objects are conjunctions of conditions,
//! `$`-prefixed keys are [operators](Operator), other keys look up document
//! fields, arrays are disjunctions and anything else must equal the document.
//! Evaluation never fails; anything malformed or type-mismatched is simply a
//! non-match.
//!
//! ```
//! use sift_query::{sift, Value};
//!
//! let query = Value::from_json_str(r#"{"foo": {"$eq": "bar"}}"#).unwrap();
//! let docs = Value::from_json_str(r#"[{"foo": "bar"}, {"foo": "baz"}, {"baz": "qux"}]"#).unwrap();
//!
//! let matches = sift(&query, &docs);
//! assert_eq!(matches.len(), 1);
//! ```
//!
//! A `$`-prefixed key always names an operator when one of that name exists,
//! so a document field literally called `$eq` cannot be queried by name.

pub mod cli;
pub mod convert;
pub mod evaluator;
pub mod operators;
pub mod pattern;
pub mod value;

pub use convert::sift_json;
pub use evaluator::{compare, sift, SiftOptions, Sifter};
pub use operators::Operator;
pub use pattern::PatternError;
pub use value::{CoerceError, Value};
