//! Operator documentation for the sift CLI

use super::CliError;
use crate::Operator;

/// Get the operator overview (one line per operator)
pub fn get_operators_overview() -> &'static str {
    r#"SIFT OPERATORS

A query is a JSON value. Objects are conjunctions: every key must match.
Keys starting with $ are operators; any other key names a document field
whose value the nested query is matched against. Arrays are disjunctions:
at least one element must match. Any other value must equal the document.

  $eq       Deep equality with the operand
  $ne       Not deep-equal to the operand
  $lt       Numerically less than
  $lte      Equal, or numerically less than
  $gt       Numerically greater than
  $gte      Equal, or numerically greater than
  $in       Equal to some element of the operand array
  $nin      Equal to no element of the operand array
  $all      Document array contains every operand element
  $and      Every sub-query in the operand array matches
  $or       At least one sub-query in the operand array matches
  $nor      No sub-query in the operand array matches
  $not      The operand query does not match
  $regex    String matches a /pattern/flags literal
  $size     Array has exactly the given length

Run 'sift op <name>' for details, e.g. 'sift op regex'.
"#
}

/// Get documentation for a single operator, with or without its `$`
pub fn get_operator_doc(name: &str) -> Result<&'static str, CliError> {
    let key = if name.starts_with('$') {
        name.to_lowercase()
    } else {
        format!("${}", name.to_lowercase())
    };
    let op = Operator::from_name(&key).ok_or_else(|| CliError::UnknownOperator(name.to_string()))?;
    Ok(match op {
        Operator::Eq | Operator::Ne => EQUALITY_DOC,
        Operator::Lt | Operator::Lte | Operator::Gt | Operator::Gte => ORDERING_DOC,
        Operator::In | Operator::Nin | Operator::All => MEMBERSHIP_DOC,
        Operator::And | Operator::Or | Operator::Nor | Operator::Not => LOGICAL_DOC,
        Operator::Regex => REGEX_DOC,
        Operator::Size => SIZE_DOC,
    })
}

const EQUALITY_DOC: &str = r#"EQUALITY - $eq, $ne

  {"field": {"$eq": VALUE}}
    Matches when the field deep-equals VALUE. Same as {"field": VALUE}.

  {"field": {"$ne": VALUE}}
    Matches when the field does not deep-equal VALUE.

  Rules:
    - Arrays compare element by element, in order
    - Objects compare by keys and values, key order ignored
    - 1 and 1.0 are equal; "1" and 1 are not
"#;

const ORDERING_DOC: &str = r#"ORDERING - $lt, $lte, $gt, $gte

  {"age": {"$gte": 18, "$lt": 65}}

  Rules:
    - Both sides must be numbers, otherwise the comparison is false
    - Strings are never ordered: {"$lt": "b"} never matches "a"
    - $lte and $gte also match when the values are deep-equal
"#;

const MEMBERSHIP_DOC: &str = r#"MEMBERSHIP - $in, $nin, $all

  {"status": {"$in": ["open", "pending"]}}
    Matches when the field equals one of the listed values.

  {"status": {"$nin": ["closed"]}}
    Matches when the field equals none of them.

  {"tags": {"$all": ["red", "blue"]}}
    Matches when the field is an array containing every listed value.
    Duplicates in the operand only need to appear once.

  Rules:
    - The operand must be an array, otherwise $in/$all are false
    - $all also requires the document value to be an array
"#;

const LOGICAL_DOC: &str = r#"LOGICAL - $and, $or, $nor, $not

  {"$and": [Q1, Q2]}    every query matches the same document
  {"$or":  [Q1, Q2]}    at least one query matches
  {"$nor": [Q1, Q2]}    no query matches
  {"field": {"$not": Q}}  Q does not match the field value

  Rules:
    - $and/$or/$nor need an array operand, otherwise $and/$or are false
    - {"$and": []} matches everything, {"$or": []} matches nothing
    - An empty query object {} never matches
"#;

const REGEX_DOC: &str = r#"REGEX - $regex

  {"name": {"$regex": "/^al/i"}}

  The operand is written /pattern/flags and searches for a match anywhere in
  the string.

  Flags:
    i    case-insensitive
    m    ^ and $ match at line boundaries
    s    . matches newline
    g    accepted and ignored

  Rules:
    - Both the field and the operand must be strings
    - A missing delimiter, unknown flag or invalid pattern never matches
"#;

const SIZE_DOC: &str = r#"SIZE - $size

  {"items": {"$size": 3}}

  Rules:
    - The field must be an array and the operand an integer
    - Strings are not arrays: {"$size": 2} does not match "ab"
"#;
