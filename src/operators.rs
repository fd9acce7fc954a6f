//! The fixed set of query operators.
//!
//! Every operator is a predicate over `(document value, operand)` that never
//! fails: a type mismatch or malformed operand yields `false`, so the
//! negating operators (`$ne`, `$nin`, `$nor`, `$not`) yield `true` on the
//! same input.

use crate::{evaluator::Sifter, pattern, value::Value};

/// A reserved `$`-prefixed query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Equality
    /// Deep structural equality (`$eq`)
    Eq,
    /// Negation of `$eq` (`$ne`)
    Ne,

    // Ordering
    /// Numeric less than (`$lt`)
    Lt,
    /// Equal or numeric less than (`$lte`)
    Lte,
    /// Numeric greater than (`$gt`)
    Gt,
    /// Equal or numeric greater than (`$gte`)
    Gte,

    // Membership
    /// Document value equals some operand element (`$in`)
    In,
    /// Negation of `$in` (`$nin`)
    Nin,
    /// Every operand element exists in the document array (`$all`)
    All,

    // Logical
    /// Every sub-query matches (`$and`)
    And,
    /// At least one sub-query matches (`$or`)
    Or,
    /// Negation of `$or` (`$nor`)
    Nor,
    /// Negation of the wrapped query (`$not`)
    Not,

    // Shape
    /// String matches a `/pattern/flags` literal (`$regex`)
    Regex,
    /// Array has exactly the given length (`$size`)
    Size,
}

impl Operator {
    /// Every operator, in documentation order.
    pub const ALL: [Operator; 15] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::In,
        Operator::Nin,
        Operator::All,
        Operator::And,
        Operator::Or,
        Operator::Nor,
        Operator::Not,
        Operator::Regex,
        Operator::Size,
    ];

    /// Look up an operator by its query key, including the `$`.
    ///
    /// Unknown `$` keys are not operators; the evaluator treats them as
    /// ordinary field names.
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name {
            "$eq" => Operator::Eq,
            "$ne" => Operator::Ne,
            "$lt" => Operator::Lt,
            "$lte" => Operator::Lte,
            "$gt" => Operator::Gt,
            "$gte" => Operator::Gte,
            "$in" => Operator::In,
            "$nin" => Operator::Nin,
            "$all" => Operator::All,
            "$and" => Operator::And,
            "$or" => Operator::Or,
            "$nor" => Operator::Nor,
            "$not" => Operator::Not,
            "$regex" => Operator::Regex,
            "$size" => Operator::Size,
            _ => return None,
        };
        Some(op)
    }

    /// The query key for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "$eq",
            Operator::Ne => "$ne",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::In => "$in",
            Operator::Nin => "$nin",
            Operator::All => "$all",
            Operator::And => "$and",
            Operator::Or => "$or",
            Operator::Nor => "$nor",
            Operator::Not => "$not",
            Operator::Regex => "$regex",
            Operator::Size => "$size",
        }
    }

    /// Returns `true` for operators whose operand is itself a query.
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            Operator::And | Operator::Or | Operator::Nor | Operator::Not
        )
    }

    /// Apply the operator to a document value.
    ///
    /// Logical operators evaluate their sub-queries through `sifter` at
    /// `depth + 1`.
    pub(crate) fn apply(
        self,
        sifter: &Sifter,
        document: &Value,
        operand: &Value,
        depth: usize,
    ) -> bool {
        match self {
            Operator::Eq => document.deep_eq(operand),
            Operator::Ne => !document.deep_eq(operand),
            Operator::Lt => lt(document, operand),
            Operator::Lte => lte(document, operand),
            Operator::Gt => gt(document, operand),
            Operator::Gte => gte(document, operand),
            Operator::In => is_in(document, operand),
            Operator::Nin => !is_in(document, operand),
            Operator::All => all(document, operand),
            Operator::And => and(sifter, document, operand, depth),
            Operator::Or => or(sifter, document, operand, depth),
            Operator::Nor => !or(sifter, document, operand, depth),
            Operator::Not => !sifter.compare_at(operand, document, depth + 1),
            Operator::Regex => regex(document, operand),
            Operator::Size => size(document, operand),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Both sides widened to `f64`; `None` unless both are numbers.
fn numeric_pair(left: &Value, right: &Value) -> Option<(f64, f64)> {
    Some((left.as_float()?, right.as_float()?))
}

pub fn lt(document: &Value, operand: &Value) -> bool {
    numeric_pair(document, operand).is_some_and(|(l, r)| l < r)
}

pub fn gt(document: &Value, operand: &Value) -> bool {
    numeric_pair(document, operand).is_some_and(|(l, r)| l > r)
}

pub fn lte(document: &Value, operand: &Value) -> bool {
    document.deep_eq(operand) || lt(document, operand)
}

pub fn gte(document: &Value, operand: &Value) -> bool {
    document.deep_eq(operand) || gt(document, operand)
}

/// `$in`: the operand must be an array containing the document value.
pub fn is_in(document: &Value, operand: &Value) -> bool {
    if !operand.is_array_like() {
        return false;
    }
    operand
        .as_sequence()
        .iter()
        .any(|candidate| document.deep_eq(candidate))
}

/// `$all`: existence, not count. `[1, 1]` is satisfied by `[1]`.
pub fn all(document: &Value, operand: &Value) -> bool {
    if !document.is_array_like() || !operand.is_array_like() {
        return false;
    }
    let haystack = document.as_sequence();
    operand
        .as_sequence()
        .iter()
        .all(|needle| haystack.iter().any(|item| item.deep_eq(needle)))
}

fn and(sifter: &Sifter, document: &Value, operand: &Value, depth: usize) -> bool {
    if !operand.is_array_like() {
        return false;
    }
    operand
        .as_sequence()
        .iter()
        .all(|query| sifter.compare_at(query, document, depth + 1))
}

fn or(sifter: &Sifter, document: &Value, operand: &Value, depth: usize) -> bool {
    if !operand.is_array_like() {
        return false;
    }
    operand
        .as_sequence()
        .iter()
        .any(|query| sifter.compare_at(query, document, depth + 1))
}

pub fn regex(document: &Value, operand: &Value) -> bool {
    let (Value::String(text), Value::String(literal)) = (document, operand) else {
        return false;
    };
    match pattern::compile(literal) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            log::debug!("$regex operand {literal:?} rejected: {e}");
            false
        }
    }
}

pub fn size(document: &Value, operand: &Value) -> bool {
    match (document, operand) {
        (Value::Array(items), Value::Integer(n)) => {
            usize::try_from(*n).is_ok_and(|n| n == items.len())
        }
        _ => false,
    }
}
