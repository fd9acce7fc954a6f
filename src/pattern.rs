//! Delimited regular expression literals.
//!
//! `$regex` operands are written as `/pattern/flags`. The pattern runs from
//! the first `/` to the last one, so it may itself contain slashes. Flags
//! are translated onto [`regex::RegexBuilder`]:
//!
//! | Flag | Effect |
//! |------|--------|
//! | `i`  | case-insensitive |
//! | `m`  | `^`/`$` match at line boundaries |
//! | `s`  | `.` matches newline |
//! | `g`  | accepted, no effect on a match test |

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Reasons a regex literal cannot be turned into a [`Regex`].
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("regex literal must be written as /pattern/flags")]
    MissingDelimiter,

    #[error("regex literal has an empty pattern")]
    EmptyPattern,

    #[error("unknown regex flag '{0}'")]
    UnknownFlag(char),

    #[error("invalid regex pattern: {0}")]
    Invalid(#[from] regex::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Flags {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
}

impl Flags {
    fn parse(letters: &str) -> Result<Self, PatternError> {
        let mut flags = Flags::default();
        for c in letters.chars() {
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'g' => {}
                other => return Err(PatternError::UnknownFlag(other)),
            }
        }
        Ok(flags)
    }
}

/// Split `/pattern/flags` into its pattern and flag letters.
fn split_literal(literal: &str) -> Result<(&str, &str), PatternError> {
    let body = literal
        .strip_prefix('/')
        .ok_or(PatternError::MissingDelimiter)?;
    let close = body.rfind('/').ok_or(PatternError::MissingDelimiter)?;
    let (pattern, flags) = (&body[..close], &body[close + 1..]);
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }
    Ok((pattern, flags))
}

/// Compile a `/pattern/flags` literal.
///
/// ```
/// use sift_query::pattern::compile;
///
/// let re = compile("/^hello/i").unwrap();
/// assert!(re.is_match("HELLO world"));
/// assert!(compile("hello").is_err());
/// ```
pub fn compile(literal: &str) -> Result<Regex, PatternError> {
    let (pattern, letters) = split_literal(literal)?;
    let flags = Flags::parse(letters)?;
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .build()?;
    Ok(regex)
}
