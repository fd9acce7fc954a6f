use serde_json::json;
use sift_query::cli::{execute_filter, execute_test, CliError, FilterOptions, TestOutcome};

fn options(query: &str, input: Option<&str>) -> FilterOptions {
    FilterOptions {
        query: query.to_string(),
        input: input.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_filter_returns_json_array() {
    let out = execute_filter(&options(
        r#"{"foo": "bar"}"#,
        Some(r#"[{"foo": "bar"}, {"foo": "baz"}, {"baz": "qux"}]"#),
    ))
    .unwrap();
    assert_eq!(out, json!([{"foo": "bar"}]));
}

#[test]
fn test_filter_empty_result_is_empty_array() {
    let out = execute_filter(&options(r#"{"a": 2}"#, Some(r#"[{"a": 1}]"#))).unwrap();
    assert_eq!(out, json!([]));
}

#[test]
fn test_filter_respects_max_depth() {
    let mut opts = options(r#"{"a": {"b": 1}}"#, Some(r#"[{"a": {"b": 1}}]"#));
    assert_eq!(execute_filter(&opts).unwrap(), json!([{"a": {"b": 1}}]));

    opts.max_depth = Some(1);
    assert_eq!(execute_filter(&opts).unwrap(), json!([]));
}

#[test]
fn test_missing_input() {
    assert!(matches!(
        execute_filter(&options("{}", None)),
        Err(CliError::NoInput)
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        execute_filter(&options("{", Some("[]"))),
        Err(CliError::Json(_))
    ));
    assert!(matches!(
        execute_test(&options("{}", Some("nope"))),
        Err(CliError::Json(_))
    ));
}

#[test]
fn test_single_document() {
    let matched = execute_test(&options(r#"{"n": {"$gt": 1}}"#, Some(r#"{"n": 2}"#))).unwrap();
    assert_eq!(matched, TestOutcome::Match);
    assert_eq!(matched.as_str(), "true");

    let missed = execute_test(&options(r#"{"n": {"$gt": 1}}"#, Some(r#"{"n": 0}"#))).unwrap();
    assert_eq!(missed, TestOutcome::NoMatch);
    assert_eq!(missed.as_str(), "false");
}
