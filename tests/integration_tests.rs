use serde_json::json;
use sift_query::{compare, sift, sift_json, SiftOptions, Sifter, Value};

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn people() -> Value {
    v(json!([
        {"name": "Alice", "age": 31, "tags": ["admin", "dev"], "address": {"city": "Oslo"}},
        {"name": "bob", "age": 17, "tags": ["dev"], "address": {"city": "Bergen"}},
        {"name": "Carol", "age": 45.5, "tags": [], "address": {"city": "Oslo"}},
        {"name": "dave", "tags": ["ops", "dev", "admin"]},
    ]))
}

fn names(matches: &[Value]) -> Vec<String> {
    matches
        .iter()
        .map(|m| match m.as_map().unwrap().get("name") {
            Some(Value::String(s)) => s.clone(),
            other => panic!("unexpected name {:?}", other),
        })
        .collect()
}

#[test]
fn test_basic_equality() {
    let docs = v(json!([{"foo": "bar"}, {"foo": "baz"}, {"baz": "qux"}]));
    let result = sift(&v(json!({"foo": "bar"})), &docs);
    assert_eq!(result, vec![v(json!({"foo": "bar"}))]);

    let result = sift(&v(json!({"foo": {"$eq": "bar"}})), &docs);
    assert_eq!(result, vec![v(json!({"foo": "bar"}))]);
}

#[test]
fn test_numeric_range() {
    let result = sift(&v(json!({"age": {"$gte": 18, "$lt": 40}})), &people());
    assert_eq!(names(&result), vec!["Alice"]);
}

#[test]
fn test_float_and_integer_compare() {
    let result = sift(&v(json!({"age": {"$gt": 45}})), &people());
    assert_eq!(names(&result), vec!["Carol"]);
}

#[test]
fn test_missing_field_never_matches() {
    // dave has no age, so even $ne-style negations on the field fail
    let result = sift(&v(json!({"age": {"$ne": 0}})), &people());
    assert_eq!(names(&result), vec!["Alice", "bob", "Carol"]);
}

#[test]
fn test_nested_field() {
    let result = sift(&v(json!({"address": {"city": "Oslo"}})), &people());
    assert_eq!(names(&result), vec!["Alice", "Carol"]);
}

#[test]
fn test_all_and_size() {
    let result = sift(&v(json!({"tags": {"$all": ["dev", "admin"]}})), &people());
    assert_eq!(names(&result), vec!["Alice", "dave"]);

    let result = sift(&v(json!({"tags": {"$size": 0}})), &people());
    assert_eq!(names(&result), vec!["Carol"]);
}

#[test]
fn test_regex_case_insensitive() {
    let result = sift(&v(json!({"name": {"$regex": "/^[a-c]/i"}})), &people());
    assert_eq!(names(&result), vec!["Alice", "bob", "Carol"]);

    let result = sift(&v(json!({"name": {"$regex": "/^[a-c]/"}})), &people());
    assert_eq!(names(&result), vec!["bob"]);
}

#[test]
fn test_or_of_fields() {
    let query = v(json!({"$or": [{"age": {"$lt": 18}}, {"tags": {"$size": 3}}]}));
    assert_eq!(names(&sift(&query, &people())), vec!["bob", "dave"]);
}

#[test]
fn test_array_query_is_or() {
    let query = v(json!([{"name": "bob"}, {"name": "dave"}]));
    assert_eq!(names(&sift(&query, &people())), vec!["bob", "dave"]);
}

#[test]
fn test_nor_and_not() {
    let query = v(json!({"$nor": [{"name": "Alice"}, {"name": "bob"}]}));
    assert_eq!(names(&sift(&query, &people())), vec!["Carol", "dave"]);

    let query = v(json!({"age": {"$not": {"$gte": 18}}}));
    assert_eq!(names(&sift(&query, &people())), vec!["bob"]);
}

#[test]
fn test_in_and_nin() {
    let query = v(json!({"name": {"$in": ["bob", "Carol", "zed"]}}));
    assert_eq!(names(&sift(&query, &people())), vec!["bob", "Carol"]);

    let query = v(json!({"name": {"$nin": ["bob", "Carol"]}}));
    assert_eq!(names(&sift(&query, &people())), vec!["Alice", "dave"]);
}

#[test]
fn test_scalar_documents() {
    let docs = v(json!([1, 5, "5", 10, null]));
    assert_eq!(sift(&v(json!({"$gt": 4})), &docs), vec![v(json!(5)), v(json!(10))]);
    assert_eq!(sift(&v(json!(5)), &docs), vec![v(json!(5))]);
}

#[test]
fn test_single_document_input() {
    let doc = v(json!({"a": 1}));
    assert_eq!(sift(&v(json!({"a": 1})), &doc), vec![doc.clone()]);
}

#[test]
fn test_nothing_matches_is_empty() {
    assert!(sift(&v(json!({"name": "nobody"})), &people()).is_empty());
    assert!(sift(&v(json!({"a": 1})), &v(json!([]))).is_empty());
}

#[test]
fn test_sift_json_decodes_both_inputs() {
    let result = sift_json(r#"{"n": {"$lte": 2}}"#, r#"[{"n": 1}, {"n": 2}, {"n": 3}]"#).unwrap();
    assert_eq!(result, vec![v(json!({"n": 1})), v(json!({"n": 2}))]);

    assert!(sift_json("{", "[]").is_err());
    assert!(sift_json("{}", "[").is_err());
}

#[test]
fn test_depth_limited_sifter() {
    let deep = v(json!({"a": {"b": {"c": {"d": 1}}}}));
    let docs = v(json!([{"a": {"b": {"c": {"d": 1}}}}]));

    assert_eq!(sift(&deep, &docs).len(), 1);

    let shallow = Sifter::new(SiftOptions::with_max_depth(2));
    assert!(shallow.sift(&deep, &docs).is_empty());
    assert!(shallow.compare(&v(json!({"a": 1})), &v(json!({"a": 1}))));
}

#[test]
fn test_compare_does_not_mutate_inputs() {
    let query = v(json!({"tags": {"$all": ["dev"]}}));
    let doc = v(json!({"tags": ["dev", "ops"]}));
    let (q_before, d_before) = (query.clone(), doc.clone());
    assert!(compare(&query, &doc));
    assert_eq!(query, q_before);
    assert_eq!(doc, d_before);
}
