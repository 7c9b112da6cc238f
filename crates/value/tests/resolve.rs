//! Integration tests for dotted-path resolution

mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use strata_value::{Path, Value, ValueError, get, resolve};

#[test]
fn test_multi_level_path() {
    common::init_tracing();
    let doc = common::person();

    assert_eq!(
        get(&doc, "contacts.address.geo_location.0"),
        Value::from("51.529011463529635")
    );
    assert_eq!(
        resolve(&doc, "contacts.address.geo_location.1", Value::Null),
        Value::from("-0.1098365614770662")
    );
}

#[test]
fn test_resolves_whole_subtree() {
    let doc = common::person();
    let address = get(&doc, "contacts.address");
    assert_eq!(address.get_path("post_code"), Value::from("SW1A"));
    assert_eq!(
        address.to_json(),
        json!({
            "post_code": "SW1A",
            "geo_location": ["51.529011463529635", "-0.1098365614770662"]
        })
    );
}

#[rstest]
#[case::missing_first_segment("nickname", "X")]
#[case::missing_nested_key("contacts.mobile", "X")]
#[case::sequence_index_out_of_range("contacts.address.geo_location.5", "X")]
#[case::sequence_index_not_numeric("contacts.address.geo_location.first", "X")]
#[case::negative_index("contacts.address.geo_location.-1", "X")]
#[case::text_offset_out_of_range("name.4", "X")]
#[case::text_offset_not_numeric("name.first", "X")]
#[case::scalar_has_no_children("age.0", "X")]
#[case::scalar_has_no_keys("contacts.home.area", "X")]
#[case::empty_path("", "X")]
#[case::trailing_dot("contacts.", "X")]
fn test_miss_returns_fallback(#[case] path: &str, #[case] fallback: &str) {
    common::init_tracing();
    let doc = common::person();
    assert_eq!(resolve(&doc, path, fallback), Value::from(fallback));
}

#[rstest]
#[case("name.0", "J")]
#[case("name.3", "n")]
#[case("contacts.email.7", "@")]
#[case("contacts.address.post_code.2", "1")]
fn test_text_offset(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(get(&common::person(), path), Value::from(expected));
}

#[test]
fn test_out_of_range_sequence_index() {
    let doc = Value::from(json!({"a": [1, 2]}));
    assert_eq!(resolve(&doc, "a.5", "X"), Value::from("X"));
    assert_eq!(resolve(&doc, "a.1", "X"), Value::from(2));
}

#[test]
fn test_text_offset_example() {
    let doc = Value::from(json!({"s": "hello"}));
    assert_eq!(resolve(&doc, "s.1", ""), Value::from("e"));
}

#[test]
fn test_null_root_short_circuits() {
    assert_eq!(resolve(&Value::Null, "anything.at.all", 7), Value::from(7));
    assert_eq!(resolve(&Value::Null, "", 7), Value::from(7));
    assert_eq!(get(&Value::Null, "a"), Value::Null);
}

#[test]
fn test_null_leaf_is_a_value_not_a_miss() {
    let doc = Value::from(json!({"a": null}));
    assert_eq!(resolve(&doc, "a", "fb"), Value::Null);
    assert_eq!(resolve(&doc, "a.b", "fb"), Value::from("fb"));
}

#[test]
fn test_two_argument_form_uses_null_fallback() {
    let doc = common::person();
    assert_eq!(get(&doc, "contacts.fax"), Value::Null);
    assert_eq!(doc.get_path("contacts.fax"), Value::Null);
}

#[test]
fn test_sequence_root() {
    let doc = Value::from(json!([{"id": 1}, {"id": 2}]));
    assert_eq!(get(&doc, "1.id"), Value::from(2));
    assert_eq!(resolve(&doc, "id", 0), Value::from(0));
}

#[test]
fn test_numeric_mapping_keys_are_literal() {
    let doc = Value::from(json!({"0": "zero", "items": {"1": "one"}}));
    assert_eq!(get(&doc, "0"), Value::from("zero"));
    assert_eq!(get(&doc, "items.1"), Value::from("one"));
}

#[test]
fn test_parsed_path_is_reusable() {
    let path = Path::parse("contacts.address.post_code");
    let a = common::person();
    let b = common::person_update();
    assert_eq!(a.resolve_path(&path, Value::Null), Value::from("SW1A"));
    assert_eq!(b.resolve_path(&path, Value::Null), Value::from("SW3"));
}

#[test]
fn test_lookup_explains_miss() {
    let doc = common::person();
    assert_eq!(
        doc.lookup(&Path::parse("contacts.address.geo_location.2")),
        Err(ValueError::index_out_of_bounds(2, 2))
    );
    assert_eq!(
        doc.lookup(&Path::parse("age.years")),
        Err(ValueError::not_traversable("integer", "years"))
    );
    assert!(doc.lookup(&Path::parse("contacts.home")).is_ok());
}

#[test]
fn test_resolve_leaves_root_unchanged() {
    let doc = common::person();
    let snapshot = doc.to_json();

    let _ = get(&doc, "contacts.address.geo_location.0");
    let _ = resolve(&doc, "contacts.nothing.here", "x");
    let _ = get(&doc, "name.2");

    assert_eq!(doc.to_json(), snapshot);
}
