use jsontree_core::Value;

fn sample_dict() -> Value {
    Value::Dict(vec![
        ("a".to_string(), Value::Int(1)),
        ("b".to_string(), Value::List(vec![Value::Bool(true), Value::Null])),
    ])
}

// ============================================================================
// Tag predicates and accessors
// ============================================================================

#[test]
fn predicates_match_tags() {
    assert!(Value::Null.is_null());
    assert!(Value::Bool(true).is_bool());
    assert!(Value::Int(42).is_int());
    assert!(Value::Double(1.5).is_double());
    assert!(Value::String("x".to_string()).is_string());
    assert!(Value::List(vec![]).is_list());
    assert!(Value::Dict(vec![]).is_dict());
}

#[test]
fn accessors_return_payloads() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(42).as_int(), Some(42));
    assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
    assert_eq!(Value::String("x".to_string()).as_str(), Some("x"));
}

#[test]
fn accessors_refuse_other_tags() {
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(Value::Double(1.0).as_int(), None);
    assert_eq!(Value::Int(1).as_double(), None);
    assert_eq!(Value::Null.as_str(), None);
}

#[test]
fn get_looks_up_dict_keys() {
    let dict = sample_dict();
    assert_eq!(dict.get("a"), Some(&Value::Int(1)));
    assert_eq!(dict.get("missing"), None);
    assert_eq!(Value::Int(1).get("a"), None);
}

#[test]
fn get_index_looks_up_list_elements() {
    let dict = sample_dict();
    let list = dict.get("b").unwrap();
    assert_eq!(list.get_index(0), Some(&Value::Bool(true)));
    assert_eq!(list.get_index(1), Some(&Value::Null));
    assert_eq!(list.get_index(2), None);
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(false).type_name(), "bool");
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::Double(0.0).type_name(), "double");
    assert_eq!(Value::String(String::new()).type_name(), "string");
    assert_eq!(Value::List(vec![]).type_name(), "list");
    assert_eq!(Value::Dict(vec![]).type_name(), "dict");
}

// ============================================================================
// Construction and equality
// ============================================================================

#[test]
fn from_conversions_set_the_tag() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(42i32), Value::Int(42));
    assert_eq!(Value::from(1.5), Value::Double(1.5));
    assert_eq!(Value::from("x"), Value::String("x".to_string()));
    assert_eq!(Value::from("x".to_string()), Value::String("x".to_string()));
    assert_eq!(
        Value::from(vec![Value::Int(1)]),
        Value::List(vec![Value::Int(1)])
    );
    assert_eq!(
        Value::from(vec![("k".to_string(), Value::Int(1))]),
        Value::Dict(vec![("k".to_string(), Value::Int(1))])
    );
}

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn int_and_double_never_compare_equal() {
    assert_ne!(Value::Int(1), Value::Double(1.0));
}

#[test]
fn structural_equality() {
    assert_eq!(sample_dict(), sample_dict());
    assert_ne!(
        sample_dict(),
        Value::Dict(vec![("a".to_string(), Value::Int(2))])
    );
}

// ============================================================================
// Serialize: a parsed tree can feed any serde consumer
// ============================================================================

#[test]
fn serialize_scalars() {
    assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(serde_json::to_string(&Value::Int(-3)).unwrap(), "-3");
    assert_eq!(serde_json::to_string(&Value::Double(2.5)).unwrap(), "2.5");
}

#[test]
fn serialize_preserves_dict_order() {
    let dict = Value::Dict(vec![
        ("z".to_string(), Value::Int(1)),
        ("a".to_string(), Value::Int(2)),
    ]);
    assert_eq!(serde_json::to_string(&dict).unwrap(), r#"{"z":1,"a":2}"#);
}

#[test]
fn serialize_escapes_what_render_does_not() {
    // Unlike the printer, serde output is fully escaped JSON.
    let value = Value::String("a\"b".to_string());
    assert_eq!(serde_json::to_string(&value).unwrap(), r#""a\"b""#);
}

#[test]
fn serialize_nested_tree() {
    let tree = Value::Dict(vec![
        ("key".to_string(), Value::Int(42)),
        (
            "array".to_string(),
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        ),
    ]);
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        r#"{"key":42,"array":[1,2,3]}"#
    );
}
