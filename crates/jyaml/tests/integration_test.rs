//! End-to-end scenarios and boundary behaviors covering the full
//! text -> Lexer -> Parser -> Converter pipeline.

use jyaml::{load, load_ordered, JyamlError, LoadOptions, Native, ParseErrorKind, Value};

fn strict(text: &str) -> Value {
    jyaml::parse(text, &jyaml::ParseOptions::default())
        .unwrap()
        .root
}

#[test]
fn flow_with_comments() {
    let doc = jyaml::parse(
        "# cfg\n{\"app\":\"X\",\"port\":8080}",
        &jyaml::ParseOptions::default(),
    )
    .unwrap();

    let map = doc.root.as_object().unwrap();
    assert_eq!(map["app"], Value::String("X".to_string()));
    assert_eq!(map["port"], Value::Int(8080));
    assert_eq!(doc.comments, vec!["cfg".to_string()]);
}

#[test]
fn block_object_with_inline_comment() {
    let doc = jyaml::parse(
        "\"name\": \"J\"\n\"n\": 1 # tail\n",
        &jyaml::ParseOptions::default(),
    )
    .unwrap();

    let map = doc.root.as_object().unwrap();
    assert_eq!(map["name"], Value::String("J".to_string()));
    assert_eq!(map["n"], Value::Int(1));
    assert_eq!(doc.comments, vec!["tail".to_string()]);
}

#[test]
fn literal_multiline_clip() {
    let root = strict("{\"m\": |\n  a\n  b\n}");
    let map = root.as_object().unwrap();
    assert_eq!(map["m"], Value::String("a\nb\n".to_string()));
}

#[test]
fn folded_multiline_strip() {
    let root = strict("{\"m\": >-\n  a\n  b\n}");
    let map = root.as_object().unwrap();
    assert_eq!(map["m"], Value::String("a b".to_string()));
}

#[test]
fn trailing_comma_and_mixed_types() {
    let root = strict("[1, \"x\", true, null,]");
    assert_eq!(
        root.as_array().unwrap(),
        &[
            Value::Int(1),
            Value::String("x".to_string()),
            Value::Bool(true),
            Value::Null,
        ]
    );
}

#[test]
fn depth_guard_reports_depth_exceeded() {
    let mut options = jyaml::ParseOptions::default();
    options.max_depth = std::num::NonZeroUsize::new(3);
    let err = jyaml::parse("{\"a\":{\"b\":{\"c\":{\"d\":1}}}}", &options).unwrap_err();
    match err {
        JyamlError::Parse(e) => assert_eq!(e.kind, ParseErrorKind::DepthExceeded(3)),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn empty_input_is_null() {
    assert_eq!(strict(""), Value::Null);
}

#[test]
fn empty_containers() {
    assert_eq!(strict("{}"), Value::Object(Default::default()));
    assert_eq!(strict("[]"), Value::Array(Vec::new()));
}

#[test]
fn surrogate_pair_decodes_to_supplementary_plane() {
    let root = strict("\"\\uD83D\\uDE80\"");
    assert_eq!(root, Value::String("\u{1F680}".to_string()));
}

#[test]
fn unpaired_surrogate_is_an_error() {
    let err = jyaml::parse("\"\\uDE80\"", &jyaml::ParseOptions::default()).unwrap_err();
    assert!(matches!(err, JyamlError::Parse(_) | JyamlError::Lexical(_)));
}

#[test]
fn tab_in_indentation_fails_but_escaped_tab_in_string_is_fine() {
    assert!(jyaml::parse("\ta: 1\n", &jyaml::ParseOptions::default()).is_err());
    let root = strict("\"a\\tb\"");
    assert_eq!(root, Value::String("a\tb".to_string()));
}

#[test]
fn end_to_end_load_with_ordered_preset_preserves_source_order_through_conversion() {
    let native = load_ordered("# service config\nname: svc\nport: 9090\nenabled: true\n").unwrap();
    let map = native.as_ordered_map().unwrap();
    assert_eq!(map.get_index(0).unwrap().0, "name");
    assert_eq!(map.get_index(1).unwrap().0, "port");
    assert_eq!(map.get_index(2).unwrap().0, "enabled");
    assert_eq!(map["port"], Native::Int(9090));
}

#[test]
fn end_to_end_high_precision_decimal_round_trips_fractional_values() {
    let native = load(
        "{\"price\": 19.99, \"qty\": 3}",
        &LoadOptions::high_precision(),
    )
    .unwrap();
    let map = native.as_ordered_map().unwrap();
    assert_eq!(
        map["price"],
        Native::Decimal(rust_decimal::Decimal::new(1999, 2))
    );
    assert_eq!(map["qty"], Native::Int(3));
}

#[test]
fn end_to_end_block_array_of_block_objects() {
    let root = strict("- name: a\n  n: 1\n- name: b\n  n: 2\n");
    let items = root.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].as_object().unwrap()["name"],
        Value::String("a".to_string())
    );
    assert_eq!(items[1].as_object().unwrap()["n"], Value::Int(2));
}

#[test]
fn numbers_fitting_json_grammar_parse_like_json() {
    let root = strict("[0, -0.5, 1e10, 3.14, -42]");
    assert_eq!(
        root.as_array().unwrap(),
        &[
            Value::Int(0),
            Value::Float(-0.5),
            Value::Float(1e10),
            Value::Float(3.14),
            Value::Int(-42),
        ]
    );
}
