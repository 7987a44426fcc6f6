use hash2stuff::{
    normalize_to_records, render_php, render_php_from_map, render_php_value, to_php, value,
    Error, PhpOptions, Value, VariableMap, VariableName, VariableRecord,
};

fn example_records() -> Vec<VariableRecord> {
    vec![
        VariableRecord::new("simpleString", "Simple string"),
        VariableRecord::new(
            VariableName::new("nested").with_subkey("subkey"),
            "Subvalue",
        ),
        VariableRecord::new("myArray", value!(["one", "two", "three"])),
        VariableRecord::new("myNumber", 13),
        VariableRecord::new(
            "nestedHash",
            value!({
                "subArray": ["ten", "nine", 8, 7],
                "subString": "foobar",
                "subHash": {
                    "foo": "bar",
                    "oof": "rab",
                    "subsubHash": { "thats": "enough" }
                }
            }),
        ),
    ]
}

fn single_record() -> Vec<VariableRecord> {
    vec![VariableRecord::new("foo", "bar")]
}

#[test]
fn test_default_settings() {
    let php = render_php(&example_records(), &PhpOptions::default()).unwrap();
    assert_eq!(
        php,
        r#"<?php
// THIS FILE IS CONTROLLED BY PUPPET

$simpleString = 'Simple string';
$nested['subkey'] = 'Subvalue';
$myArray = array(
  'one',
  'two',
  'three',
);
$myNumber = 13;
$nestedHash = array(
  'subArray' => array(
    'ten',
    'nine',
    8,
    7,
  ),
  'subString' => 'foobar',
  'subHash' => array(
    'foo' => 'bar',
    'oof' => 'rab',
    'subsubHash' => array(
      'thats' => 'enough',
    ),
  ),
);
"#
    );
}

#[test]
fn test_mapping_input() {
    let mut vars = VariableMap::new();
    vars.insert(VariableName::new("simpleString"), value!("Simple String"));
    vars.insert(
        VariableName::new("nested").with_subkey("subKey"),
        value!("Subvalue"),
    );
    vars.insert(
        VariableName::new("nested").with_subkey("subHash"),
        value!({ "foo": "bar", "oof": "rab" }),
    );

    let php = render_php_from_map(&vars, &PhpOptions::default()).unwrap();
    assert_eq!(
        php,
        r#"<?php
// THIS FILE IS CONTROLLED BY PUPPET

$simpleString = 'Simple String';
$nested['subKey'] = 'Subvalue';
$nested['subHash'] = array(
  'foo' => 'bar',
  'oof' => 'rab',
);
"#
    );
    assert_eq!(
        php,
        render_php(&normalize_to_records(&vars), &PhpOptions::default()).unwrap()
    );
}

#[test]
fn test_nested_subkey_sequence() {
    let mut vars = VariableMap::new();
    vars.insert(VariableName::new("foo"), value!("bar"));
    vars.insert(
        VariableName::new("nested").with_subkey("subkey"),
        value!(["one", "two"]),
    );

    let php = render_php_from_map(&vars, &PhpOptions::default()).unwrap();
    assert!(php.contains("$nested['subkey'] = array(\n  'one',\n  'two',\n);"));
}

#[test]
fn test_custom_header() {
    let options = PhpOptions::new().with_header("/* Custom header set */");
    assert_eq!(
        render_php(&single_record(), &options).unwrap(),
        "<?php\n/* Custom header set */\n\n$foo = 'bar';\n"
    );
}

#[test]
fn test_empty_header_skipped() {
    let options = PhpOptions::new().without_header();
    assert_eq!(
        render_php(&single_record(), &options).unwrap(),
        "<?php\n\n$foo = 'bar';\n"
    );
}

#[test]
fn test_php_tags() {
    let base = PhpOptions::new().without_header().with_php_close(true);

    assert_eq!(
        render_php(&single_record(), &base).unwrap(),
        "<?php\n\n$foo = 'bar';\n\n?>\n"
    );

    let close_only = base.clone().with_php_open(false);
    assert_eq!(
        render_php(&single_record(), &close_only).unwrap(),
        "$foo = 'bar';\n\n?>\n"
    );

    let neither = base.with_php_open(false).with_php_close(false);
    assert_eq!(
        render_php(&single_record(), &neither).unwrap(),
        "$foo = 'bar';\n"
    );
}

#[test]
fn test_header_without_open_tag() {
    let options = PhpOptions::new().with_php_open(false);
    assert_eq!(
        render_php(&single_record(), &options).unwrap(),
        "// THIS FILE IS CONTROLLED BY PUPPET\n\n$foo = 'bar';\n"
    );
}

#[test]
fn test_no_records() {
    assert_eq!(
        render_php(&[], &PhpOptions::default()).unwrap(),
        "<?php\n// THIS FILE IS CONTROLLED BY PUPPET\n\n"
    );
    let bare = PhpOptions::new().without_header().with_php_open(false);
    assert_eq!(render_php(&[], &bare).unwrap(), "");
}

#[test]
fn test_php_constants() {
    let options = PhpOptions::new().with_constants(true);
    assert_eq!(
        render_php(&single_record(), &options).unwrap(),
        "<?php\n// THIS FILE IS CONTROLLED BY PUPPET\n\ndefine(\"FOO\", 'bar');\n"
    );
}

#[test]
fn test_php_constants_with_nested_value() {
    let options = PhpOptions::new().without_header().with_constants(true);
    let records = vec![VariableRecord::new("hosts", value!(["a", "b"]))];
    assert_eq!(
        render_php(&records, &options).unwrap(),
        "<?php\n\ndefine(\"HOSTS\", array(\n  'a',\n  'b',\n));\n"
    );
}

#[test]
fn test_php_constants_reject_subkeys() {
    let options = PhpOptions::new().with_constants(true);
    let records = vec![VariableRecord::new(
        VariableName::new("nested").with_subkey("subkey"),
        "x",
    )];
    assert!(matches!(
        render_php(&records, &options),
        Err(Error::ConstantSubkeys(_))
    ));
}

fn indent_records() -> Vec<VariableRecord> {
    vec![VariableRecord::new(
        "foo",
        value!({
            "array": ["one", 2],
            "hash": { "sub": "value" }
        }),
    )]
}

#[test]
fn test_custom_indent_size() {
    let options = PhpOptions::new().without_header().with_indent_size(4);
    assert_eq!(
        render_php(&indent_records(), &options).unwrap(),
        r#"<?php

$foo = array(
    'array' => array(
        'one',
        2,
    ),
    'hash' => array(
        'sub' => 'value',
    ),
);
"#
    );
}

#[test]
fn test_custom_indent_char() {
    let options = PhpOptions::new().without_header().with_indent_char("\t");
    assert_eq!(
        render_php(&indent_records(), &options).unwrap(),
        "<?php\n\n$foo = array(\n\t\t'array' => array(\n\t\t\t\t'one',\n\t\t\t\t2,\n\t\t),\n\t\t'hash' => array(\n\t\t\t\t'sub' => 'value',\n\t\t),\n);\n"
    );
}

#[test]
fn test_dynamic_records_and_options() {
    let php = render_php_value(
        value!([{ "name": "foo", "value": "bar" }]),
        Some(value!({ "header": "", "php_open": false, "php_close": true })),
    )
    .unwrap();
    assert_eq!(php, "$foo = 'bar';\n\n?>\n");
}

#[test]
fn test_dynamic_input_type_errors() {
    let err = render_php_value(value!("some string"), None).unwrap_err();
    assert!(matches!(err, Error::ArgumentType { ref param, .. } if param == "input"));

    let err = render_php_value(value!([{ "value": "bar" }]), None).unwrap_err();
    assert!(matches!(err, Error::ArgumentType { ref param, .. } if param == "input"));

    let err = render_php_value(value!({ "foo": "bar" }), Some(value!({ "indent_size": "wide" })))
        .unwrap_err();
    assert!(matches!(err, Error::ArgumentType { ref param, .. } if param == "options"));
}

#[test]
fn test_oversized_indent_is_error() {
    let err = render_php_value(
        value!({ "foo": ["bar"] }),
        Some(value!({ "indent_size": 9_223_372_036_854_775_807i64 })),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ArgumentType { ref param, .. } if param == "options"));
}

#[test]
fn test_null_value_rejected() {
    let records = vec![VariableRecord::new("foo", Value::Null)];
    let err = render_php(&records, &PhpOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unable to convert a value with type null to php");
}

#[test]
fn test_json_input() {
    let input: Value = serde_json::from_str(
        r#"{"database": {"host": "db1", "port": 5432, "ratio": 0.5, "replica": false}}"#,
    )
    .unwrap();

    assert_eq!(
        to_php(&input).unwrap(),
        "<?php\n// THIS FILE IS CONTROLLED BY PUPPET\n\n$database = array(\n  'host' => 'db1',\n  'port' => 5432,\n  'ratio' => 0.5,\n  'replica' => false,\n);\n"
    );
}

#[test]
fn test_records_read_from_json() {
    let records: Vec<VariableRecord> = serde_json::from_str(
        r#"[{"name": "simple", "value": "string"}, {"name": ["nested", "with", "subkeys"], "value": {"value": "subkey"}}]"#,
    )
    .unwrap();

    assert_eq!(records[0], VariableRecord::new("simple", "string"));
    assert_eq!(records[1].name.subkeys(), ["with", "subkeys"]);
    assert_eq!(
        render_php(&records, &PhpOptions::new().without_header().with_php_open(false)).unwrap(),
        "$simple = 'string';\n$nested['with']['subkeys'] = array(\n  'value' => 'subkey',\n);\n"
    );
}
