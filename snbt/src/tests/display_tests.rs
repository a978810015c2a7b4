use crate::{parse, to_display_string, to_display_string_pretty, DisplayOptions, Tag};

fn display(text: &str) -> String {
    to_display_string(&parse(text).unwrap(), &DisplayOptions::new())
}

#[test]
fn keys_always_quoted() {
    assert_eq!(display("{a:1,'b c':2}"), r#"{"a":1,"b c":2}"#);
    assert_eq!(display(r#"{'a"b':1}"#), r#"{"a\"b":1}"#);
}

#[test]
fn strings_double_quoted() {
    assert_eq!(display(r#"'it\'s'"#), r#""it's""#);
    assert_eq!(display(r#"'say "hi"'"#), r#""say \"hi\"""#);
}

#[test]
fn numbers() {
    assert_eq!(display("5b"), "5b");
    assert_eq!(display("3s"), "3s");
    assert_eq!(display("7"), "7");
    assert_eq!(display("7l"), "7l");
    assert_eq!(display("1.5f"), "1.5f");
    assert_eq!(display("1f"), "1.0f");
    // Doubles lose the forced fraction.
    assert_eq!(display("3.0"), "3");
    assert_eq!(display("2.5d"), "2.5");
    // Never in exponent form.
    assert_eq!(
        to_display_string(&Tag::Double(1e20), &DisplayOptions::new()),
        "100000000000000000000"
    );
    assert_eq!(
        to_display_string(&Tag::Float(0.000001), &DisplayOptions::new()),
        "0.000001f"
    );
}

#[test]
fn arrays_as_lists() {
    assert_eq!(display("[B;1b,2b,3b]"), "[1b,2b,3b]");
    assert_eq!(display("[I;1,2,3]"), "[1,2,3]");
    assert_eq!(display("[L;1,2,3]"), "[1l,2l,3l]");
    assert_eq!(display("[I;]"), "[]");
}

#[test]
fn empty_marker_is_empty_compound() {
    assert_eq!(display("{a:,b:1}"), r#"{"a":{},"b":1}"#);
}

#[test]
fn forced_bytes() {
    assert_eq!(
        display(r#"{id:"minecraft:stone",Count:3}"#),
        r#"{"id":"minecraft:stone","Count":3b}"#
    );
    assert_eq!(display("{Slot:2s}"), r#"{"Slot":2b}"#);
    assert_eq!(display("{Count:3.0}"), r#"{"Count":3b}"#);
    assert_eq!(display("{Count:1b}"), r#"{"Count":1b}"#);
    // Not integral, or not a candidate kind: written as usual.
    assert_eq!(display("{Count:2.5}"), r#"{"Count":2.5}"#);
    assert_eq!(display("{Count:'x'}"), r#"{"Count":"x"}"#);
    // Only directly under the key.
    assert_eq!(display("{Count:[1]}"), r#"{"Count":[1]}"#);
    assert_eq!(display("{count:3}"), r#"{"count":3}"#);
}

#[test]
fn forced_bytes_skip_long_and_float() {
    assert_eq!(display("{Count:3l}"), r#"{"Count":3l}"#);
    assert_eq!(display("{Slot:0l}"), r#"{"Slot":0l}"#);
    assert_eq!(display("{Count:3.0f}"), r#"{"Count":3.0f}"#);
    assert_eq!(display("{Count:3f}"), r#"{"Count":3.0f}"#);
}

#[test]
fn custom_force_byte_keys() {
    let tag = parse("{Count:3,Amount:4}").unwrap();

    let opts = DisplayOptions::new().force_byte_keys(["Amount"]);
    assert_eq!(to_display_string(&tag, &opts), r#"{"Count":3,"Amount":4b}"#);

    let opts = DisplayOptions::new().force_byte_key("Amount");
    assert_eq!(to_display_string(&tag, &opts), r#"{"Count":3b,"Amount":4b}"#);

    let none: [&str; 0] = [];
    let opts = DisplayOptions::new().force_byte_keys(none);
    assert_eq!(to_display_string(&tag, &opts), r#"{"Count":3,"Amount":4}"#);
}

#[test]
fn value_envelopes() {
    assert_eq!(display("{a:{value:5}}"), r#"{"a":5}"#);
    assert_eq!(display("{value:{value:1s}}"), "1s");
    assert_eq!(display("{Count:{value:3}}"), r#"{"Count":3b}"#);
    assert_eq!(display("[{value:'x'}]"), r#"["x"]"#);

    // Anything else is left alone.
    assert_eq!(display("{a:{value:5,b:1}}"), r#"{"a":{"value":5,"b":1}}"#);
    assert_eq!(display("{a:{value:}}"), r#"{"a":{"value":{}}}"#);
    assert_eq!(display("{a:{Value:5}}"), r#"{"a":{"Value":5}}"#);

    let tag = parse("{a:{value:5}}").unwrap();
    let opts = DisplayOptions::new().unwrap_value_envelopes(false);
    assert_eq!(to_display_string(&tag, &opts), r#"{"a":{"value":5}}"#);
}

#[test]
fn pretty() {
    let tag = parse("{a:1,b:[I;1,2]}").unwrap();
    assert_eq!(to_display_string_pretty(&tag, true), r#"{"a": 1, "b": [1, 2]}"#);
    assert_eq!(to_display_string_pretty(&tag, false), r#"{"a":1,"b":[1,2]}"#);

    let opts = DisplayOptions::new().pretty(true).break_length(10);
    assert_eq!(
        to_display_string(&tag, &opts),
        "{\n    \"a\": 1,\n    \"b\": [1, 2]\n}"
    );
}

#[test]
fn display_is_total() {
    let tag = Tag::List(vec![
        Tag::Double(f64::NAN),
        Tag::Float(f32::INFINITY),
        Tag::String(String::new()),
    ]);
    assert_eq!(
        to_display_string(&tag, &DisplayOptions::new()),
        r#"[NaN,inff,""]"#
    );
}
