use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Error;
use crate::{
    from_json_safe, from_json_safe_with_opts, from_json_str, parse, to_json_safe,
    to_json_safe_with_opts, to_json_string, Compound, JsonSafeOptions, NumberEncoding, Tag,
};

fn suffixed() -> JsonSafeOptions {
    JsonSafeOptions::new().numbers(NumberEncoding::Suffixed)
}

#[test]
fn encode_scalars() {
    assert_eq!(to_json_safe(&Tag::Byte(5)), json!(5));
    assert_eq!(to_json_safe(&Tag::Short(-3)), json!(-3));
    assert_eq!(to_json_safe(&Tag::Int(7)), json!(7));
    assert_eq!(to_json_safe(&Tag::Long(i64::MAX)), json!("9223372036854775807l"));
    assert_eq!(to_json_safe(&Tag::Float(1.5)), json!(1.5));
    assert_eq!(to_json_safe(&Tag::Double(2.5)), json!(2.5));
    assert_eq!(to_json_safe(&Tag::String("hi".into())), json!("hi"));
}

#[test]
fn encode_suffixed_scalars() {
    let opts = suffixed();
    assert_eq!(to_json_safe_with_opts(&Tag::Byte(5), &opts), json!("5b"));
    assert_eq!(to_json_safe_with_opts(&Tag::Short(-3), &opts), json!("-3s"));
    assert_eq!(to_json_safe_with_opts(&Tag::Int(7), &opts), json!(7));
    assert_eq!(to_json_safe_with_opts(&Tag::Long(-7), &opts), json!("-7l"));
    assert_eq!(to_json_safe_with_opts(&Tag::Float(1.5), &opts), json!("1.5f"));
    assert_eq!(to_json_safe_with_opts(&Tag::Float(1.0), &opts), json!("1.0f"));
    assert_eq!(to_json_safe_with_opts(&Tag::Float(1e-7), &opts), json!("0.0000001f"));
    assert_eq!(to_json_safe_with_opts(&Tag::Double(2.5), &opts), json!(2.5));
}

#[test]
fn non_finite_is_null() {
    assert_eq!(to_json_safe(&Tag::Double(f64::NAN)), Value::Null);
    assert_eq!(to_json_safe(&Tag::Double(f64::INFINITY)), Value::Null);
    assert_eq!(to_json_safe(&Tag::Float(f32::NAN)), Value::Null);
    // Suffixed floats keep their text form.
    assert_eq!(to_json_safe_with_opts(&Tag::Float(f32::NAN), &suffixed()), json!("NaNf"));
}

#[test]
fn encode_arrays() {
    assert_eq!(
        to_json_safe(&Tag::ByteArray(vec![1, -2])),
        json!({"_kind": "ByteArray", "_values": ["1b", "-2b"]})
    );
    assert_eq!(
        to_json_safe(&Tag::IntArray(vec![1, 2])),
        json!({"_kind": "IntArray", "_values": [1, 2]})
    );
    assert_eq!(
        to_json_safe(&Tag::LongArray(vec![i64::MIN])),
        json!({"_kind": "LongArray", "_values": ["-9223372036854775808l"]})
    );
}

#[test]
fn encode_containers() {
    let tag = parse("{z:1,a:[1l,'x'],m:}").unwrap();
    let json = to_json_safe(&tag);
    assert_eq!(json, json!({"z": 1, "a": ["1l", "x"], "m": null}));

    // Key order is kept.
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn narrow_kinds_widen_by_default() {
    let tag = parse("{b:5b,s:3s,f:1.5f,l:7l}").unwrap();
    let json = to_json_safe(&tag);
    assert_eq!(json, json!({"b": 5, "s": 3, "f": 1.5, "l": "7l"}));

    // Narrow kinds widen on the way back; longs survive.
    assert_eq!(
        from_json_safe(&json),
        parse("{b:5,s:3,f:1.5d,l:7l}").unwrap()
    );

    let opts = JsonSafeOptions::new().numbers(NumberEncoding::Natural);
    assert_eq!(to_json_safe_with_opts(&tag, &opts), json);
}

#[test]
fn decode_numbers() {
    assert_eq!(from_json_safe(&json!(5)), Tag::Int(5));
    assert_eq!(from_json_safe(&json!(-5)), Tag::Int(-5));
    assert_eq!(from_json_safe(&json!(5_000_000_000i64)), Tag::Long(5_000_000_000));
    assert_eq!(from_json_safe(&json!(1.5)), Tag::Double(1.5));
    assert_eq!(from_json_safe(&json!(u64::MAX)), Tag::Double(u64::MAX as f64));
    assert_eq!(from_json_safe(&json!(true)), Tag::Byte(1));
    assert_eq!(from_json_safe(&json!(false)), Tag::Byte(0));
}

#[test]
fn decode_long_strings() {
    assert_eq!(from_json_safe(&json!("-5l")), Tag::Long(-5));
    assert_eq!(from_json_safe(&json!("7l")), Tag::Long(7));
    assert_eq!(
        from_json_safe(&json!("9223372036854775807l")),
        Tag::Long(i64::MAX)
    );
}

#[test]
fn decode_plain_strings() {
    // Only `-?digits` followed by `l` is read as a number.
    for s in [
        "abc", "5b", "-3s", "1.5f", "2f", "NaNf", "inff", "300b", "1.5b", "5x", "5 b", "7L",
        "5d", "b", "", "1.5", "1.5l", "+5l", "99999999999999999999l",
    ] {
        assert_eq!(from_json_safe(&json!(s)), Tag::String(s.to_owned()), "{:?}", s);
    }
}

#[test]
fn decode_suffixed_strings() {
    let opts = suffixed();
    let decode = |v: Value| from_json_safe_with_opts(&v, &opts);

    assert_eq!(decode(json!("5b")), Tag::Byte(5));
    assert_eq!(decode(json!("-3s")), Tag::Short(-3));
    assert_eq!(decode(json!("-5l")), Tag::Long(-5));
    assert_eq!(decode(json!("1.5f")), Tag::Float(1.5));
    assert_eq!(decode(json!("2f")), Tag::Float(2.0));
    assert_eq!(decode(json!("inff")), Tag::Float(f32::INFINITY));
    match decode(json!("NaNf")) {
        Tag::Float(f) => assert!(f.is_nan()),
        other => panic!("expected float, got {:?}", other),
    }

    // Nested values use the same options.
    assert_eq!(
        decode(json!({"a": ["1b"], "b": {"c": "2s"}})),
        parse("{a:[1b],b:{c:2s}}").unwrap()
    );

    for s in ["300b", "1.5b", "5 b", "7L", "5d", "1.0e-7f", "b", ""] {
        assert_eq!(decode(json!(s)), Tag::String(s.to_owned()), "{:?}", s);
    }
}

#[test]
fn decode_null() {
    assert_eq!(from_json_safe(&Value::Null), Tag::Compound(Compound::new()));
    assert_eq!(
        from_json_safe(&json!([null])),
        Tag::List(vec![Tag::Compound(Compound::new())])
    );

    let tag = from_json_safe(&json!({"a": null}));
    assert_eq!(tag.as_compound().unwrap().entry_of("a"), Some(None));
}

#[test]
fn decode_typed_arrays() {
    assert_eq!(
        from_json_safe(&json!({"_kind": "LongArray", "_values": [1, "2l", "3"]})),
        Tag::LongArray(vec![1, 2, 3])
    );
    assert_eq!(
        from_json_safe(&json!({"_values": ["1b", 2], "_kind": "ByteArray"})),
        Tag::ByteArray(vec![1, 2])
    );
    assert_eq!(
        from_json_safe(&json!({"_kind": "IntArray", "_values": []})),
        Tag::IntArray(vec![])
    );
}

#[test]
fn decode_legacy_typed_arrays() {
    assert_eq!(
        from_json_safe(&json!({"_nbtType": "Int32Array", "_values": [1, 2]})),
        Tag::IntArray(vec![1, 2])
    );
    assert_eq!(
        from_json_safe(&json!({"_nbtType": "Int8Array", "_values": [-1]})),
        Tag::ByteArray(vec![-1])
    );
    assert_eq!(
        from_json_safe(&json!({"_nbtType": "Uint8Array", "_values": [255, 1]})),
        Tag::ByteArray(vec![-1, 1])
    );
    assert_eq!(
        from_json_safe(&json!({"_nbtType": "BigInt64Array", "_values": ["9223372036854775807"]})),
        Tag::LongArray(vec![i64::MAX])
    );
}

#[test]
fn unrecognised_shapes_stay_compounds() {
    let cases = [
        json!({"_kind": "IntArray", "_values": ["x"]}),
        json!({"_kind": "IntArray", "_values": [3000000000i64]}),
        json!({"_kind": "Foo", "_values": [1]}),
        json!({"_kind": "List", "_values": [1]}),
        json!({"_kind": "IntArray", "_values": [1], "extra": 1}),
        json!({"_kind": "IntArray"}),
        json!({"_kind": "IntArray", "_values": 1}),
    ];

    for case in cases {
        let tag = from_json_safe(&case);
        assert_eq!(tag.kind(), crate::TagKind::Compound, "{}", case);
    }

    let tag = from_json_safe(&json!({"_kind": "Foo", "_values": [1]}));
    let c = tag.as_compound().unwrap();
    assert_eq!(c.get("_kind"), Some(&Tag::String("Foo".into())));
    assert_eq!(c.get("_values"), Some(&Tag::List(vec![Tag::Int(1)])));
}

#[test]
fn round_trip_keeps_kinds() {
    let tag = parse(
        "{b:1b,s:2s,i:3,l:4l,f:5.5f,d:6.5,str:'x',ba:[B;1b],ia:[I;2],la:[L;3l],list:[{},[]],e:}",
    )
    .unwrap();
    let opts = suffixed();
    assert_eq!(
        from_json_safe_with_opts(&to_json_safe_with_opts(&tag, &opts), &opts),
        tag
    );

    // Without suffixes the kinds that JSON numbers carry still survive.
    let tag = parse("{i:3,l:4l,d:6.5,str:'x',ba:[B;1b],la:[L;3l],e:}").unwrap();
    assert_eq!(from_json_safe(&to_json_safe(&tag)), tag);
}

#[test]
fn suffix_lookalike_strings() {
    // A string shaped like an encoded long comes back as one.
    let tag = Tag::String("5l".into());
    assert_eq!(from_json_safe(&to_json_safe(&tag)), Tag::Long(5));

    let tag = Tag::String("5b".into());
    assert_eq!(from_json_safe(&to_json_safe(&tag)), tag);
    let opts = suffixed();
    assert_eq!(
        from_json_safe_with_opts(&to_json_safe_with_opts(&tag, &opts), &opts),
        Tag::Byte(5)
    );
}

#[test]
fn json_text() {
    let tag = parse("{a:1,b:[L;1l]}").unwrap();
    let text = to_json_string(&tag).unwrap();
    assert_eq!(text, r#"{"a":1,"b":{"_kind":"LongArray","_values":["1l"]}}"#);
    assert_eq!(from_json_str(&text).unwrap(), tag);

    let pretty = crate::to_json_string_pretty(&tag).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(from_json_str(&pretty).unwrap(), tag);

    assert!(matches!(from_json_str("{"), Err(Error::Json(_))));
}

#[test]
fn serde_impls() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        tag: Tag,
    }

    let item = Item {
        id: "minecraft:stick".into(),
        tag: parse("{Damage:3,Seed:5l,Lore:['a']}").unwrap(),
    };

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
        value,
        json!({"id": "minecraft:stick", "tag": {"Damage": 3, "Seed": "5l", "Lore": ["a"]}})
    );

    let back: Item = serde_json::from_value(value).unwrap();
    assert_eq!(back, item);

    // Plain strings inside stay strings.
    let back: Tag = serde_json::from_value(json!({"name": "5b"})).unwrap();
    assert_eq!(back, parse("{name:'5b'}").unwrap());
}
