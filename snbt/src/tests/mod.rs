use std::convert::TryFrom;

use crate::{JsonSafeOptions, NumberEncoding, Tag, TagKind};

mod display_tests;
mod json_tests;

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagKind::$kind), $val);
            assert_eq!(TagKind::try_from($val).unwrap(), TagKind::$kind);
            assert_eq!(stringify!($kind).parse::<TagKind>().unwrap(), TagKind::$kind);
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    assert!(TagKind::try_from(0).is_err());
    for value in 13..=u8::MAX {
        assert!(TagKind::try_from(value).is_err())
    }
}

#[test]
fn test_mixed() {
    let text = r#"{name:"Cool \"name\"",ints:[I;-1,3,2000],f:-0.00005,collection:[1b,0b,1b],extra:}"#;
    let tag = crate::parse(text).unwrap();

    let c = tag.as_compound().unwrap();
    assert_eq!(c.get("name"), Some(&Tag::String("Cool \"name\"".into())));
    assert_eq!(c.get("ints"), Some(&Tag::IntArray(vec![-1, 3, 2000])));
    assert_eq!(c.get("f"), Some(&Tag::Double(-0.00005)));
    assert_eq!(c.entry_of("extra"), Some(None));

    // Classic output picks single quotes for the name as it starts with text
    // containing a double quote.
    let written = crate::to_string(&tag);
    assert_eq!(
        written,
        r#"{name:'Cool "name"',ints:[I;-1,3,2000],f:-0.00005,collection:[1b,0b,1b],extra:}"#
    );
    assert_eq!(crate::parse(&written).unwrap(), tag);

    let opts = JsonSafeOptions::new().numbers(NumberEncoding::Suffixed);
    let json = crate::to_json_safe_with_opts(&tag, &opts);
    assert_eq!(crate::from_json_safe_with_opts(&json, &opts), tag);

    // Plain JSON numbers give the bytes back as ints.
    let back = crate::from_json_safe(&crate::to_json_safe(&tag));
    let collection = back.as_compound().unwrap().get("collection");
    assert_eq!(
        collection,
        Some(&Tag::List(vec![Tag::Int(1), Tag::Int(0), Tag::Int(1)]))
    );
}
