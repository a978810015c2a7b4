#![no_main]
use libfuzzer_sys::fuzz_target;

use snbt::{Compound, Tag};

fn has_non_finite(tag: &Tag) -> bool {
    match tag {
        Tag::Float(v) => !v.is_finite(),
        Tag::Double(v) => !v.is_finite(),
        Tag::List(list) => list.iter().any(has_non_finite),
        Tag::Compound(c) => c.iter().any(|(_, v)| v.map_or(false, has_non_finite)),
        _ => false,
    }
}

fuzz_target!(|tag: Tag| {
    let mut root = Compound::new();
    root.insert("", tag);
    let tag = Tag::Compound(root);

    let text = snbt::to_string(&tag);
    let pretty = snbt::to_string_pretty(&tag);

    // NaN and the infinities are written but read back as strings.
    if has_non_finite(&tag) {
        let _ = snbt::parse(&text);
        return;
    }

    assert_eq!(snbt::parse(&text).unwrap(), tag, "{}", text);
    assert_eq!(snbt::parse(&pretty).unwrap(), tag, "{}", pretty);
});
