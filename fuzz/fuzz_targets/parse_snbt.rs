#![no_main]
use libfuzzer_sys::fuzz_target;

use snbt::error::Result;
use snbt::{parse_with_opts, ParseOptions, Tag};

fuzz_target!(|data: &str| {
    let tag: Result<Tag> = parse_with_opts(data, &ParseOptions::new().max_depth(64));
    if let Ok(tag) = tag {
        let text = snbt::to_string(&tag);
        let _ = snbt::to_display_string(&tag, &Default::default());
        let _ = snbt::to_json_safe(&tag);
        assert!(snbt::parse(&text).is_ok(), "{:?} did not parse back", text);
    }
});
