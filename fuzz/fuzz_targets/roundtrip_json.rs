#![no_main]
use libfuzzer_sys::fuzz_target;

use snbt::{JsonSafeOptions, NumberEncoding, Tag};

fuzz_target!(|tag: Tag| {
    let json = snbt::to_json_safe(&tag);
    let text = serde_json::to_string(&json).unwrap();
    let _ = snbt::from_json_str(&text).unwrap();
    let _ = snbt::from_json_safe(&json);

    let opts = JsonSafeOptions::new().numbers(NumberEncoding::Suffixed);
    let json = snbt::to_json_safe_with_opts(&tag, &opts);
    let _ = snbt::from_json_safe_with_opts(&json, &opts);
});
