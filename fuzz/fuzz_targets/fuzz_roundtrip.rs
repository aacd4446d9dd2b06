#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlx::parser::{parse_str_with_options, ParseOptions};
use xmlx::serial::serialize;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = xmlx::encoding::decode_to_utf8(data) else {
        return;
    };
    let opts = ParseOptions::default().max_depth(64);
    // Load -> serialize -> load must never panic, and search over whatever
    // loaded must terminate.
    if let Ok(doc) = parse_str_with_options(&text, &opts) {
        let _ = doc.select_nodes(doc.root(), "*", "a");
        let output = serialize(&doc);
        let _ = parse_str_with_options(&output, &opts);
    }
});
