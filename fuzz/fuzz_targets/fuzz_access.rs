#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlx::Document;

fuzz_target!(|data: &str| {
    // Typed accessors never panic on arbitrary text values.
    let mut doc = Document::new();
    let root = doc.root();
    let item = doc.create_element(xmlx::QName::local("v"));
    doc.set_value(item, data);
    doc.append_child(root, item);

    let _ = doc.value_i64(root, "*", "v");
    let _ = doc.value_u32(root, "*", "v");
    let _ = doc.value_f64(root, "*", "v");
    let _ = doc.value_bool(root, "*", "v");
});
