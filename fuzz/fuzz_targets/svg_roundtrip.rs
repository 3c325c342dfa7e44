#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(first) = svgtree::parse_bytes(data) else {
        return;
    };
    if first.is_empty() {
        return;
    }
    let Ok(xml) = first.to_xml_string() else {
        return;
    };
    let second = svgtree::parse_str(&xml).expect("serializer output must parse");
    assert!(first.compare(&second), "roundtrip changed the tree:\n{xml}");
});
