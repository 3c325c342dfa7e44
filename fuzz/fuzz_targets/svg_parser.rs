#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(root) = svgtree::parse_bytes(data) {
        let _ = root.find_by_id("a");
        let _ = root.find_by_content("a");
    }
});
