#![no_main]
use libfuzzer_sys::fuzz_target;
use matchdiff::engine::{self, DiffOptions};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split = (data[0] as usize) % data.len();
    let a = String::from_utf8_lossy(&data[..split]).into_owned();
    let b = String::from_utf8_lossy(&data[split..]).into_owned();

    // Rendering is total: any pair of texts must produce output without
    // panicking, and identical inputs must render no edit lines.
    let opts = DiffOptions::plain();
    let rendered = engine::diff_text(&a, &b, &opts);
    if a == b {
        assert!(rendered.lines().all(|l| l.starts_with("  ")));
    }
});
