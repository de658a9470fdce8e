#![no_main]
use libfuzzer_sys::fuzz_target;
use matchdiff::script::{self, Op, Segment};

fn join(segments: &[Segment], keep: Op) -> String {
    segments
        .iter()
        .filter(|s| s.op == keep || s.op == Op::Equal)
        .map(|s| s.text.as_str())
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Split the payload into the two inputs.
    let split = (data[0] as usize) % data.len();
    let a = String::from_utf8_lossy(&data[..split]).into_owned();
    let b = String::from_utf8_lossy(&data[split..]).into_owned();

    let segments = script::diff_chars(&a, &b);
    assert_eq!(join(&segments, Op::Delete), a);
    assert_eq!(join(&segments, Op::Insert), b);
});
