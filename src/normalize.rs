// Value normalization ahead of rendering.
//
// Resolves pattern-matcher placeholders into concrete values and aligns
// text leaves character-by-character, so the rendered diff shows only
// genuine disagreement. The default entry point clones the inputs;
// `normalize_in_place` is the opt-in mutating fast path. Owned `Value`
// trees cannot be cyclic, so the recursion needs no visited-set.

use log::debug;

use crate::engine::DiffOptions;
use crate::script::{Op, cleanup_semantic, diff_chars};
use crate::value::Value;

/// Normalize two values for presentation, returning the resolved pair.
pub fn normalize(a: &Value, b: &Value, opts: &DiffOptions) -> (Value, Value) {
    let mut a = a.clone();
    let mut b = b.clone();
    normalize_in_place(&mut a, &mut b, opts);
    (a, b)
}

/// Like [`normalize`], but resolves the caller's values directly.
pub fn normalize_in_place(a: &mut Value, b: &mut Value, opts: &DiffOptions) {
    // Equal values need no resolution.
    if a == b {
        return;
    }

    // A matcher on exactly one side that accepts the other collapses both
    // sides to the concrete value. Two matchers, or a matcher that fails
    // to match, leave the raw mismatch visible downstream.
    enum Collapse {
        ToB,
        ToA,
        Blocked,
        NotApplicable,
    }
    let collapse = match (&*a, &*b) {
        (Value::Matcher(m), other) if !matches!(other, Value::Matcher(_)) => {
            if m.matches(other) {
                Collapse::ToB
            } else {
                Collapse::Blocked
            }
        }
        (other, Value::Matcher(m)) if !matches!(other, Value::Matcher(_)) => {
            if m.matches(other) {
                Collapse::ToA
            } else {
                Collapse::Blocked
            }
        }
        (Value::Matcher(_), Value::Matcher(_)) => Collapse::Blocked,
        _ => Collapse::NotApplicable,
    };
    match collapse {
        Collapse::ToB => {
            debug!("expected-side matcher accepted the received value");
            *a = b.clone();
            return;
        }
        Collapse::ToA => {
            debug!("received-side matcher accepted the expected value");
            *b = a.clone();
            return;
        }
        Collapse::Blocked => return,
        Collapse::NotApplicable => {}
    }

    // Text leaves: character alignment with differing spans emphasized.
    if let (Value::Text(text_a), Value::Text(text_b)) = (&*a, &*b) {
        let (marked_a, marked_b) = emphasize_difference(text_a, text_b, opts);
        *a = Value::Text(marked_a);
        *b = Value::Text(marked_b);
        return;
    }

    // Primitive mismatches (and anything else unstructured) stay as-is.
    if !a.is_structured() || !b.is_structured() {
        return;
    }

    match (a, b) {
        (Value::Seq(seq_a), Value::Seq(seq_b)) => {
            // Indices past the shorter side have nothing to resolve against.
            let shared = seq_a.len().min(seq_b.len());
            for i in 0..shared {
                normalize_in_place(&mut seq_a[i], &mut seq_b[i], opts);
            }
        }
        (Value::Map(map_a), Value::Map(map_b)) => {
            // One-sided keys are left untouched.
            let shared: Vec<String> = map_a
                .keys()
                .filter(|key| map_b.contains_key(*key))
                .cloned()
                .collect();
            for key in shared {
                if let (Some(child_a), Some(child_b)) = (map_a.get_mut(&key), map_b.get_mut(&key))
                {
                    normalize_in_place(child_a, child_b, opts);
                }
            }
        }
        // Mixed container kinds: the raw mismatch stays visible downstream.
        _ => {}
    }
}

/// Reconstruct both texts with non-common spans wrapped in the emphasis
/// marker.
fn emphasize_difference(a: &str, b: &str, opts: &DiffOptions) -> (String, String) {
    let mut segments = diff_chars(a, b);
    if opts.cleanup {
        segments = cleanup_semantic(segments);
    }

    let mut marked_a = String::new();
    let mut marked_b = String::new();
    for segment in &segments {
        match segment.op {
            Op::Equal => {
                marked_a.push_str(&segment.text);
                marked_b.push_str(&segment.text);
            }
            Op::Delete => marked_a.push_str(&opts.markup.emphasis(&segment.text)),
            Op::Insert => marked_b.push_str(&opts.markup.emphasis(&segment.text)),
        }
    }
    (marked_a, marked_b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
