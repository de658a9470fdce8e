// Character-level edit scripts.
//
// The predicate compares Unicode scalar values (Rust `char`s), so a
// character outside the basic multilingual plane is never split across
// two segments.

use super::{Op, Segment};
use crate::align::align;

/// Compute the character-level edit script between `a` and `b`.
///
/// Gaps between common runs become at most one Delete and one Insert
/// segment, in that order.
pub fn diff_chars(a: &str, b: &str) -> Vec<Segment> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut segments: Vec<Segment> = Vec::new();
    let mut a_pos = 0usize;
    let mut b_pos = 0usize;

    align(
        a_chars.len(),
        b_chars.len(),
        |ai, bi| a_chars[ai] == b_chars[bi],
        |len, a_index, b_index| {
            push_gap(&mut segments, &a_chars[a_pos..a_index], &b_chars[b_pos..b_index]);
            segments.push(Segment::new(
                Op::Equal,
                a_chars[a_index..a_index + len].iter().collect::<String>(),
            ));
            a_pos = a_index + len;
            b_pos = b_index + len;
        },
    );

    push_gap(&mut segments, &a_chars[a_pos..], &b_chars[b_pos..]);
    segments
}

/// Emit the unmatched span before a common run (or the trailing span) as a
/// merged Delete followed by a merged Insert, each only if non-empty.
fn push_gap(segments: &mut Vec<Segment>, deleted: &[char], inserted: &[char]) {
    if !deleted.is_empty() {
        segments.push(Segment::new(Op::Delete, deleted.iter().collect::<String>()));
    }
    if !inserted.is_empty() {
        segments.push(Segment::new(Op::Insert, inserted.iter().collect::<String>()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
