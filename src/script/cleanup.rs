// Semantic cleanup of edit scripts.
//
// A lone shared character between two edits is noise, not a true third
// lane of output. This pass folds any Equal segment of length <= 1 whose
// input neighbors are both edits into the surrounding Delete and Insert,
// accumulating edit text in two pending buffers that flush (Delete first)
// whenever a surviving Equal segment is emitted, and once more at the end.
//
// Applying the pass twice yields the same script as applying it once.

use super::{Op, Segment};

/// Fold tiny equal runs into their neighboring edits.
pub fn cleanup_semantic(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut pending_delete = String::new();
    let mut pending_insert = String::new();

    for i in 0..segments.len() {
        let segment = &segments[i];
        match segment.op {
            Op::Delete => pending_delete.push_str(&segment.text),
            Op::Insert => pending_insert.push_str(&segment.text),
            Op::Equal => {
                let tiny = segment.text.chars().count() <= 1;
                let between_edits = i > 0
                    && segments[i - 1].op != Op::Equal
                    && i + 1 < segments.len()
                    && segments[i + 1].op != Op::Equal;
                if tiny && between_edits {
                    pending_delete.push_str(&segment.text);
                    pending_insert.push_str(&segment.text);
                } else {
                    flush(&mut out, &mut pending_delete, &mut pending_insert);
                    out.push(segment.clone());
                }
            }
        }
    }

    flush(&mut out, &mut pending_delete, &mut pending_insert);
    out
}

/// Emit the pending buffers as one Delete and one Insert segment, each
/// only if non-empty.
fn flush(out: &mut Vec<Segment>, pending_delete: &mut String, pending_insert: &mut String) {
    if !pending_delete.is_empty() {
        out.push(Segment::new(Op::Delete, std::mem::take(pending_delete)));
    }
    if !pending_insert.is_empty() {
        out.push(Segment::new(Op::Insert, std::mem::take(pending_insert)));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
