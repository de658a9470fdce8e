// Line-level edit scripts.
//
// Lines are compared trimmed of trailing whitespace. One normalization
// side-effect absorbs a serialization artifact: when exactly one of a
// compared pair ends with the structural separator `,` (the last property
// of a structure omits it), the separator is appended to the line lacking
// it before comparison. The default entry point copies the caller's lines
// and normalizes the copies; `diff_lines_in_place` mutates the caller's
// lines directly.

use super::{Op, Segment};
use crate::align::{CommonRun, align};

/// Structural separator reconciled between compared line pairs.
const TRAILING_SEPARATOR: char = ',';

/// Compute the line-level edit script between two line slices.
///
/// Equal segments are emitted one per common line; the Delete and Insert
/// segments covering one gap are merged (lines joined by `\n`), ordered
/// Delete before Insert.
pub fn diff_lines(a_lines: &[String], b_lines: &[String]) -> Vec<Segment> {
    let mut a = a_lines.to_vec();
    let mut b = b_lines.to_vec();
    diff_lines_in_place(&mut a, &mut b)
}

/// Like [`diff_lines`], but separator normalization mutates the
/// caller-owned line arrays. Opt-in fast path: the aliasing is observable.
pub fn diff_lines_in_place(a_lines: &mut [String], b_lines: &mut [String]) -> Vec<Segment> {
    let mut runs: Vec<CommonRun> = Vec::new();
    align(
        a_lines.len(),
        b_lines.len(),
        |ai, bi| {
            // Split borrows: the pair always comes from distinct slices.
            lines_match(&mut a_lines[ai], &mut b_lines[bi])
        },
        |len, a_index, b_index| {
            runs.push(CommonRun {
                len,
                a_index,
                b_index,
            })
        },
    );

    let mut segments: Vec<Segment> = Vec::new();
    let mut a_pos = 0usize;
    let mut b_pos = 0usize;
    for run in runs {
        push_gap(
            &mut segments,
            &a_lines[a_pos..run.a_index],
            &b_lines[b_pos..run.b_index],
        );
        for line in &a_lines[run.a_index..run.a_index + run.len] {
            segments.push(Segment::new(Op::Equal, line.clone()));
        }
        a_pos = run.a_index + run.len;
        b_pos = run.b_index + run.len;
    }
    push_gap(&mut segments, &a_lines[a_pos..], &b_lines[b_pos..]);
    segments
}

/// Compare one line pair, reconciling a one-sided trailing separator first.
fn lines_match(a_line: &mut String, b_line: &mut String) -> bool {
    let a_has = a_line.trim_end().ends_with(TRAILING_SEPARATOR);
    let b_has = b_line.trim_end().ends_with(TRAILING_SEPARATOR);
    if a_has != b_has {
        if a_has {
            b_line.push(TRAILING_SEPARATOR);
        } else {
            a_line.push(TRAILING_SEPARATOR);
        }
    }
    a_line.trim_end() == b_line.trim_end()
}

fn push_gap(segments: &mut Vec<Segment>, deleted: &[String], inserted: &[String]) {
    if !deleted.is_empty() {
        segments.push(Segment::new(Op::Delete, deleted.join("\n")));
    }
    if !inserted.is_empty() {
        segments.push(Segment::new(Op::Insert, inserted.join("\n")));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn seg(op: Op, text: &str) -> Segment {
        Segment::new(op, text)
    }

    #[test]
    fn identical_lines_emit_one_equal_per_line() {
        let a = lines(&["line1", "line2"]);
        let b = lines(&["line1", "line2"]);
        assert_eq!(
            diff_lines(&a, &b),
            vec![seg(Op::Equal, "line1"), seg(Op::Equal, "line2")]
        );
    }

    #[test]
    fn changed_line_becomes_merged_gap() {
        let a = lines(&["line1", "line2", "line3"]);
        let b = lines(&["line1", "changed", "line3"]);
        assert_eq!(
            diff_lines(&a, &b),
            vec![
                seg(Op::Equal, "line1"),
                seg(Op::Delete, "line2"),
                seg(Op::Insert, "changed"),
                seg(Op::Equal, "line3"),
            ]
        );
    }

    #[test]
    fn multi_line_gap_is_joined() {
        let a = lines(&["keep", "x1", "x2"]);
        let b = lines(&["keep", "y1", "y2", "y3"]);
        assert_eq!(
            diff_lines(&a, &b),
            vec![
                seg(Op::Equal, "keep"),
                seg(Op::Delete, "x1\nx2"),
                seg(Op::Insert, "y1\ny2\ny3"),
            ]
        );
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        let a = lines(&["alpha  ", "beta"]);
        let b = lines(&["alpha", "beta\t"]);
        let segments = diff_lines(&a, &b);
        assert!(segments.iter().all(|s| s.op == Op::Equal));
    }

    #[test]
    fn one_sided_trailing_separator_matches() {
        // The last property of a structure omits the comma; the compared
        // line gains it and the pair registers as equal.
        let a = lines(&["  \"key\": 1"]);
        let b = lines(&["  \"key\": 1,"]);
        let segments = diff_lines(&a, &b);
        assert_eq!(segments, vec![seg(Op::Equal, "  \"key\": 1,")]);
    }

    #[test]
    fn in_place_variant_mutates_caller_lines() {
        let mut a = lines(&["  \"key\": 1"]);
        let mut b = lines(&["  \"key\": 1,"]);
        diff_lines_in_place(&mut a, &mut b);
        assert_eq!(a[0], "  \"key\": 1,");
    }

    #[test]
    fn default_variant_leaves_caller_lines_alone() {
        let a = lines(&["  \"key\": 1"]);
        let b = lines(&["  \"key\": 1,"]);
        diff_lines(&a, &b);
        assert_eq!(a[0], "  \"key\": 1");
    }

    #[test]
    fn empty_inputs_yield_empty_script() {
        assert!(diff_lines(&[], &[]).is_empty());
    }

    #[test]
    fn ragged_tail_is_a_pure_gap() {
        let a = lines(&["one"]);
        let b = lines(&["one", "two", "three"]);
        assert_eq!(
            diff_lines(&a, &b),
            vec![seg(Op::Equal, "one"), seg(Op::Insert, "two\nthree")]
        );
    }
}
