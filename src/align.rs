// Shortest-edit-script alignment over abstract indexable sequences.
//
// Implements the forward variant of Myers' O((N+M)D) algorithm with
// common-affix trimming. The caller supplies only the two sequence lengths,
// an index-pair equality predicate, and a callback; the aligner reports
// every maximal common run between the sequences, in increasing index
// order, such that the complement is a minimal delete+insert set.
//
// The search stores one furthest-reaching coordinate vector per explored
// edit distance so the terminal point can be backtracked to a list of
// `CommonRun`s. All trace state is allocated per call; independent calls
// may run concurrently.

use log::trace;

// ---------------------------------------------------------------------------
// Common runs
// ---------------------------------------------------------------------------

/// A maximal contiguous span where both sequences agree under the
/// caller's equality predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonRun {
    /// Number of agreeing index pairs.
    pub len: usize,
    /// Starting index of the run in sequence A.
    pub a_index: usize,
    /// Starting index of the run in sequence B.
    pub b_index: usize,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Align two sequences of lengths `a_len` and `b_len`.
///
/// `is_common(ai, bi)` decides whether position `ai` of A matches position
/// `bi` of B; it is never evaluated outside `[0, a_len) x [0, b_len)`.
/// `found_common(len, a_index, b_index)` is invoked once per maximal common
/// run, non-overlapping and in increasing index order.
///
/// Pure computation: no error paths, terminates within `a_len + b_len`
/// outer search iterations.
pub fn align<F, G>(a_len: usize, b_len: usize, mut is_common: F, mut found_common: G)
where
    F: FnMut(usize, usize) -> bool,
    G: FnMut(usize, usize, usize),
{
    let mut a_start = 0usize;
    let mut b_start = 0usize;
    let mut a_end = a_len;
    let mut b_end = b_len;

    // Common prefix: shrink both starts while the predicate holds.
    while a_start < a_end && b_start < b_end && is_common(a_start, b_start) {
        a_start += 1;
        b_start += 1;
    }
    if a_start > 0 {
        found_common(a_start, 0, 0);
    }
    if a_start == a_end && b_start == b_end {
        // Fully equal: the prefix scan consumed everything.
        return;
    }

    // Common suffix: shrink both ends. Reported only after the middle is
    // resolved so callback order stays position-sorted.
    let mut suffix_len = 0usize;
    while a_start < a_end && b_start < b_end && is_common(a_end - 1, b_end - 1) {
        a_end -= 1;
        b_end -= 1;
        suffix_len += 1;
    }

    if a_start < a_end && b_start < b_end {
        for run in middle_runs(a_start, a_end, b_start, b_end, &mut is_common) {
            found_common(run.len, run.a_index, run.b_index);
        }
    }

    if suffix_len > 0 {
        found_common(suffix_len, a_end, b_end);
    }
}

// ---------------------------------------------------------------------------
// Myers forward search + backtrack
// ---------------------------------------------------------------------------

/// Find the common runs inside the non-trivial middle window
/// `[a_start, a_end) x [b_start, b_end)`.
///
/// Window invariants established by the affix trim: both dimensions are
/// non-empty, and the corner pairs `(a_start, b_start)` and
/// `(a_end-1, b_end-1)` do not match.
fn middle_runs<F>(
    a_start: usize,
    a_end: usize,
    b_start: usize,
    b_end: usize,
    is_common: &mut F,
) -> Vec<CommonRun>
where
    F: FnMut(usize, usize) -> bool,
{
    let n = a_end - a_start;
    let m = b_end - b_start;
    let total = n + m;
    let offset = total as isize;

    // v[offset + k] = furthest x reached on diagonal k (x relative to the
    // window). One snapshot per depth: backtracking needs the history.
    let mut v = vec![0usize; 2 * total + 1];
    let mut trace: Vec<Vec<usize>> = Vec::new();
    let mut d_final = 0isize;

    'search: for d in 0..=total as isize {
        // Snapshot before this depth's updates; during backtracking the
        // step at depth d reads the furthest-reaching points of depth d-1.
        trace.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let idx = (offset + k) as usize;

            // Extend from k+1 (an insertion) or k-1 (a deletion).
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = (x as isize - k) as usize;

            // Follow the snake.
            while x < n && y < m && is_common(a_start + x, b_start + y) {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                d_final = d;
                break 'search;
            }
        }
    }

    trace!("middle window {n}x{m} resolved at edit distance {d_final}");
    backtrack(&trace, d_final, n, m, a_start, b_start)
}

/// Walk the terminal point back to the origin, collecting diagonal
/// stretches as `CommonRun`s, then return them in forward order.
fn backtrack(
    trace: &[Vec<usize>],
    d_final: isize,
    n: usize,
    m: usize,
    a_start: usize,
    b_start: usize,
) -> Vec<CommonRun> {
    let offset = (n + m) as isize;
    let mut runs: Vec<CommonRun> = Vec::new();
    let mut x = n;
    let mut y = m;

    for d in (1..=d_final).rev() {
        let v = &trace[d as usize];
        let k = x as isize - y as isize;
        let idx = (offset + k) as usize;

        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(offset + prev_k) as usize];
        let prev_y = (prev_x as isize - prev_k) as usize;

        // Diagonal stretch between the predecessor's edit step and (x, y).
        let mut run_len = 0usize;
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            run_len += 1;
        }
        if run_len > 0 {
            runs.push(CommonRun {
                len: run_len,
                a_index: a_start + x,
                b_index: b_start + y,
            });
        }

        // The single non-diagonal step down to depth d-1.
        x = prev_x;
        y = prev_y;
    }

    // Residual snake from the origin at depth 0.
    if x > 0 && y > 0 {
        debug_assert_eq!(x, y);
        runs.push(CommonRun {
            len: x,
            a_index: a_start,
            b_index: b_start,
        });
    }

    runs.reverse();
    runs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
