// Diff rendering: ties alignment, cleanup, and normalization together.
//
// Provides the entry points the assertion layer calls when an equality
// check fails:
//   - `diff_values`    — structured value diff, line-oriented
//   - `diff_text`      — line-by-line text diff with inline emphasis
//   - `diff_arguments` — received-oriented call-argument diff
//
// Rendering conventions: Equal output is dimmed behind a two-space gutter,
// the expected side is highlighted behind `-`, the received side behind
// `+`, and sub-line differences are emphasized (inverse video).

use log::debug;

use crate::markup::Markup;
use crate::normalize::{normalize, normalize_in_place};
use crate::script::{Op, Segment, cleanup_semantic, diff_chars, diff_lines};
use crate::value::Value;
use crate::value::serialize::{serialize, serialize_compact};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for diff rendering.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Apply semantic cleanup to character-level scripts.
    pub cleanup: bool,
    /// Styling roles for rendered output.
    pub markup: Markup,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            cleanup: true,
            markup: Markup::ansi(),
        }
    }
}

impl DiffOptions {
    /// Options with styling disabled, for piped output and tests.
    pub fn plain() -> Self {
        Self {
            cleanup: true,
            markup: Markup::plain(),
        }
    }

    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = false;
        self
    }
}

// ---------------------------------------------------------------------------
// Value diff
// ---------------------------------------------------------------------------

/// Render the difference between two structured values.
///
/// Values of different runtime types get a type-mismatch header ahead of
/// the diff. Two text values delegate to [`diff_text`].
pub fn diff_values(expected: &Value, received: &Value, opts: &DiffOptions) -> String {
    let mut out: Vec<String> = Vec::new();

    if expected.type_label() != received.type_label() {
        out.push(
            opts.markup
                .expected(&format!("Expected type: {}", expected.type_label())),
        );
        out.push(
            opts.markup
                .received(&format!("Received type: {}", received.type_label())),
        );
        out.push(String::new());
    }

    if let (Value::Text(text_a), Value::Text(text_b)) = (expected, received) {
        return diff_text(text_a, text_b, opts);
    }

    let (norm_expected, norm_received) = normalize(expected, received, opts);
    let expected_lines = serialize(&norm_expected);
    let received_lines = serialize(&norm_received);
    let segments = diff_lines(&expected_lines, &received_lines);
    debug!(
        "value diff: {} vs {} display lines, {} segments",
        expected_lines.len(),
        received_lines.len(),
        segments.len()
    );

    for segment in &segments {
        match segment.op {
            Op::Equal => out.push(format!("  {}", opts.markup.dim(&segment.text))),
            Op::Delete => {
                for line in segment.text.split('\n') {
                    out.push(opts.markup.expected(&format!("- {line}")));
                }
            }
            Op::Insert => {
                for line in segment.text.split('\n') {
                    out.push(opts.markup.received(&format!("+ {line}")));
                }
            }
        }
    }

    out.join("\n")
}

// ---------------------------------------------------------------------------
// Text diff
// ---------------------------------------------------------------------------

/// Render a line-by-line diff of two texts.
pub fn diff_text(a: &str, b: &str, opts: &DiffOptions) -> String {
    let mut out = Vec::new();
    diff_text_into(a, b, &mut out, opts);
    out.join("\n")
}

/// Like [`diff_text`], appending rendered lines to a caller-owned buffer.
///
/// Equal-index line pairs that are identical render once, dimmed.
/// Differing pairs render an expected and a received line with the
/// differing character spans emphasized. Ragged tails render as whole
/// deletions or insertions.
pub fn diff_text_into(a: &str, b: &str, out: &mut Vec<String>, opts: &DiffOptions) {
    let a_lines: Vec<&str> = a.split('\n').collect();
    let b_lines: Vec<&str> = b.split('\n').collect();
    let shared = a_lines.len().min(b_lines.len());

    for i in 0..shared {
        if a_lines[i] == b_lines[i] {
            out.push(format!("  {}", opts.markup.dim(a_lines[i])));
        } else {
            let mut segments = diff_chars(a_lines[i], b_lines[i]);
            if opts.cleanup {
                segments = cleanup_semantic(segments);
            }
            out.push(render_inline(&segments, Op::Delete, opts));
            out.push(render_inline(&segments, Op::Insert, opts));
        }
    }
    for line in &a_lines[shared..] {
        out.push(opts.markup.expected(&format!("- {line}")));
    }
    for line in &b_lines[shared..] {
        out.push(opts.markup.received(&format!("+ {line}")));
    }
}

/// Render one side of a character-level script as a gutter-prefixed line,
/// emphasizing the spans unique to that side.
fn render_inline(segments: &[Segment], edit_op: Op, opts: &DiffOptions) -> String {
    let markup = &opts.markup;
    let style = |text: &str| match edit_op {
        Op::Delete => markup.expected(text),
        _ => markup.received(text),
    };
    let sign = if edit_op == Op::Delete { "- " } else { "+ " };

    let mut line = style(sign);
    for segment in segments {
        if segment.op == Op::Equal {
            line.push_str(&style(&segment.text));
        } else if segment.op == edit_op {
            line.push_str(&markup.emphasis(&style(&segment.text)));
        }
    }
    line
}

// ---------------------------------------------------------------------------
// Argument-list diff
// ---------------------------------------------------------------------------

/// Render a received-oriented diff of two argument lists.
///
/// Answers "what is different about what was received": Equal tokens
/// render dimmed, Insert tokens highlighted, Delete tokens are omitted.
/// The separator after a token stays outside the highlighted span.
pub fn diff_arguments(expected: &[Value], received: &[Value], opts: &DiffOptions) -> Vec<String> {
    let mut norm_expected = expected.to_vec();
    let mut norm_received = received.to_vec();
    let shared = norm_expected.len().min(norm_received.len());
    for i in 0..shared {
        normalize_in_place(&mut norm_expected[i], &mut norm_received[i], opts);
    }

    let expected_tokens: Vec<String> = norm_expected.iter().map(serialize_compact).collect();
    let received_tokens: Vec<String> = norm_received.iter().map(serialize_compact).collect();
    let segments = diff_lines(&expected_tokens, &received_tokens);

    let mut tokens: Vec<(Op, String)> = Vec::new();
    for segment in &segments {
        match segment.op {
            Op::Equal => tokens.push((Op::Equal, segment.text.clone())),
            Op::Insert => {
                for token in segment.text.split('\n') {
                    tokens.push((Op::Insert, token.to_string()));
                }
            }
            Op::Delete => {}
        }
    }

    let last = tokens.len().saturating_sub(1);
    tokens
        .iter()
        .enumerate()
        .map(|(i, (op, token))| {
            let styled = match op {
                Op::Insert => opts.markup.received(token),
                _ => opts.markup.dim(token),
            };
            if i != last {
                format!("{styled},")
            } else {
                styled
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Matcher;

    fn opts() -> DiffOptions {
        DiffOptions::plain()
    }

    #[test]
    fn type_mismatch_header_names_both_types() {
        let rendered = diff_values(&Value::Number(42.0), &Value::text("string value"), &opts());
        assert!(rendered.contains("Expected type: number"));
        assert!(rendered.contains("Received type: string"));
    }

    #[test]
    fn equal_values_render_dimmed_only() {
        let v = Value::map([("a", Value::from(1i64))]);
        let rendered = diff_values(&v, &v, &opts());
        for line in rendered.lines() {
            assert!(line.starts_with("  "), "unexpected line: {line:?}");
        }
    }

    #[test]
    fn map_diff_marks_changed_entry() {
        let expected = Value::map([("a", Value::from(1i64)), ("b", Value::from(2i64))]);
        let received = Value::map([("a", Value::from(1i64)), ("b", Value::from(3i64))]);
        let rendered = diff_values(&expected, &received, &opts());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  {",
                "    \"a\": 1,",
                "-   \"b\": 2",
                "+   \"b\": 3",
                "  }",
            ]
        );
    }

    #[test]
    fn matcher_that_matches_produces_no_edit_lines() {
        let expected = Value::map([(
            "n",
            Value::Matcher(Matcher::predicate("any number", |v| {
                matches!(v, Value::Number(_))
            })),
        )]);
        let received = Value::map([("n", Value::Number(5.0))]);
        let rendered = diff_values(&expected, &received, &opts());
        assert!(!rendered.lines().any(|l| l.starts_with('-')));
        assert!(!rendered.lines().any(|l| l.starts_with('+')));
    }

    #[test]
    fn text_values_delegate_to_text_diff() {
        let rendered = diff_values(&Value::text("one\ntwo"), &Value::text("one\n2"), &opts());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  one");
        assert!(lines[1].starts_with("- "));
        assert!(lines[2].starts_with("+ "));
    }

    #[test]
    fn text_diff_handles_ragged_tails() {
        let rendered = diff_text("a", "a\nb\nc", &opts());
        assert_eq!(
            rendered.lines().collect::<Vec<_>>(),
            vec!["  a", "+ b", "+ c"]
        );
    }

    #[test]
    fn text_diff_into_appends_to_buffer() {
        let mut out = vec!["existing".to_string()];
        diff_text_into("x", "x", &mut out, &opts());
        assert_eq!(out, vec!["existing", "  x"]);
    }

    #[test]
    fn argument_diff_omits_deleted_tokens() {
        let expected = [Value::from(1i64), Value::from(2i64)];
        let received = [Value::from(1i64), Value::from(3i64)];
        let tokens = diff_arguments(&expected, &received, &opts());
        assert_eq!(tokens, vec!["1,", "3"]);
    }

    #[test]
    fn argument_diff_separator_follows_all_but_last_token() {
        let expected = [Value::from(1i64)];
        let received = [Value::from(1i64), Value::from(2i64), Value::from(3i64)];
        let tokens = diff_arguments(&expected, &received, &opts());
        assert_eq!(tokens, vec!["1,", "2,", "3"]);
    }

    #[test]
    fn argument_diff_resolves_matchers() {
        let expected = [Value::Matcher(Matcher::predicate("any", |_| true))];
        let received = [Value::text("hello")];
        let tokens = diff_arguments(&expected, &received, &opts());
        assert_eq!(tokens, vec!["\"hello\""]);
    }

    #[test]
    fn empty_argument_lists_render_nothing() {
        assert!(diff_arguments(&[], &[], &opts()).is_empty());
    }
}
