// Deterministic display-line rendering of values.
//
// `serialize` produces the multi-line form consumed by the line-level
// value diff: containers open and close on their own lines, entries are
// indented two spaces, and every entry except the last carries a trailing
// comma (the artifact the line comparison's separator normalization
// absorbs). `serialize_compact` is the single-line form used for
// argument-list tokens. Map keys render in `BTreeMap` order, so output is
// deterministic for equal values.

use super::{Matcher, Value};

const INDENT: &str = "  ";

/// Render a value as ordered display lines.
pub fn serialize(value: &Value) -> Vec<String> {
    match value {
        Value::Seq(items) if !items.is_empty() => {
            let mut out = vec!["[".to_string()];
            push_entries(&mut out, items.iter().map(serialize));
            out.push("]".to_string());
            out
        }
        Value::Map(entries) if !entries.is_empty() => {
            let mut out = vec!["{".to_string()];
            push_entries(
                &mut out,
                entries.iter().map(|(key, child)| {
                    let mut lines = serialize(child);
                    lines[0] = format!("{key:?}: {}", lines[0]);
                    lines
                }),
            );
            out.push("}".to_string());
            out
        }
        other => vec![leaf_text(other)],
    }
}

/// Render a value on a single line.
pub fn serialize_compact(value: &Value) -> String {
    match value {
        Value::Seq(items) => {
            let inner: Vec<String> = items.iter().map(serialize_compact).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Map(entries) => {
            let inner: Vec<String> = entries
                .iter()
                .map(|(key, child)| format!("{key:?}: {}", serialize_compact(child)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        other => leaf_text(other),
    }
}

/// Indent each entry's lines and attach the separator to every entry
/// except the last.
fn push_entries(out: &mut Vec<String>, entries: impl ExactSizeIterator<Item = Vec<String>>) {
    let last = entries.len().saturating_sub(1);
    for (i, mut lines) in entries.enumerate() {
        if i != last {
            if let Some(tail) = lines.last_mut() {
                tail.push(',');
            }
        }
        for line in lines {
            out.push(format!("{INDENT}{line}"));
        }
    }
}

fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::Text(text) => format!("{text:?}"),
        Value::Matcher(matcher) => matcher_text(matcher),
        Value::Seq(_) => "[]".to_string(),
        Value::Map(_) => "{}".to_string(),
    }
}

fn matcher_text(matcher: &Matcher) -> String {
    match matcher {
        Matcher::Literal(value) => serialize_compact(value),
        Matcher::Predicate { label, .. } => format!("<{label}>"),
    }
}

/// Integral finite numbers render without a fractional part.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
