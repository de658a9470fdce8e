// Structured values and pattern matchers.
//
// `Value` is the owned tree the engine diffs: JSON-like leaves and
// containers plus `Matcher`, the placeholder accepted in expected-value
// positions. Owned trees cannot be cyclic, so normalization needs no
// visited-set (unlike implementations over reference graphs).
//
// - `serialize` — deterministic display-line rendering
// - `json`      — serde_json interop (feature "json")

pub mod serialize;

#[cfg(feature = "json")]
pub mod json;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Value tree
// ---------------------------------------------------------------------------

/// A structured value under comparison.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Matcher(Matcher),
}

impl Value {
    /// Runtime type label used by the type-mismatch header.
    pub fn type_label(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Seq(_) => "array",
            Value::Map(_) => "object",
            Value::Matcher(_) => "matcher",
        }
    }

    /// Whether this is a non-null structured container (sequence or map).
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Seq(_) | Value::Map(_))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn seq(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(items.into_iter().collect())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Matcher(a), Value::Matcher(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

// ---------------------------------------------------------------------------
// Pattern matchers
// ---------------------------------------------------------------------------

/// A placeholder accepted in an expected-value position, matching a family
/// of concrete values instead of one value by equality.
#[derive(Clone)]
pub enum Matcher {
    /// Matches exactly one concrete value, structurally.
    Literal(Box<Value>),
    /// Matches whatever the predicate accepts; `label` is the display form.
    Predicate {
        test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
        label: String,
    },
}

impl Matcher {
    pub fn literal(value: impl Into<Value>) -> Self {
        Matcher::Literal(Box::new(value.into()))
    }

    pub fn predicate(
        label: impl Into<String>,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Matcher::Predicate {
            test: Arc::new(test),
            label: label.into(),
        }
    }

    /// Run the matcher against a candidate value.
    pub fn matches(&self, candidate: &Value) -> bool {
        match self {
            Matcher::Literal(value) => value.as_ref() == candidate,
            Matcher::Predicate { test, .. } => test(candidate),
        }
    }

    /// The display label of the expected family of values.
    pub fn label(&self) -> String {
        match self {
            Matcher::Literal(value) => serialize::serialize_compact(value),
            Matcher::Predicate { label, .. } => label.clone(),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Matcher::Predicate { label, .. } => {
                f.debug_struct("Predicate").field("label", label).finish()
            }
        }
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Matcher::Literal(a), Matcher::Literal(b)) => a == b,
            (
                Matcher::Predicate { test: ta, label: la },
                Matcher::Predicate { test: tb, label: lb },
            ) => Arc::ptr_eq(ta, tb) && la == lb,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
