// serde_json interop.
//
// Concrete JSON trees convert losslessly in both directions. Matchers have
// no JSON form: converting a value that still contains one is an error,
// which keeps the JSON surface restricted to concrete data.

use std::collections::BTreeMap;

use super::Value;

#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("invalid JSON input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("matcher <{0}> has no JSON representation")]
    MatcherPresent(String),
}

/// Parse a JSON document into a concrete [`Value`] tree.
pub fn from_json_str(input: &str) -> Result<Value, JsonError> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;
    Ok(Value::from(parsed))
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        Ok(match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Seq(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), serde_json::Value::try_from(v)?)))
                    .collect::<Result<_, JsonError>>()?,
            ),
            Value::Matcher(m) => return Err(JsonError::MatcherPresent(m.label())),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Matcher;

    #[test]
    fn parse_object() {
        let value = from_json_str(r#"{"a": 1, "b": [true, null]}"#).unwrap();
        assert_eq!(
            value,
            Value::map([
                ("a", Value::from(1i64)),
                ("b", Value::seq([Value::Bool(true), Value::Null])),
            ])
        );
    }

    #[test]
    fn parse_error_is_reported() {
        assert!(matches!(from_json_str("{oops"), Err(JsonError::Parse(_))));
    }

    #[test]
    fn concrete_round_trip() {
        let value = Value::map([
            ("n", Value::Number(2.5)),
            ("s", Value::text("x")),
            ("v", Value::seq([Value::Null])),
        ]);
        let json = serde_json::Value::try_from(&value).unwrap();
        assert_eq!(Value::from(json), value);
    }

    #[test]
    fn matcher_has_no_json_form() {
        let value = Value::Matcher(Matcher::predicate("anything", |_| true));
        assert!(matches!(
            serde_json::Value::try_from(&value),
            Err(JsonError::MatcherPresent(_))
        ));
    }
}
