//! Lenient serde adapters for fields whose JSON type drifts between server
//! versions (SQLite booleans stored as integers, numbers sent as strings,
//! JSON documents embedded as strings).

use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Deserialize a boolean that may arrive as `true`/`false`, `0`/`1` or a string.
pub fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    loose_bool(&value)
        .map(|b| b.unwrap_or(false))
        .ok_or_else(|| de::Error::custom(format!("expected boolean, got {value}")))
}

/// Like [`bool_or_int`] but absent, `null` and `""` become `None`.
pub fn opt_bool_or_int<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    loose_bool(&value).ok_or_else(|| de::Error::custom(format!("expected boolean, got {value}")))
}

/// Deserialize an integer that may arrive as a number or a numeric string.
/// `null` and `""` become `None`. Whole floats outside the `i64` range are rejected.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_i64))
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected integer, got {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected integer, got {s:?}"))),
        other => Err(de::Error::custom(format!("expected integer, got {other}"))),
    }
}

// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_i64(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then(|| f as i64)
}

// Outer Option is "could not interpret", inner Option is "empty".
fn loose_bool(value: &Value) -> Option<Option<bool>> {
    match value {
        Value::Null => Some(None),
        Value::Bool(b) => Some(Some(*b)),
        Value::Number(n) => n.as_i64().map(|i| Some(i != 0)),
        Value::String(s) => match s.trim() {
            "" => Some(None),
            "true" | "1" => Some(Some(true)),
            "false" | "0" => Some(Some(false)),
            _ => None,
        },
        _ => None,
    }
}

/// A string map carried on the wire as a JSON document inside a string.
///
/// `null` and `""` decode to `None`; an empty map encodes as `"{}"`.
/// Number and boolean values are read as their JSON text, so a hand-typed
/// `{"X-Retry": 3}` decodes as `"3"`. Nested values and `null` are rejected.
pub mod embedded_map {
    use super::{de, ser, BTreeMap, Deserialize, Deserializer, Serializer, Value};
    use serde_json::Map;

    pub fn serialize<S>(map: &Option<BTreeMap<String, String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match map {
            Some(map) => {
                let encoded = serde_json::to_string(map).map_err(ser::Error::custom)?;
                serializer.serialize_str(&encoded)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => {
                let object: Map<String, Value> =
                    serde_json::from_str(&s).map_err(de::Error::custom)?;
                string_map(object).map(Some).map_err(de::Error::custom)
            }
            // Some server versions store the object unencoded.
            Value::Object(object) => string_map(object).map(Some).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected JSON-encoded string map, got {other}"
            ))),
        }
    }

    fn string_map(object: Map<String, Value>) -> Result<BTreeMap<String, String>, String> {
        object
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key, s)),
                Value::Number(_) | Value::Bool(_) => Ok((key, value.to_string())),
                other => Err(format!("header {key:?} must be a string, got {other}")),
            })
            .collect()
    }
}
