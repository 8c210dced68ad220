//! Single-line `key: value` rendering used by the `Display` impls.
//!
//! Fields are printed in the order their serde representation yields them,
//! which for structs is declaration order. Strings are JSON-quoted, nested
//! values are rendered as compact JSON and absent optional fields are skipped.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Replacement text for masked secrets.
pub const MASK: &str = "***";

/// Writes comma-separated `key: value` pairs to a formatter.
pub struct PairWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    masked: &'a [&'a str],
    first: bool,
}

impl<'a, 'b> PairWriter<'a, 'b> {
    /// Create a writer that masks the values of the given keys
    pub fn new(f: &'a mut fmt::Formatter<'b>, masked: &'a [&'a str]) -> Self {
        Self {
            f,
            masked,
            first: true,
        }
    }

    /// Write a single pair
    pub fn pair(&mut self, key: &str, value: &Value) -> fmt::Result {
        if !self.first {
            self.f.write_str(", ")?;
        }
        self.first = false;

        if self.masked.contains(&key) && is_set(value) {
            write!(self.f, "{key}: \"{MASK}\"")
        } else {
            write!(self.f, "{key}: {}", render(value))
        }
    }

    /// Write every entry of an object in its stored order
    pub fn object(&mut self, map: &Map<String, Value>) -> fmt::Result {
        for (key, value) in map {
            self.pair(key, value)?;
        }
        Ok(())
    }

    /// Write every entry of an object in sorted key order
    pub fn object_sorted(&mut self, map: &Map<String, Value>) -> fmt::Result {
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();
        for key in keys {
            self.pair(key, &map[key.as_str()])?;
        }
        Ok(())
    }

    /// Serialize a value and write its fields
    pub fn serialized<T: Serialize>(&mut self, value: &T) -> fmt::Result {
        match serde_json::to_value(value).map_err(|_| fmt::Error)? {
            Value::Object(map) => self.object(&map),
            other => self.f.write_str(&render(&other)),
        }
    }
}

/// Render a struct's serde representation as a single line.
pub fn display_serialized<T: Serialize>(
    f: &mut fmt::Formatter<'_>,
    value: &T,
    masked: &[&str],
) -> fmt::Result {
    PairWriter::new(f, masked).serialized(value)
}

fn render(value: &Value) -> String {
    // Value's Display is compact JSON, which quotes and escapes strings.
    value.to_string()
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
