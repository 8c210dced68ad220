//! Fallback details for providers without a compiled-in schema.

use super::envelope::ENVELOPE_KEYS;
use serde_json::{Map, Value};

/// Untyped details of a notification whose provider is not known to this crate.
///
/// Holds every config key except the ones owned by the envelope, so payloads
/// from newer servers survive a decode/encode cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericDetails {
    type_name: String,
    fields: Map<String, Value>,
}

impl GenericDetails {
    /// Create generic details; envelope keys in `fields` are dropped
    #[must_use]
    pub fn new(type_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        let mut fields = fields;
        for key in ENVELOPE_KEYS {
            fields.remove(key);
        }
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Provider discriminator
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Provider-specific fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Get a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field as a string
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Set a field; envelope keys are ignored
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if !ENVELOPE_KEYS.contains(&key.as_str()) {
            self.fields.insert(key, value);
        }
    }

    /// Fields plus the discriminator, leaving the stored map untouched.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.fields.clone();
        map.insert("type".to_string(), Value::String(self.type_name.clone()));
        map
    }
}
