//! Fields shared by every notification and the outer layer of its wire format.

use super::{Provider, TypedNotification};
use crate::coerce;
use crate::error::{json_kind, KumaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::trace;

/// Keys owned by the envelope; a generic detail never stores them.
pub(crate) const ENVELOPE_KEYS: [&str; 7] = [
    "id",
    "name",
    "active",
    "isDefault",
    "applyExisting",
    "userId",
    "type",
];

/// Keys carried by the outer object only, never inside `config`.
const OUTER_ONLY_KEYS: [&str; 3] = ["id", "active", "userId"];

/// Identity and activation state common to every notification provider.
///
/// Besides the public fields, a decoded envelope remembers the discriminator
/// from its config, the raw config string and the original wire bytes, so it
/// can later be reinterpreted with [`Envelope::convert`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Envelope {
    /// Server-assigned ID; 0 means not yet persisted
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Whether the notification is enabled
    #[serde(rename = "active")]
    pub is_active: bool,

    /// Owning user
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Attach automatically to newly created monitors
    #[serde(rename = "isDefault")]
    pub is_default: bool,

    /// Also attach to every existing monitor when saved
    #[serde(rename = "applyExisting")]
    pub apply_existing: bool,

    #[serde(skip)]
    pub(crate) type_name: String,

    #[serde(skip)]
    pub(crate) config: String,

    #[serde(skip)]
    pub(crate) raw: Vec<u8>,
}

/// Outer wire object as sent by the server.
#[derive(Deserialize)]
struct WireIn {
    #[serde(default, deserialize_with = "coerce::opt_int")]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "coerce::bool_or_int")]
    active: bool,
    #[serde(default, rename = "userId", deserialize_with = "coerce::opt_int")]
    user_id: Option<i64>,
    #[serde(default, rename = "isDefault", deserialize_with = "coerce::bool_or_int")]
    is_default: bool,
    config: String,
}

#[derive(Serialize)]
struct WireOut<'a> {
    id: i64,
    name: &'a str,
    active: bool,
    #[serde(rename = "userId")]
    user_id: i64,
    #[serde(rename = "isDefault")]
    is_default: bool,
    config: String,
}

impl Envelope {
    /// Create an active, unsaved envelope with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            ..Self::default()
        }
    }

    /// Decode only the envelope of a wire notification.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with_config(bytes).map(|(envelope, _)| envelope)
    }

    /// Decode the envelope and hand back the parsed inner config.
    pub(crate) fn decode_with_config(bytes: &[u8]) -> Result<(Self, Map<String, Value>)> {
        let wire: WireIn = serde_json::from_slice(bytes).map_err(KumaError::Envelope)?;
        let config: Map<String, Value> =
            serde_json::from_str(&wire.config).map_err(KumaError::Config)?;

        let type_name = match config.get("type") {
            None => return Err(KumaError::MissingDiscriminator),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(KumaError::InvalidDiscriminatorType {
                    found: json_kind(other),
                })
            }
        };

        let apply_existing = match config.get("applyExisting") {
            None => return Err(KumaError::MissingApplyExisting),
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(KumaError::InvalidApplyExistingType {
                    found: json_kind(other),
                })
            }
        };

        let envelope = Self {
            id: wire.id.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            is_active: wire.active,
            user_id: wire.user_id.unwrap_or_default(),
            is_default: wire.is_default,
            apply_existing,
            type_name,
            config: wire.config,
            raw: bytes.to_vec(),
        };
        trace!(
            id = envelope.id,
            notification_type = %envelope.type_name,
            "decoded notification envelope"
        );

        Ok((envelope, config))
    }

    /// Discriminator read from the config; empty unless decoded
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Raw config string as received; empty unless decoded
    #[must_use]
    pub fn config(&self) -> &str {
        &self.config
    }

    /// Original wire bytes; empty unless decoded
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Returns true if the notification has not been saved yet
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Reinterpret the original wire payload as provider `P`.
    pub fn convert<P: Provider>(&self) -> Result<TypedNotification<P>> {
        TypedNotification::decode(&self.raw).map_err(|err| match err {
            KumaError::Envelope(source) | KumaError::Config(source) => KumaError::Conversion {
                target: P::TYPE,
                source,
            },
            other => other,
        })
    }

    /// Build the flat payload: envelope fields, overlaid by `details`, then `type`.
    pub(crate) fn merge(&self, type_name: &str, details: Map<String, Value>) -> Result<Map<String, Value>> {
        let mut merged = to_object(self, "notification envelope")?;
        merged.extend(details);
        merged.insert("type".to_string(), Value::String(type_name.to_string()));
        Ok(merged)
    }

    /// Wrap a flat payload into the outer wire object with its `config` string.
    pub(crate) fn wrap(&self, mut payload: Map<String, Value>) -> Result<Vec<u8>> {
        for key in OUTER_ONLY_KEYS {
            payload.remove(key);
        }

        let wire = WireOut {
            id: self.id,
            name: &self.name,
            active: self.is_active,
            user_id: self.user_id,
            is_default: self.is_default,
            config: serde_json::to_string(&payload)?,
        };
        trace!(id = self.id, keys = payload.len(), "encoded notification config");
        Ok(serde_json::to_vec(&wire)?)
    }
}

/// Rebuild wire bytes from a flat payload by lifting the outer fields out of it.
pub(crate) fn wire_from_payload(payload: &Map<String, Value>) -> Result<Vec<u8>> {
    let mut outer = Map::new();
    for key in ["id", "name", "active", "userId", "isDefault"] {
        if let Some(value) = payload.get(key) {
            outer.insert(key.to_string(), value.clone());
        }
    }

    let mut config = payload.clone();
    for key in OUTER_ONLY_KEYS {
        config.remove(key);
    }
    outer.insert("config".to_string(), Value::String(serde_json::to_string(&config)?));

    Ok(serde_json::to_vec(&outer)?)
}

// Retained wire state is not part of a notification's value.
impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.is_active == other.is_active
            && self.user_id == other.user_id
            && self.is_default == other.is_default
            && self.apply_existing == other.apply_existing
    }
}

impl Eq for Envelope {}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

/// Serialize a value that must come out as a JSON object.
pub(crate) fn to_object<T: Serialize>(value: &T, what: &'static str) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(KumaError::NotAnObject(what)),
    }
}
