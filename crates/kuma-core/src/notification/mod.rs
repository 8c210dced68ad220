//! Notification resources and their double-encoded wire format.
//!
//! The server returns a notification as an outer object whose `config` field
//! is a *string* holding a second JSON document with the provider fields,
//! the `type` discriminator and `applyExisting`:
//!
//! ```json
//! {"id":1,"name":"My Slack Alert","active":true,"userId":1,"isDefault":true,
//!  "config":"{\"applyExisting\":true,\"isDefault\":true,\"name\":\"My Slack Alert\",\"slackwebhookURL\":\"https://hooks.slack.com/services/xxx\",\"type\":\"slack\"}"}
//! ```
//!
//! [`Notification`] decodes this into an [`Envelope`] plus [`Details`],
//! dispatching on `type`. Unknown discriminators decode into
//! [`GenericDetails`] instead of failing. [`TypedNotification`] is the
//! statically typed form for callers that know the provider up front.

mod envelope;
mod generic;
mod providers;
mod registry;

pub use envelope::Envelope;
pub use generic::GenericDetails;
pub use providers::*;
pub use registry::{Details, PROVIDER_TYPES};

use crate::error::{KumaError, Result};
use crate::pretty::PairWriter;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A notification provider schema with a fixed wire discriminator.
pub trait Provider:
    Serialize + DeserializeOwned + Clone + fmt::Debug + PartialEq + Default + Into<Details>
{
    /// Discriminator stored in the config's `type` key
    const TYPE: &'static str;
}

/// A decoded notification of any provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Shared identity and activation fields
    pub envelope: Envelope,

    /// Provider-specific fields
    pub details: Details,
}

impl Notification {
    /// Assemble a notification from its parts
    #[must_use]
    pub fn new(envelope: Envelope, details: impl Into<Details>) -> Self {
        Self {
            envelope,
            details: details.into(),
        }
    }

    /// Decode a wire notification, dispatching on its discriminator.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (envelope, config) = Envelope::decode_with_config(bytes)?;
        let details = Details::decode(envelope.type_name(), config)?;
        Ok(Self { envelope, details })
    }

    /// Decode a wire notification into generic details regardless of provider.
    pub fn decode_generic(bytes: &[u8]) -> Result<Self> {
        let (envelope, config) = Envelope::decode_with_config(bytes)?;
        let details = Details::Generic(GenericDetails::new(envelope.type_name(), config));
        Ok(Self { envelope, details })
    }

    /// Build a notification from a flat payload as produced by [`Notification::payload`].
    ///
    /// The payload must carry `type` and `applyExisting` like any config;
    /// an absent `active` means inactive.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self> {
        Self::decode(&envelope::wire_from_payload(payload)?)
    }

    /// Provider discriminator
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.details.type_name()
    }

    /// Flat payload: envelope fields merged with details and `type`.
    ///
    /// This is the object the server expects when adding or editing a
    /// notification.
    pub fn payload(&self) -> Result<Map<String, Value>> {
        self.envelope.merge(self.type_name(), self.details.to_map()?)
    }

    /// Encode to the outer wire object with the payload as its `config` string.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.envelope.wrap(self.payload()?)
    }

    /// Reinterpret the original wire payload as provider `P`.
    pub fn convert<P: Provider>(&self) -> Result<TypedNotification<P>> {
        self.envelope.convert()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = PairWriter::new(f, &[]);
        w.serialized(&self.envelope)?;
        self.details.write_pairs(&mut w)
    }
}

impl Serialize for Notification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_wire(&self.encode(), serializer)
    }
}

impl<'de> Deserialize<'de> for Notification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = wire_bytes(deserializer)?;
        Self::decode(&bytes).map_err(de::Error::custom)
    }
}

/// A notification whose provider is known at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedNotification<P> {
    /// Shared identity and activation fields
    pub envelope: Envelope,

    /// Provider-specific fields
    pub details: P,
}

impl<P: Provider> TypedNotification<P> {
    /// Assemble a notification from its parts
    #[must_use]
    pub const fn new(envelope: Envelope, details: P) -> Self {
        Self { envelope, details }
    }

    /// Decode a wire notification that must carry `P`'s discriminator.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (envelope, config) = Envelope::decode_with_config(bytes)?;
        if envelope.type_name() != P::TYPE {
            return Err(KumaError::TypeMismatch {
                expected: P::TYPE,
                found: envelope.type_name().to_string(),
            });
        }

        let details = serde_json::from_value(Value::Object(config)).map_err(KumaError::Config)?;
        Ok(Self { envelope, details })
    }

    /// Provider discriminator
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        P::TYPE
    }

    /// Flat payload: envelope fields merged with details and `type`.
    pub fn payload(&self) -> Result<Map<String, Value>> {
        let details = envelope::to_object(&self.details, P::TYPE)?;
        self.envelope.merge(P::TYPE, details)
    }

    /// Encode to the outer wire object with the payload as its `config` string.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.envelope.wrap(self.payload()?)
    }

    /// Erase the provider type
    #[must_use]
    pub fn into_notification(self) -> Notification {
        Notification::new(self.envelope, self.details)
    }
}

impl<P: Provider> From<TypedNotification<P>> for Notification {
    fn from(typed: TypedNotification<P>) -> Self {
        typed.into_notification()
    }
}

impl<P: Provider> fmt::Display for TypedNotification<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = PairWriter::new(f, &[]);
        w.serialized(&self.envelope)?;
        w.pair("type", &Value::String(P::TYPE.to_string()))?;
        w.serialized(&self.details)
    }
}

impl<P: Provider> Serialize for TypedNotification<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_wire(&self.encode(), serializer)
    }
}

impl<'de, P: Provider> Deserialize<'de> for TypedNotification<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = wire_bytes(deserializer)?;
        Self::decode(&bytes).map_err(de::Error::custom)
    }
}

fn serialize_wire<S: Serializer>(encoded: &Result<Vec<u8>>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let bytes = encoded.as_ref().map_err(ser::Error::custom)?;
    let value: Value = serde_json::from_slice(bytes).map_err(ser::Error::custom)?;
    value.serialize(serializer)
}

fn wire_bytes<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    serde_json::to_vec(&value).map_err(de::Error::custom)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SLACK_WIRE: &str = r#"{"id":1,"name":"My Slack Alert","active":true,"userId":1,"isDefault":true,"config":"{\"applyExisting\":true,\"isDefault\":true,\"name\":\"My Slack Alert\",\"slackwebhookURL\":\"https://hooks.slack.com/services/xxx\",\"type\":\"slack\"}"}"#;

    fn wire_with_config(config: &Value) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "id": 5, "name": "n", "active": true, "userId": 1, "isDefault": false,
            "config": config.to_string(),
        }))
        .unwrap()
    }

    /// Parse an outer wire document, expanding its config string for comparison.
    fn normalized(bytes: &[u8]) -> Value {
        let mut outer: Value = serde_json::from_slice(bytes).unwrap();
        let config: Value = serde_json::from_str(outer["config"].as_str().unwrap()).unwrap();
        outer["config"] = config;
        outer
    }

    #[test]
    fn slack_scenario_decodes_and_reencodes() {
        let notification = Notification::decode(SLACK_WIRE.as_bytes()).unwrap();

        let expected_envelope = Envelope {
            id: 1,
            name: "My Slack Alert".into(),
            is_active: true,
            user_id: 1,
            is_default: true,
            apply_existing: true,
            ..Envelope::default()
        };
        assert_eq!(notification.envelope, expected_envelope);
        assert_eq!(
            notification.details,
            Details::Slack(Slack {
                webhook_url: Some("https://hooks.slack.com/services/xxx".into()),
                ..Slack::default()
            })
        );
        assert_eq!(notification.type_name(), "slack");

        let encoded = notification.encode().unwrap();
        assert_eq!(normalized(&encoded), normalized(SLACK_WIRE.as_bytes()));
    }

    #[test]
    fn unknown_provider_scenario_keeps_extra_keys() {
        let bytes = wire_with_config(&json!({
            "type": "SomeFutureProvider",
            "applyExisting": false,
            "name": "n",
            "futureUrl": "https://future.example",
            "futureRetries": 3,
            "futureNested": {"a": [1, 2]},
        }));

        let notification = Notification::decode(&bytes).unwrap();
        assert_eq!(notification.type_name(), "SomeFutureProvider");

        let Details::Generic(generic) = &notification.details else {
            panic!("expected generic details");
        };
        assert_eq!(generic.fields().len(), 3);
        assert_eq!(generic.get("futureNested"), Some(&json!({"a": [1, 2]})));

        let again = Notification::decode(&notification.encode().unwrap()).unwrap();
        assert_eq!(again, notification);
    }

    #[test]
    fn missing_apply_existing_fails_for_every_schema() {
        let mut types: Vec<&str> = PROVIDER_TYPES.to_vec();
        types.push("SomeFutureProvider");

        for type_name in types {
            let bytes = wire_with_config(&json!({"type": type_name, "name": "n"}));
            let err = Notification::decode(&bytes).unwrap_err();
            assert!(
                matches!(err, KumaError::MissingApplyExisting),
                "{type_name}: {err}"
            );

            let err = Notification::decode_generic(&bytes).unwrap_err();
            assert!(matches!(err, KumaError::MissingApplyExisting));
        }

        let bytes = wire_with_config(&json!({"type": "slack"}));
        let err = TypedNotification::<Slack>::decode(&bytes).unwrap_err();
        assert!(matches!(err, KumaError::MissingApplyExisting));
    }

    #[test]
    fn discriminator_errors_are_distinct() {
        let bytes = wire_with_config(&json!({"applyExisting": true}));
        assert!(matches!(
            Notification::decode(&bytes).unwrap_err(),
            KumaError::MissingDiscriminator
        ));

        let bytes = wire_with_config(&json!({"type": null, "applyExisting": true}));
        assert!(matches!(
            Notification::decode(&bytes).unwrap_err(),
            KumaError::InvalidDiscriminatorType { found: "null" }
        ));
    }

    #[test]
    fn generic_decode_of_known_provider_round_trips() {
        let generic = Notification::decode_generic(SLACK_WIRE.as_bytes()).unwrap();
        assert!(generic.details.is_generic());
        assert_eq!(generic.type_name(), "slack");

        let typed = Notification::decode(&generic.encode().unwrap()).unwrap();
        assert!(matches!(typed.details, Details::Slack(_)));
    }

    #[test]
    fn convert_reinterprets_original_payload() {
        let generic = Notification::decode_generic(SLACK_WIRE.as_bytes()).unwrap();
        let slack = generic.convert::<Slack>().unwrap();
        assert_eq!(
            slack.details.webhook_url.as_deref(),
            Some("https://hooks.slack.com/services/xxx")
        );
        assert_eq!(slack.envelope.id, 1);
    }

    #[test]
    fn convert_to_wrong_provider_is_a_mismatch() {
        let notification = Notification::decode(SLACK_WIRE.as_bytes()).unwrap();
        let err = notification.convert::<Telegram>().unwrap_err();
        assert!(matches!(
            err,
            KumaError::TypeMismatch { expected: "telegram", ref found } if found == "slack"
        ));
    }

    #[test]
    fn convert_failure_names_target() {
        let bytes = wire_with_config(&json!({
            "type": "slack", "applyExisting": true, "slackrichmessage": "sometimes",
        }));
        let notification = Notification::decode_generic(&bytes).unwrap();

        let err = notification.convert::<Slack>().unwrap_err();
        assert!(matches!(err, KumaError::Conversion { target: "slack", .. }));
    }

    #[test]
    fn convert_without_wire_bytes_fails() {
        let notification = Notification::new(Envelope::new("built"), Slack::default());
        let err = notification.convert::<Slack>().unwrap_err();
        assert!(matches!(err, KumaError::Conversion { target: "slack", .. }));
    }

    #[test]
    fn typed_decode_rejects_other_discriminator() {
        let err = TypedNotification::<Discord>::decode(SLACK_WIRE.as_bytes()).unwrap_err();
        assert!(matches!(err, KumaError::TypeMismatch { expected: "discord", .. }));
    }

    #[test]
    fn payload_is_flat_and_typed() {
        let notification = Notification::new(
            Envelope::new("Pager"),
            PagerDuty {
                integration_key: Some("key".into()),
                ..PagerDuty::default()
            },
        );
        let payload = notification.payload().unwrap();

        assert_eq!(payload["type"], "PagerDuty");
        assert_eq!(payload["name"], "Pager");
        assert_eq!(payload["active"], true);
        assert_eq!(payload["applyExisting"], false);
        assert_eq!(payload["pagerdutyIntegrationKey"], "key");
    }

    #[test]
    fn from_payload_inverts_payload() {
        let original = Notification::decode(SLACK_WIRE.as_bytes()).unwrap();
        let rebuilt = Notification::from_payload(&original.payload().unwrap()).unwrap();

        assert_eq!(rebuilt, original);
        assert_eq!(rebuilt.convert::<Slack>().unwrap().envelope.id, 1);
    }

    #[test]
    fn from_payload_requires_discriminator() {
        let Value::Object(payload) = json!({"name": "x", "applyExisting": false}) else {
            unreachable!()
        };
        assert!(matches!(
            Notification::from_payload(&payload),
            Err(KumaError::MissingDiscriminator)
        ));
    }

    #[test]
    fn serde_impls_use_wire_shape() {
        let list = format!("[{SLACK_WIRE}]");
        let notifications: Vec<Notification> = serde_json::from_str(&list).unwrap();
        assert_eq!(notifications.len(), 1);

        let value = serde_json::to_value(&notifications[0]).unwrap();
        assert!(value["config"].is_string());

        let typed: TypedNotification<Slack> = serde_json::from_str(SLACK_WIRE).unwrap();
        assert_eq!(typed.envelope.name, "My Slack Alert");
    }

    #[test]
    fn display_lists_envelope_then_type_then_details() {
        let notification = Notification::decode(SLACK_WIRE.as_bytes()).unwrap();
        assert_eq!(
            notification.to_string(),
            concat!(
                r#"id: 1, name: "My Slack Alert", active: true, userId: 1, isDefault: true, "#,
                r#"applyExisting: true, type: "slack", slackwebhookURL: "https://hooks.slack.com/services/xxx""#
            )
        );

        let typed = notification.convert::<Slack>().unwrap();
        assert_eq!(typed.to_string(), notification.to_string());
    }
}
