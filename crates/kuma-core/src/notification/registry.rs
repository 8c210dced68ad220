//! Discriminator → provider schema table.
//!
//! Every supported provider appears exactly once below. The table generates
//! the [`Provider`] impl carrying the wire discriminator, the [`Details`]
//! variant, the decode `match` and [`PROVIDER_TYPES`].

use super::envelope::to_object;
use super::generic::GenericDetails;
use super::providers::*;
use super::Provider;
use crate::error::{KumaError, Result};
use crate::pretty::PairWriter;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

macro_rules! registry {
    ($( $variant:ident => $type_name:literal ),+ $(,)?) => {
        $(
            impl Provider for $variant {
                const TYPE: &'static str = $type_name;
            }

            impl From<$variant> for Details {
                fn from(details: $variant) -> Self {
                    Self::$variant(details)
                }
            }
        )+

        /// Provider-specific part of a notification, keyed by discriminator
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Details {
            $(
                #[doc = concat!("`", $type_name, "`")]
                $variant($variant),
            )+
            /// Any provider without a compiled-in schema
            Generic(GenericDetails),
        }

        /// Every discriminator with a compiled-in schema
        pub const PROVIDER_TYPES: &[&str] = &[$($type_name),+];

        impl Details {
            /// Decode a parsed config into the schema its discriminator names.
            ///
            /// Unknown discriminators fall back to [`GenericDetails`].
            pub fn decode(type_name: &str, config: Map<String, Value>) -> Result<Self> {
                match type_name {
                    $(
                        $type_name => serde_json::from_value(Value::Object(config))
                            .map(Self::$variant)
                            .map_err(KumaError::Config),
                    )+
                    _ => {
                        debug!(
                            notification_type = type_name,
                            "no compiled-in schema, keeping generic details"
                        );
                        Ok(Self::Generic(GenericDetails::new(type_name, config)))
                    }
                }
            }

            /// Wire discriminator of these details
            #[must_use]
            pub fn type_name(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $type_name, )+
                    Self::Generic(generic) => generic.type_name(),
                }
            }

            /// Serialized detail fields plus `type`
            pub fn to_map(&self) -> Result<Map<String, Value>> {
                let mut map = match self {
                    $( Self::$variant(details) => to_object(details, $type_name)?, )+
                    Self::Generic(generic) => return Ok(generic.to_map()),
                };
                map.insert("type".to_string(), Value::String(self.type_name().to_string()));
                Ok(map)
            }

            pub(crate) fn write_pairs(&self, w: &mut PairWriter<'_, '_>) -> fmt::Result {
                w.pair("type", &Value::String(self.type_name().to_string()))?;
                match self {
                    $( Self::$variant(details) => w.serialized(details), )+
                    Self::Generic(generic) => w.object_sorted(generic.fields()),
                }
            }
        }
    };
}

registry! {
    // chat and messaging
    Slack => "slack",
    Discord => "discord",
    Teams => "teams",
    Mattermost => "mattermost",
    RocketChat => "rocket.chat",
    GoogleChat => "GoogleChat",
    Matrix => "matrix",
    Telegram => "telegram",
    Signal => "signal",
    Line => "line",
    LineNotify => "LineNotify",
    Kook => "Kook",
    Feishu => "Feishu",
    DingDing => "DingDing",
    WeCom => "WeCom",
    ZohoCliq => "ZohoCliq",
    Stackfield => "stackfield",
    Bitrix24 => "Bitrix24",
    Pumble => "Pumble",
    Yzj => "YZJ",
    OneBot => "OneBot",
    Threema => "threema",
    Nostr => "nostr",
    Whapi => "whapi",
    Evolution => "evolution",
    Waha => "waha",
    CallMeBot => "CallMeBot",
    // push services
    Pushover => "pushover",
    Pushbullet => "pushbullet",
    PushDeer => "PushDeer",
    Pushy => "pushy",
    Gotify => "gotify",
    Ntfy => "ntfy",
    Bark => "Bark",
    Gorush => "gorush",
    LunaSea => "lunasea",
    Apprise => "apprise",
    ServerChan => "ServerChan",
    PushByTechulus => "PushByTechulus",
    WPush => "WPush",
    HomeAssistant => "HomeAssistant",
    // sms gateways
    Twilio => "twilio",
    AliyunSms => "AliyunSMS",
    ClickSendSms => "clicksendsms",
    Octopush => "octopush",
    PromoSms => "promosms",
    SerwerSms => "serwersms",
    Smsc => "smsc",
    SmsEagle => "SMSEagle",
    SmsManager => "SMSManager",
    SmsPartner => "SMSPartner",
    SevenIo => "SevenIO",
    Cellsynt => "Cellsynt",
    Elks => "Elks",
    FreeMobile => "FreeMobile",
    GtxMessaging => "gtxmessaging",
    OneSender => "Onesender",
    // incident management
    PagerDuty => "PagerDuty",
    PagerTree => "PagerTree",
    Opsgenie => "Opsgenie",
    Splunk => "Splunk",
    Squadcast => "squadcast",
    Alerta => "alerta",
    AlertNow => "AlertNow",
    GoAlert => "GoAlert",
    GrafanaOncall => "GrafanaOncall",
    HeiiOnCall => "HeiiOnCall",
    Signl4 => "SIGNL4",
    FlashDuty => "FlashDuty",
    Keep => "Keep",
    // email
    Smtp => "smtp",
    SendGrid => "SendGrid",
    // generic http
    Webhook => "webhook",
}

impl Details {
    /// Returns true if no compiled-in schema matched
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }

    /// Returns true if a compiled-in schema exists for the discriminator
    #[must_use]
    pub fn is_known(type_name: &str) -> bool {
        PROVIDER_TYPES.contains(&type_name)
    }
}

impl From<GenericDetails> for Details {
    fn from(details: GenericDetails) -> Self {
        Self::Generic(details)
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_pairs(&mut PairWriter::new(f, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn config(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn discriminators_are_unique() {
        let unique: HashSet<_> = PROVIDER_TYPES.iter().collect();
        assert_eq!(unique.len(), PROVIDER_TYPES.len());
        assert!(PROVIDER_TYPES.len() >= 60);
    }

    #[test]
    fn every_discriminator_dispatches_to_its_schema() {
        for type_name in PROVIDER_TYPES {
            let details = Details::decode(type_name, config(json!({"type": type_name}))).unwrap();
            assert!(!details.is_generic(), "{type_name} fell back to generic");
            assert_eq!(details.type_name(), *type_name);
        }
    }

    #[test]
    fn discriminator_match_is_case_sensitive() {
        let details = Details::decode("Slack", config(json!({"x": 1}))).unwrap();
        assert!(details.is_generic());
        assert_eq!(details.type_name(), "Slack");
    }

    #[test]
    fn unknown_discriminator_falls_back() {
        let details = Details::decode(
            "SomeFutureProvider",
            config(json!({"type": "SomeFutureProvider", "endpoint": "e", "level": 3})),
        )
        .unwrap();

        let Details::Generic(generic) = &details else {
            panic!("expected generic details");
        };
        assert_eq!(generic.get_str("endpoint"), Some("e"));
        assert_eq!(generic.get("level"), Some(&json!(3)));
        assert!(!Details::is_known("SomeFutureProvider"));
    }

    #[test]
    fn mistyped_field_is_an_inner_layer_error() {
        let err = Details::decode("slack", config(json!({"slackwebhookURL": ["x"]}))).unwrap_err();
        assert!(matches!(err, KumaError::Config(_)));
    }

    #[test]
    fn to_map_carries_type() {
        let details = Details::from(Slack {
            webhook_url: Some("https://hooks.slack.com/services/xxx".into()),
            ..Slack::default()
        });
        let map = details.to_map().unwrap();
        assert_eq!(map["type"], "slack");
        assert_eq!(map["slackwebhookURL"], "https://hooks.slack.com/services/xxx");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn display_prefixes_type() {
        let details = Details::from(Gotify {
            server_url: Some("https://gotify.example".into()),
            priority: Some(8),
            ..Gotify::default()
        });
        assert_eq!(
            details.to_string(),
            r#"type: "gotify", gotifyserverurl: "https://gotify.example", gotifyPriority: 8"#
        );
    }

    #[test]
    fn generic_display_sorts_keys() {
        let details = Details::decode("Zed", config(json!({"b": 2, "a": "x"}))).unwrap();
        assert_eq!(details.to_string(), r#"type: "Zed", a: "x", b: 2"#);
    }
}
