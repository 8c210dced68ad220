//! Mobile and desktop push providers.

use crate::coerce;
use serde::{Deserialize, Serialize};

/// Pushover
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pushover {
    /// User or group key
    #[serde(rename = "pushoveruserkey", skip_serializing_if = "Option::is_none")]
    pub user_key: Option<String>,

    /// Application API token
    #[serde(rename = "pushoverapptoken", skip_serializing_if = "Option::is_none")]
    pub app_token: Option<String>,

    #[serde(rename = "pushoversounds", skip_serializing_if = "Option::is_none")]
    pub sounds: Option<String>,

    /// Sound used for recovery messages
    #[serde(rename = "pushoversounds_up", skip_serializing_if = "Option::is_none")]
    pub sounds_up: Option<String>,

    /// `-2` to `2`, kept as sent by the UI
    #[serde(rename = "pushoverpriority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(rename = "pushovertitle", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "pushoverdevice", skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Message time-to-live in seconds
    #[serde(
        rename = "pushoverttl",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<i64>,
}

/// Pushbullet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pushbullet {
    #[serde(rename = "pushbulletAccessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// PushDeer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushDeer {
    #[serde(rename = "pushdeerServer", skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    #[serde(rename = "pushdeerKey", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Pushy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pushy {
    #[serde(rename = "pushyAPIKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Device token
    #[serde(rename = "pushyToken", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Gotify
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gotify {
    #[serde(rename = "gotifyserverurl", skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(rename = "gotifyapplicationToken", skip_serializing_if = "Option::is_none")]
    pub application_token: Option<String>,

    #[serde(
        rename = "gotifyPriority",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,
}

/// ntfy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ntfy {
    /// Server base URL, e.g. `https://ntfy.sh`
    #[serde(rename = "ntfyserverurl", skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(rename = "ntfytopic", skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// 1 (min) to 5 (max)
    #[serde(
        rename = "ntfyPriority",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,

    /// `none`, `usernamePassword` or `accessToken`
    #[serde(rename = "ntfyAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub authentication_method: Option<String>,

    #[serde(rename = "ntfyusername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "ntfypassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "ntfyaccesstoken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(rename = "ntfyIcon", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Bark (iOS)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bark {
    #[serde(rename = "barkEndpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(rename = "barkGroup", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(rename = "barkSound", skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    /// `v1` or `v2`
    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// Gorush push gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gorush {
    #[serde(rename = "gorushServerURL", skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(rename = "gorushDeviceToken", skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,

    /// `ios`, `android` or `huawei`
    #[serde(rename = "gorushPlatform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(rename = "gorushTitle", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "gorushPriority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(
        rename = "gorushRetry",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub retry: Option<i64>,

    #[serde(rename = "gorushTopic", skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// LunaSea
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunaSea {
    /// `device` or `user`
    #[serde(rename = "lunaseaTarget", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(rename = "lunaseaUserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(rename = "lunaseaDevice", skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

/// Apprise CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Apprise {
    /// Apprise service URL
    #[serde(rename = "appriseURL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// ServerChan (WeChat)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerChan {
    #[serde(rename = "serverChanSendKey", skip_serializing_if = "Option::is_none")]
    pub send_key: Option<String>,
}

/// Push by Techulus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushByTechulus {
    #[serde(rename = "pushAPIKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// WPush
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WPush {
    #[serde(rename = "wpushAPIkey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "wpushChannel", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

/// Home Assistant notify service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeAssistant {
    #[serde(rename = "homeAssistantUrl", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "longLivedAccessToken", skip_serializing_if = "Option::is_none")]
    pub long_lived_access_token: Option<String>,

    /// Service name, e.g. `mobile_app_phone`
    #[serde(rename = "notificationService", skip_serializing_if = "Option::is_none")]
    pub notification_service: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::testing::round_trip;
    use crate::notification::{Details, Notification};

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn push_round_trips() {
        round_trip(Pushover {
            user_key: s("u"),
            app_token: s("a"),
            sounds: s("pushover"),
            sounds_up: s("magic"),
            priority: s("1"),
            title: s("Kuma"),
            device: s("phone"),
            ttl: Some(3600),
        });
        round_trip(Pushbullet { access_token: s("o.x") });
        round_trip(PushDeer { server: s("https://api2.pushdeer.com"), key: s("PDU1") });
        round_trip(Pushy { api_key: s("k"), token: s("t") });
        round_trip(Gotify {
            server_url: s("https://gotify.example"),
            application_token: s("A1"),
            priority: Some(8),
        });
        round_trip(Ntfy {
            server_url: s("https://ntfy.sh"),
            topic: s("kuma"),
            priority: Some(5),
            authentication_method: s("usernamePassword"),
            username: s("u"),
            password: s("p"),
            access_token: None,
            icon: s("https://example.com/i.png"),
        });
        round_trip(Bark {
            endpoint: s("https://api.day.app/key"),
            group: s("kuma"),
            sound: s("telegraph"),
            api_version: s("v1"),
        });
        round_trip(Gorush {
            server_url: s("https://gorush.example"),
            device_token: s("d"),
            platform: s("ios"),
            title: s("t"),
            priority: s("high"),
            retry: Some(3),
            topic: s("com.example.app"),
        });
        round_trip(LunaSea { target: s("user"), user_id: s("u1"), device: None });
        round_trip(Apprise { url: s("mailto://x@example.com"), title: s("Kuma") });
        round_trip(ServerChan { send_key: s("SCT1") });
        round_trip(PushByTechulus { api_key: s("k") });
        round_trip(WPush { api_key: s("k"), channel: s("wechat") });
        round_trip(HomeAssistant {
            url: s("http://ha.local:8123"),
            long_lived_access_token: s("t"),
            notification_service: s("mobile_app_phone"),
        });
    }

    #[test]
    fn priorities_tolerate_strings() {
        let bytes = br#"{"id":1,"name":"g","active":true,"userId":1,"isDefault":false,"config":"{\"type\":\"gotify\",\"applyExisting\":false,\"gotifyPriority\":\"8\"}"}"#;
        let Details::Gotify(gotify) = Notification::decode(bytes).unwrap().details else {
            panic!("expected gotify");
        };
        assert_eq!(gotify.priority, Some(8));
    }
}
