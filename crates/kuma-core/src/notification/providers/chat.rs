//! Chat and messenger providers.

use crate::coerce;
use serde::{Deserialize, Serialize};

/// Slack incoming webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slack {
    /// Incoming webhook URL
    #[serde(rename = "slackwebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Username override
    #[serde(rename = "slackusername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Emoji icon override, e.g. `:ghost:`
    #[serde(rename = "slackiconemo", skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    /// Channel override
    #[serde(rename = "slackchannel", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Send Block Kit messages instead of plain text
    #[serde(
        rename = "slackrichmessage",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub rich_message: Option<bool>,

    /// Mention `@channel` on alerts
    #[serde(
        rename = "slackchannelnotify",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_notify: Option<bool>,
}

/// Discord webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discord {
    /// Webhook URL
    #[serde(rename = "discordWebhookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Bot display name
    #[serde(rename = "discordUsername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Text prepended to every message
    #[serde(rename = "discordPrefixMessage", skip_serializing_if = "Option::is_none")]
    pub prefix_message: Option<String>,

    /// `channel`, `createNewForumPost` or `postToThread`
    #[serde(rename = "discordChannelType", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,

    #[serde(rename = "discordThreadName", skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,

    #[serde(rename = "discordThreadID", skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

/// Microsoft Teams webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teams {
    #[serde(rename = "webhookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Mattermost webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mattermost {
    #[serde(rename = "mattermostWebhookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(rename = "mattermostusername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "mattermostchannel", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    #[serde(rename = "mattermosticonemo", skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    #[serde(rename = "mattermosticonurl", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Rocket.Chat webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketChat {
    #[serde(rename = "rocketwebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(rename = "rocketusername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "rocketiconemo", skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    #[serde(rename = "rocketchannel", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

/// Google Chat webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleChat {
    /// Space webhook URL
    #[serde(rename = "googleChatWebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Render messages from [`GoogleChat::template`]
    #[serde(
        rename = "googleChatUseTemplate",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_template: Option<bool>,

    /// Liquid message template
    #[serde(rename = "googleChatTemplate", skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Matrix room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Matrix {
    /// Homeserver base URL
    #[serde(rename = "homeserverUrl", skip_serializing_if = "Option::is_none")]
    pub homeserver_url: Option<String>,

    /// Internal room ID, e.g. `!abc:matrix.org`
    #[serde(rename = "internalRoomId", skip_serializing_if = "Option::is_none")]
    pub internal_room_id: Option<String>,

    /// Access token of the sending account
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Telegram bot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Telegram {
    /// Bot API token
    #[serde(rename = "telegramBotToken", skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,

    /// Target chat
    #[serde(rename = "telegramChatID", skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,

    /// Forum topic within the chat
    #[serde(rename = "telegramMessageThreadID", skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<String>,

    /// Self-hosted Bot API server
    #[serde(rename = "telegramServerUrl", skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(
        rename = "telegramSendSilently",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub send_silently: Option<bool>,

    #[serde(
        rename = "telegramProtectContent",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub protect_content: Option<bool>,

    #[serde(
        rename = "telegramUseTemplate",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_template: Option<bool>,

    #[serde(rename = "telegramTemplate", skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// `plain`, `HTML`, `MarkdownV2`
    #[serde(rename = "telegramTemplateParseMode", skip_serializing_if = "Option::is_none")]
    pub template_parse_mode: Option<String>,
}

/// signal-cli REST API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signal {
    #[serde(rename = "signalURL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "signalNumber", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Comma-separated recipient numbers
    #[serde(rename = "signalRecipients", skip_serializing_if = "Option::is_none")]
    pub recipients: Option<String>,
}

/// LINE Messaging API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    #[serde(rename = "lineChannelAccessToken", skip_serializing_if = "Option::is_none")]
    pub channel_access_token: Option<String>,

    #[serde(rename = "lineUserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// LINE Notify
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineNotify {
    #[serde(rename = "lineNotifyAccessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// KOOK bot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kook {
    #[serde(rename = "kookGuildID", skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,

    #[serde(rename = "kookBotToken", skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,
}

/// Feishu / Lark webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feishu {
    #[serde(rename = "feishuWebHookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// DingTalk robot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DingDing {
    #[serde(rename = "webHookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Signing secret
    #[serde(rename = "secretKey", skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// `nobody` or `everyone`
    #[serde(rename = "mentioning", skip_serializing_if = "Option::is_none")]
    pub mentioning: Option<String>,
}

/// WeCom group robot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeCom {
    #[serde(rename = "weComBotKey", skip_serializing_if = "Option::is_none")]
    pub bot_key: Option<String>,
}

/// Zoho Cliq webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZohoCliq {
    #[serde(rename = "webhookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Stackfield webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stackfield {
    #[serde(rename = "stackfieldwebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Bitrix24 incoming webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bitrix24 {
    #[serde(rename = "bitrix24WebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(rename = "bitrix24UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Pumble webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pumble {
    #[serde(rename = "webhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// YZJ (Yunzhijia) robot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Yzj {
    #[serde(rename = "yzjWebHookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(rename = "yzjType", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "yzjToken", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// OneBot HTTP API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneBot {
    #[serde(rename = "httpAddr", skip_serializing_if = "Option::is_none")]
    pub http_addr: Option<String>,

    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// `group` or `private`
    #[serde(rename = "msgType", skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<String>,

    // Misspelled on the wire.
    #[serde(rename = "recieverId", skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
}

/// Threema Gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Threema {
    #[serde(rename = "threemaRecipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// `identity`, `phone` or `email`
    #[serde(rename = "threemaRecipientType", skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<String>,

    #[serde(rename = "threemaSenderIdentity", skip_serializing_if = "Option::is_none")]
    pub sender_identity: Option<String>,

    #[serde(rename = "threemaSecret", skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Nostr direct messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nostr {
    /// Newline-separated relay URLs
    #[serde(rename = "nostrRelays", skip_serializing_if = "Option::is_none")]
    pub relays: Option<String>,

    /// Sender private key (`nsec`)
    #[serde(rename = "nostrSender", skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Newline-separated recipient public keys (`npub`)
    #[serde(rename = "nostrRecipients", skip_serializing_if = "Option::is_none")]
    pub recipients: Option<String>,
}

/// Whapi WhatsApp API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Whapi {
    #[serde(rename = "whapiApiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(rename = "whapiAuthToken", skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(rename = "whapiRecipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// Evolution WhatsApp API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evolution {
    #[serde(rename = "evolutionApiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(rename = "evolutionInstanceName", skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,

    #[serde(rename = "evolutionAuthToken", skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(rename = "evolutionRecipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// WAHA WhatsApp HTTP API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Waha {
    #[serde(rename = "wahaApiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(rename = "wahaApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "wahaSession", skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    #[serde(rename = "wahaChatId", skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

/// CallMeBot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallMeBot {
    /// Full endpoint URL including the API key
    #[serde(rename = "callMeBotEndpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
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
    fn slack_round_trip() {
        round_trip(Slack {
            webhook_url: s("https://hooks.slack.com/services/T/B/X"),
            username: s("kuma"),
            icon_emoji: s(":bear:"),
            channel: s("#ops"),
            rich_message: Some(true),
            channel_notify: Some(false),
        });
    }

    #[test]
    fn telegram_round_trip() {
        round_trip(Telegram {
            bot_token: s("123:abc"),
            chat_id: s("-100200300"),
            message_thread_id: s("7"),
            server_url: s("https://api.telegram.org"),
            send_silently: Some(true),
            protect_content: Some(false),
            use_template: Some(true),
            template: s("{{ msg }}"),
            template_parse_mode: s("HTML"),
        });
    }

    #[test]
    fn messenger_round_trips() {
        round_trip(Discord {
            webhook_url: s("https://discord.com/api/webhooks/1/x"),
            username: s("kuma"),
            prefix_message: s("@here"),
            channel_type: s("postToThread"),
            thread_name: None,
            thread_id: s("99"),
        });
        round_trip(Teams { webhook_url: s("https://outlook.office.com/webhook/x") });
        round_trip(Mattermost {
            webhook_url: s("https://mm.example/hooks/x"),
            username: s("kuma"),
            channel: s("town-square"),
            icon_emoji: s(":bell:"),
            icon_url: s("https://mm.example/icon.png"),
        });
        round_trip(RocketChat {
            webhook_url: s("https://rc.example/hooks/x"),
            username: s("kuma"),
            icon_emoji: s(":bell:"),
            channel: s("#general"),
        });
        round_trip(GoogleChat {
            webhook_url: s("https://chat.googleapis.com/v1/spaces/x"),
            use_template: Some(false),
            template: None,
        });
        round_trip(Matrix {
            homeserver_url: s("https://matrix.org"),
            internal_room_id: s("!room:matrix.org"),
            access_token: s("syt_x"),
        });
        round_trip(Signal {
            url: s("http://signal:8080"),
            number: s("+15550001"),
            recipients: s("+15550002,+15550003"),
        });
        round_trip(Line { channel_access_token: s("tok"), user_id: s("U1") });
        round_trip(LineNotify { access_token: s("tok") });
        round_trip(Kook { guild_id: s("g"), bot_token: s("b") });
        round_trip(Feishu { webhook_url: s("https://open.feishu.cn/hook/x") });
        round_trip(DingDing {
            webhook_url: s("https://oapi.dingtalk.com/robot/send?access_token=x"),
            secret_key: s("SEC"),
            mentioning: s("everyone"),
        });
        round_trip(WeCom { bot_key: s("key") });
        round_trip(ZohoCliq { webhook_url: s("https://cliq.zoho.com/x") });
        round_trip(Stackfield { webhook_url: s("https://stackfield.com/x") });
        round_trip(Bitrix24 { webhook_url: s("https://b24.example/rest/1/x"), user_id: s("1") });
        round_trip(Pumble { webhook_url: s("https://api.pumble.com/x") });
        round_trip(Yzj { webhook_url: s("https://yzj.example/x"), kind: s("0"), token: s("t") });
        round_trip(OneBot {
            http_addr: s("http://onebot:5700"),
            access_token: s("t"),
            msg_type: s("group"),
            receiver_id: s("12345"),
        });
        round_trip(Threema {
            recipient: s("ECHOECHO"),
            recipient_type: s("identity"),
            sender_identity: s("*KUMA123"),
            secret: s("s"),
        });
        round_trip(Nostr {
            relays: s("wss://relay.damus.io"),
            sender: s("nsec1x"),
            recipients: s("npub1y"),
        });
        round_trip(Whapi { api_url: s("https://gate.whapi.cloud"), auth_token: s("t"), recipient: s("1") });
        round_trip(Evolution {
            api_url: s("https://evo.example"),
            instance_name: s("kuma"),
            auth_token: s("t"),
            recipient: s("1"),
        });
        round_trip(Waha {
            api_url: s("http://waha:3000"),
            api_key: s("k"),
            session: s("default"),
            chat_id: s("1@c.us"),
        });
        round_trip(CallMeBot { endpoint: s("https://api.callmebot.com/x") });
    }

    #[test]
    fn slack_accepts_integer_flags() {
        let bytes = br#"{"id":3,"name":"s","active":1,"userId":1,"isDefault":0,"config":"{\"type\":\"slack\",\"applyExisting\":false,\"slackrichmessage\":1,\"slackchannelnotify\":\"\"}"}"#;
        let notification = Notification::decode(bytes).unwrap();

        let Details::Slack(slack) = notification.details else {
            panic!("expected slack");
        };
        assert_eq!(slack.rich_message, Some(true));
        assert_eq!(slack.channel_notify, None);
    }

    #[test]
    fn onebot_keeps_wire_misspelling() {
        let value = serde_json::to_value(OneBot {
            receiver_id: s("1"),
            ..OneBot::default()
        })
        .unwrap();
        assert_eq!(value["recieverId"], "1");
    }
}
