//! SMS and voice gateways.

use crate::coerce;
use serde::{Deserialize, Serialize};

/// Twilio SMS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Twilio {
    #[serde(rename = "twilioAccountSID", skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// API key SID, used instead of the account SID for auth when set
    #[serde(rename = "twilioApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "twilioAuthToken", skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(rename = "twilioToNumber", skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,

    #[serde(rename = "twilioFromNumber", skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
}

/// Aliyun SMS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliyunSms {
    #[serde(rename = "accessKeyId", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    #[serde(rename = "secretAccessKey", skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,

    #[serde(rename = "phonenumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(rename = "signName", skip_serializing_if = "Option::is_none")]
    pub sign_name: Option<String>,

    #[serde(rename = "templateCode", skip_serializing_if = "Option::is_none")]
    pub template_code: Option<String>,
}

/// ClickSend SMS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickSendSms {
    #[serde(rename = "clicksendsmsLogin", skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(rename = "clicksendsmsPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "clicksendsmsToNumber", skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,

    #[serde(rename = "clicksendsmsSenderName", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

/// Octopush
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Octopush {
    /// API generation, `2` (current) or `1` (legacy)
    #[serde(rename = "octopushVersion", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(rename = "octopushAPIKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "octopushLogin", skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(rename = "octopushPhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// `sms_premium` or `sms_low_cost`
    #[serde(rename = "octopushSMSType", skip_serializing_if = "Option::is_none")]
    pub sms_type: Option<String>,

    #[serde(rename = "octopushSenderName", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

/// PromoSMS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoSms {
    #[serde(rename = "promosmsLogin", skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(rename = "promosmsPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "promosmsPhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(rename = "promosmsSMSType", skip_serializing_if = "Option::is_none")]
    pub sms_type: Option<String>,

    #[serde(rename = "promosmsSenderName", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,

    #[serde(
        rename = "promosmsAllowLongSMS",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_long_sms: Option<bool>,
}

/// SerwerSMS.pl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerwerSms {
    #[serde(rename = "serwersmsUsername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "serwersmsPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "serwersmsPhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(rename = "serwersmsSenderName", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

/// SMSC.ru
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smsc {
    #[serde(rename = "smscLogin", skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(rename = "smscPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "smscToNumber", skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,

    #[serde(rename = "smscSenderName", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,

    #[serde(rename = "smscTranslit", skip_serializing_if = "Option::is_none")]
    pub translit: Option<String>,
}

/// SMSEagle hardware gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsEagle {
    /// Device URL
    #[serde(rename = "smseagleUrl", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// API access token
    #[serde(rename = "smseagleToken", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// `smseagle-to`, `smseagle-group` or `smseagle-contact`
    #[serde(rename = "smseagleRecipientType", skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<String>,

    #[serde(rename = "smseagleRecipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(
        rename = "smseaglePriority",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,

    /// Send as unicode
    #[serde(
        rename = "smseagleEncoding",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub encoding: Option<bool>,

    /// `smseagle-apiv1` or `smseagle-apiv2`
    #[serde(rename = "smseagleApiType", skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>,
}

/// SmsManager (smsmanager.cz)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsManager {
    #[serde(rename = "smsmanagerApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "numbers", skip_serializing_if = "Option::is_none")]
    pub numbers: Option<String>,

    #[serde(rename = "messageType", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
}

/// SMSPartner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsPartner {
    #[serde(rename = "smspartnerApikey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "smspartnerPhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(rename = "smspartnerSenderName", skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

/// seven.io
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SevenIo {
    #[serde(rename = "sevenioApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "sevenioReceiver", skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    #[serde(rename = "sevenioSender", skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

/// Cellsynt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cellsynt {
    #[serde(rename = "cellsyntLogin", skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(rename = "cellsyntPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "cellsyntDestination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(rename = "cellsyntOriginator", skip_serializing_if = "Option::is_none")]
    pub originator: Option<String>,

    /// `alpha` or `numeric`
    #[serde(rename = "cellsyntOriginatortype", skip_serializing_if = "Option::is_none")]
    pub originator_type: Option<String>,

    #[serde(
        rename = "cellsyntAllowLongSMS",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_long_sms: Option<bool>,
}

/// 46elks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elks {
    #[serde(rename = "elksUsername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "elksAuthToken", skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(rename = "elksFromNumber", skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,

    #[serde(rename = "elksToNumber", skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,
}

/// Free Mobile (France)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeMobile {
    #[serde(rename = "freemobileUser", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(rename = "freemobilePass", skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
}

/// GTX Messaging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GtxMessaging {
    #[serde(rename = "gtxMessagingApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "gtxMessagingFrom", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(rename = "gtxMessagingTo", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Onesender WhatsApp gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneSender {
    #[serde(rename = "onesenderURL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "onesenderToken", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(rename = "onesenderReceiver", skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    /// `private` or `group`
    #[serde(rename = "onesenderTypeReceiver", skip_serializing_if = "Option::is_none")]
    pub type_receiver: Option<String>,
}
