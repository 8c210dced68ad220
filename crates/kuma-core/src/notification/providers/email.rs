//! Email providers.

use crate::coerce;
use serde::{Deserialize, Serialize};

/// SMTP email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smtp {
    #[serde(rename = "smtpHost", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Older servers store the port as a string
    #[serde(
        rename = "smtpPort",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<i64>,

    /// Implicit TLS (usually port 465)
    #[serde(
        rename = "smtpSecure",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub secure: Option<bool>,

    #[serde(
        rename = "smtpIgnoreTLSError",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_tls_error: Option<bool>,

    #[serde(rename = "smtpDkimDomain", skip_serializing_if = "Option::is_none")]
    pub dkim_domain: Option<String>,

    #[serde(rename = "smtpDkimKeySelector", skip_serializing_if = "Option::is_none")]
    pub dkim_key_selector: Option<String>,

    #[serde(rename = "smtpDkimPrivateKey", skip_serializing_if = "Option::is_none")]
    pub dkim_private_key: Option<String>,

    #[serde(rename = "smtpDkimHashAlgo", skip_serializing_if = "Option::is_none")]
    pub dkim_hash_algo: Option<String>,

    #[serde(rename = "smtpDkimheaderFieldNames", skip_serializing_if = "Option::is_none")]
    pub dkim_header_field_names: Option<String>,

    #[serde(rename = "smtpDkimskipFields", skip_serializing_if = "Option::is_none")]
    pub dkim_skip_fields: Option<String>,

    #[serde(rename = "smtpUsername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "smtpPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Subject template
    #[serde(rename = "customSubject", skip_serializing_if = "Option::is_none")]
    pub custom_subject: Option<String>,

    /// Body template
    #[serde(rename = "customBody", skip_serializing_if = "Option::is_none")]
    pub custom_body: Option<String>,

    #[serde(rename = "smtpFrom", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(rename = "smtpTo", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(rename = "smtpCC", skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    #[serde(rename = "smtpBCC", skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,

    /// Send [`Smtp::custom_body`] as HTML
    #[serde(
        rename = "htmlBody",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub html_body: Option<bool>,
}

/// SendGrid mail API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendGrid {
    #[serde(rename = "sendgridApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "sendgridToEmail", skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,

    #[serde(rename = "sendgridFromEmail", skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,

    #[serde(rename = "sendgridSubject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}
