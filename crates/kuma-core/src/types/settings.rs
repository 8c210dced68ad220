use crate::coerce;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Server-wide settings.
///
/// Every field is optional since the server only returns what has been set.
/// Keys this type does not model are kept in [`Settings::extra`] and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(
        rename = "checkUpdate",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_update: Option<bool>,

    #[serde(
        rename = "searchEngineIndex",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_engine_index: Option<bool>,

    #[serde(rename = "primaryBaseURL", skip_serializing_if = "Option::is_none")]
    pub primary_base_url: Option<String>,

    #[serde(rename = "steamAPIKey", skip_serializing_if = "Option::is_none")]
    pub steam_api_key: Option<String>,

    #[serde(deserialize_with = "coerce::opt_bool_or_int", skip_serializing_if = "Option::is_none")]
    pub nscd: Option<bool>,

    #[serde(
        rename = "dnsCache",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub dns_cache: Option<bool>,

    /// Days before expiry at which TLS certificate warnings fire
    #[serde(rename = "tlsExpiryNotifyDays", skip_serializing_if = "Option::is_none")]
    pub tls_expiry_notify_days: Option<Vec<i64>>,

    #[serde(
        rename = "disableAuth",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub disable_auth: Option<bool>,

    #[serde(
        rename = "trustProxy",
        deserialize_with = "coerce::opt_bool_or_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub trust_proxy: Option<bool>,

    #[serde(
        rename = "keepDataPeriodDays",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_data_period_days: Option<i64>,

    #[serde(rename = "chromeExecutable", skip_serializing_if = "Option::is_none")]
    pub chrome_executable: Option<String>,

    /// `dashboard` or `statusPage-<slug>`
    #[serde(rename = "entryPage", skip_serializing_if = "Option::is_none")]
    pub entry_page: Option<String>,

    #[serde(rename = "serverTimezone", alias = "timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &["steamAPIKey"])
    }
}
