//! Generic HTTP webhook provider.

use crate::coerce;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outgoing HTTP webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    /// Target URL
    #[serde(rename = "webhookURL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `json`, `form-data` or `custom`
    #[serde(rename = "webhookContentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Body template used when the content type is `custom`
    #[serde(rename = "webhookCustomBody", skip_serializing_if = "Option::is_none")]
    pub custom_body: Option<String>,

    /// Extra request headers.
    ///
    /// Stored on the wire as a JSON document inside a string, one level
    /// below the already string-encoded config.
    #[serde(
        rename = "webhookAdditionalHeaders",
        with = "coerce::embedded_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_headers: Option<BTreeMap<String, String>>,
}

impl Webhook {
    /// Add a header, creating the header map if needed
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}
