use crate::coerce;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A public status page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPage {
    #[serde(default)]
    pub id: i64,

    /// URL path segment, `/status/<slug>`
    pub slug: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// `auto`, `light` or `dark`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, deserialize_with = "coerce::bool_or_int")]
    pub published: bool,

    #[serde(rename = "showTags", default, deserialize_with = "coerce::bool_or_int")]
    pub show_tags: bool,

    /// Custom domains that serve this page
    #[serde(rename = "domainNameList", default)]
    pub domain_name_list: Vec<String>,

    #[serde(rename = "customCSS", default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    #[serde(rename = "footerText", default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,

    #[serde(rename = "showPoweredBy", default, deserialize_with = "coerce::bool_or_int")]
    pub show_powered_by: bool,

    #[serde(rename = "googleAnalyticsId", default, skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,

    #[serde(rename = "showCertificateExpiry", default, deserialize_with = "coerce::bool_or_int")]
    pub show_certificate_expiry: bool,

    /// Seconds between client refreshes
    #[serde(
        rename = "autoRefreshInterval",
        default,
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_refresh_interval: Option<i64>,
}

impl StatusPage {
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            published: true,
            show_powered_by: true,
            ..Self::default()
        }
    }

    /// Path of the page relative to the server's base URL
    #[must_use]
    pub fn path(&self) -> String {
        format!("/status/{}", self.slug)
    }
}

impl fmt::Display for StatusPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_page() {
        let page: StatusPage = serde_json::from_str(
            r#"{
                "id": 1, "slug": "public", "title": "Public", "description": null,
                "icon": "/icon.svg", "theme": "dark", "published": 1, "showTags": 0,
                "domainNameList": ["status.example.com"], "customCSS": "body {}",
                "footerText": null, "showPoweredBy": true, "googleAnalyticsId": null,
                "showCertificateExpiry": false, "autoRefreshInterval": 300
            }"#,
        )
        .unwrap();

        assert!(page.published);
        assert!(!page.show_tags);
        assert_eq!(page.domain_name_list, vec!["status.example.com"]);
        assert_eq!(page.custom_css.as_deref(), Some("body {}"));
        assert_eq!(page.auto_refresh_interval, Some(300));
        assert_eq!(page.path(), "/status/public");
    }

    #[test]
    fn new_page_round_trip() {
        let page = StatusPage::new("ops", "Operations");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["showPoweredBy"], true);
        assert!(json.get("customCSS").is_none());

        let back: StatusPage = serde_json::from_value(json).unwrap();
        assert_eq!(back, page);
    }
}
