use serde::{Deserialize, Serialize};
use std::fmt;

/// A label that can be attached to monitors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// CSS colour, usually `#rrggbb`
    pub color: String,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

/// A tag as attached to a monitor, with its per-monitor value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorTag {
    pub tag_id: i64,
    pub monitor_id: i64,
    /// Free-form value, e.g. `prod` for an `env` tag
    #[serde(default)]
    pub value: String,
    /// Tag name, filled in by the server on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tag colour, filled in by the server on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl fmt::Display for MonitorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        let tag = Tag::new("env", "#2563eb");
        let back: Tag = serde_json::from_str(&serde_json::to_string(&tag).unwrap()).unwrap();
        assert_eq!(back, tag);
        assert_eq!(tag.to_string(), r##"id: 0, name: "env", color: "#2563eb""##);
    }

    #[test]
    fn monitor_tag_uses_snake_case_keys() {
        let mt: MonitorTag = serde_json::from_str(
            r##"{"tag_id":1,"monitor_id":7,"value":"prod","name":"env","color":"#2563eb"}"##,
        )
        .unwrap();
        assert_eq!(mt.tag_id, 1);
        assert_eq!(mt.monitor_id, 7);
        assert_eq!(mt.name.as_deref(), Some("env"));

        let json = serde_json::to_value(MonitorTag { tag_id: 1, monitor_id: 7, ..MonitorTag::default() }).unwrap();
        assert_eq!(json, serde_json::json!({"tag_id": 1, "monitor_id": 7, "value": ""}));
    }
}
