//! On-call and incident management providers.

use crate::coerce;
use serde::{Deserialize, Serialize};

/// PagerDuty Events API v2
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerDuty {
    /// Events API endpoint
    #[serde(rename = "pagerdutyIntegrationUrl", skip_serializing_if = "Option::is_none")]
    pub integration_url: Option<String>,

    /// Routing key of the service integration
    #[serde(rename = "pagerdutyIntegrationKey", skip_serializing_if = "Option::is_none")]
    pub integration_key: Option<String>,

    /// `info`, `warning`, `error` or `critical`
    #[serde(rename = "pagerdutyPriority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// `0` keeps incidents open, `acknowledge` or `resolve` act on recovery
    #[serde(rename = "pagerdutyAutoResolve", skip_serializing_if = "Option::is_none")]
    pub auto_resolve: Option<String>,
}

/// PagerTree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerTree {
    #[serde(rename = "pagertreeIntegrationUrl", skip_serializing_if = "Option::is_none")]
    pub integration_url: Option<String>,

    /// `silent`, `low`, `medium`, `high` or `critical`
    #[serde(rename = "pagertreeUrgency", skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,

    #[serde(rename = "pagertreeAutoResolve", skip_serializing_if = "Option::is_none")]
    pub auto_resolve: Option<String>,
}

/// Atlassian Opsgenie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opsgenie {
    #[serde(rename = "opsgenieApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// `us` or `eu`
    #[serde(rename = "opsgenieRegion", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// 1 (P1) to 5 (P5)
    #[serde(
        rename = "opsgeniePriority",
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,
}

/// Splunk On-Call (VictorOps)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Splunk {
    #[serde(rename = "splunkRestURL", skip_serializing_if = "Option::is_none")]
    pub rest_url: Option<String>,

    #[serde(rename = "splunkSeverity", skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(rename = "splunkAutoResolve", skip_serializing_if = "Option::is_none")]
    pub auto_resolve: Option<String>,
}

/// Squadcast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Squadcast {
    #[serde(rename = "squadcastWebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Alerta
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alerta {
    #[serde(rename = "alertaApiEndpoint", skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    #[serde(rename = "alertaApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "alertaEnvironment", skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Severity sent when a monitor goes down
    #[serde(rename = "alertaAlertState", skip_serializing_if = "Option::is_none")]
    pub alert_state: Option<String>,

    /// Severity sent when a monitor recovers
    #[serde(rename = "alertaRecoverState", skip_serializing_if = "Option::is_none")]
    pub recover_state: Option<String>,
}

/// AlertNow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertNow {
    #[serde(rename = "alertNowWebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// GoAlert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoAlert {
    #[serde(rename = "goAlertBaseURL", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(rename = "goAlertToken", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Grafana OnCall
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrafanaOncall {
    #[serde(rename = "GrafanaOncallURL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Heii On-Call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeiiOnCall {
    #[serde(rename = "heiiOnCallApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "heiiOnCallTriggerId", skip_serializing_if = "Option::is_none")]
    pub trigger_id: Option<String>,
}

/// SIGNL4
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signl4 {
    #[serde(rename = "webhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// FlashDuty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashDuty {
    #[serde(rename = "flashdutyIntegrationKey", skip_serializing_if = "Option::is_none")]
    pub integration_key: Option<String>,

    /// `Info`, `Warning` or `Critical`
    #[serde(rename = "flashdutySeverity", skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Keep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keep {
    #[serde(rename = "webhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(rename = "webhookAPIKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
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
    fn incident_round_trips() {
        round_trip(PagerDuty {
            integration_url: s("https://events.pagerduty.com/v2/enqueue"),
            integration_key: s("R0UT1NG"),
            priority: s("critical"),
            auto_resolve: s("resolve"),
        });
        round_trip(PagerTree {
            integration_url: s("https://api.pagertree.com/integration/x"),
            urgency: s("high"),
            auto_resolve: s("resolve"),
        });
        round_trip(Opsgenie { api_key: s("k"), region: s("eu"), priority: Some(2) });
        round_trip(Splunk {
            rest_url: s("https://alert.victorops.com/x"),
            severity: s("CRITICAL"),
            auto_resolve: s("0"),
        });
        round_trip(Squadcast { webhook_url: s("https://api.squadcast.com/x") });
        round_trip(Alerta {
            api_endpoint: s("https://alerta.example/api"),
            api_key: s("k"),
            environment: s("Production"),
            alert_state: s("critical"),
            recover_state: s("cleared"),
        });
        round_trip(AlertNow { webhook_url: s("https://alertnowitgr.opsnow.com/x") });
        round_trip(GoAlert { base_url: s("https://goalert.example"), token: s("t") });
        round_trip(GrafanaOncall { url: s("https://oncall.example/integrations/v1/x") });
        round_trip(HeiiOnCall { api_key: s("k"), trigger_id: s("t1") });
        round_trip(Signl4 { webhook_url: s("https://connect.signl4.com/webhook/x") });
        round_trip(FlashDuty { integration_key: s("k"), severity: s("Critical") });
        round_trip(Keep { webhook_url: s("https://keep.example/alerts"), api_key: s("k") });
    }

    #[test]
    fn pagerduty_uses_pascal_case_discriminator() {
        let bytes = br#"{"id":9,"name":"pd","active":true,"userId":1,"isDefault":false,"config":"{\"type\":\"PagerDuty\",\"applyExisting\":true,\"pagerdutyIntegrationKey\":\"k\"}"}"#;
        let notification = Notification::decode(bytes).unwrap();
        assert!(matches!(notification.details, Details::PagerDuty(_)));

        let lower = br#"{"id":9,"name":"pd","active":true,"userId":1,"isDefault":false,"config":"{\"type\":\"pagerduty\",\"applyExisting\":true}"}"#;
        assert!(Notification::decode(lower).unwrap().details.is_generic());
    }
}
