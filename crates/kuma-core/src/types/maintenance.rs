use crate::coerce;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A maintenance window during which monitors report `MAINTENANCE`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintenance {
    #[serde(default)]
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub strategy: MaintenanceStrategy,

    #[serde(default, deserialize_with = "coerce::bool_or_int")]
    pub active: bool,

    /// Days between windows for [`MaintenanceStrategy::RecurringInterval`]
    #[serde(
        rename = "intervalDay",
        default,
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_day: Option<i64>,

    /// Start and end date; either end may be unset
    #[serde(rename = "dateRange", default)]
    pub date_range: Vec<Option<String>>,

    /// Daily start and end time for recurring strategies
    #[serde(rename = "timeRange", default)]
    pub time_range: Vec<TimeOfDay>,

    /// ISO weekdays (1 = Monday) for [`MaintenanceStrategy::RecurringWeekday`]
    #[serde(default)]
    pub weekdays: Vec<u8>,

    /// Days for [`MaintenanceStrategy::RecurringDayOfMonth`]
    #[serde(rename = "daysOfMonth", default)]
    pub days_of_month: Vec<DayOfMonth>,

    /// Cron expression for [`MaintenanceStrategy::Cron`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    /// Window length for [`MaintenanceStrategy::Cron`]
    #[serde(
        rename = "durationMinutes",
        default,
        deserialize_with = "coerce::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_minutes: Option<i64>,

    /// IANA zone name, `SAME_AS_SERVER` or `UTC`
    #[serde(alias = "timezoneOption", default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Computed by the server; ignored on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
}

impl Maintenance {
    /// Create an active window with the given strategy
    #[must_use]
    pub fn new(title: impl Into<String>, strategy: MaintenanceStrategy) -> Self {
        Self {
            title: title.into(),
            strategy,
            active: true,
            ..Self::default()
        }
    }

    /// Whether the server reports the window as currently in effect
    #[must_use]
    pub fn is_under_maintenance(&self) -> bool {
        self.status == Some(MaintenanceStatus::UnderMaintenance)
    }
}

impl fmt::Display for Maintenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

/// How a maintenance window recurs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStrategy {
    /// Active until switched off
    #[default]
    Manual,
    /// One window between two dates
    Single,
    RecurringInterval,
    RecurringWeekday,
    RecurringDayOfMonth,
    Cron,
}

/// Server-computed window state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Inactive,
    Scheduled,
    UnderMaintenance,
    Ended,
    Unknown,
}

/// Time of day within a recurring window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// A day-of-month entry: a calendar day or a symbolic one such as `lastDay1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayOfMonth {
    Day(u8),
    Named(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_recurring_weekday_window() {
        let m: Maintenance = serde_json::from_str(
            r#"{
                "id": 5,
                "title": "Patch night",
                "description": "",
                "strategy": "recurring-weekday",
                "active": 1,
                "intervalDay": 1,
                "dateRange": ["2024-01-01 00:00:00", null],
                "timeRange": [{"hours": 2, "minutes": 0}, {"hours": 3, "minutes": 30}],
                "weekdays": [2, 4],
                "daysOfMonth": [],
                "timezone": "Europe/Berlin",
                "status": "scheduled"
            }"#,
        )
        .unwrap();

        assert_eq!(m.strategy, MaintenanceStrategy::RecurringWeekday);
        assert!(m.active);
        assert_eq!(m.date_range, vec![Some("2024-01-01 00:00:00".to_string()), None]);
        assert_eq!(m.time_range[1].to_string(), "03:30");
        assert_eq!(m.weekdays, vec![2, 4]);
        assert_eq!(m.status, Some(MaintenanceStatus::Scheduled));
        assert!(!m.is_under_maintenance());
    }

    #[test]
    fn days_of_month_mix_numbers_and_names() {
        let m: Maintenance = serde_json::from_str(
            r#"{"title":"t","strategy":"recurring-day-of-month","daysOfMonth":[1,15,"lastDay1"],"timezoneOption":"UTC"}"#,
        )
        .unwrap();
        assert_eq!(
            m.days_of_month,
            vec![DayOfMonth::Day(1), DayOfMonth::Day(15), DayOfMonth::Named("lastDay1".into())]
        );
        assert_eq!(m.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn strategy_wire_names() {
        for (strategy, name) in [
            (MaintenanceStrategy::Manual, "manual"),
            (MaintenanceStrategy::Single, "single"),
            (MaintenanceStrategy::RecurringInterval, "recurring-interval"),
            (MaintenanceStrategy::RecurringWeekday, "recurring-weekday"),
            (MaintenanceStrategy::RecurringDayOfMonth, "recurring-day-of-month"),
            (MaintenanceStrategy::Cron, "cron"),
        ] {
            assert_eq!(serde_json::to_value(strategy).unwrap(), name);
        }
        assert_eq!(
            serde_json::to_value(MaintenanceStatus::UnderMaintenance).unwrap(),
            "under-maintenance"
        );
    }

    #[test]
    fn cron_window_round_trip() {
        let mut m = Maintenance::new("backup", MaintenanceStrategy::Cron);
        m.cron = Some("30 3 * * *".into());
        m.duration_minutes = Some(60);

        let back: Maintenance = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let r = serde_json::from_str::<Maintenance>(r#"{"title":"t","strategy":"sometimes"}"#);
        assert!(r.is_err());
    }
}
