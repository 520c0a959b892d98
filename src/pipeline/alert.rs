//! Low bed availability alerting

use serde::Serialize;

/// Alerts fire when available beds drop strictly below this value
pub const LOW_BED_THRESHOLD: u32 = 10;

pub const LOW_BED_WARNING: &str = "Alert: Available beds are less than 10!";
pub const LOW_BED_URGENT: &str = "URGENT: Low bed availability!";

/// Severity of a dashboard notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Warning,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: &'static str,
}

/// Evaluate the low-bed rule against the current available beds value.
///
/// Below the threshold both a warning and an urgent notice are returned,
/// otherwise nothing. An empty view (`None`) never alerts.
pub fn evaluate_alerts(available_beds: Option<u32>) -> Vec<Alert> {
    match available_beds {
        Some(beds) if beds < LOW_BED_THRESHOLD => vec![
            Alert {
                level: AlertLevel::Warning,
                message: LOW_BED_WARNING,
            },
            Alert {
                level: AlertLevel::Urgent,
                message: LOW_BED_URGENT,
            },
        ],
        _ => Vec::new(),
    }
}
