//! Key performance indicators over a filtered view

use serde::Serialize;

use crate::data::Observation;

/// Placeholder shown by a metric card when the view is empty
pub const NO_DATA: &str = "No data";

/// The four headline aggregates of a dashboard pass.
///
/// Every field is `None` for an empty view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KpiSummary {
    /// Mean wait time in minutes
    pub avg_wait_time: Option<f64>,
    /// Mean bed occupancy as a fraction
    pub avg_bed_occupancy: Option<f64>,
    /// Mean readmission rate as a fraction
    pub avg_readmission: Option<f64>,
    /// Available beds of the positional last row.
    ///
    /// This is an index read, not a date lookup: in generation order the
    /// last row is the oldest one.
    pub available_beds: Option<u32>,
}

/// Labeled, formatted metric for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
}

impl KpiSummary {
    pub fn compute(view: &[&Observation]) -> Self {
        Self {
            avg_wait_time: mean(view, |o| f64::from(o.patient_wait_time)),
            avg_bed_occupancy: mean(view, |o| o.bed_occupancy_rate),
            avg_readmission: mean(view, |o| o.readmission_rate),
            available_beds: last_available_beds(view),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg_wait_time.is_none()
    }

    /// Cards in display order
    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard {
                label: "Avg. Patient Wait Time",
                value: format_or_no_data(self.avg_wait_time, format_minutes),
            },
            KpiCard {
                label: "Avg. Bed Occupancy Rate",
                value: format_or_no_data(self.avg_bed_occupancy, format_percent),
            },
            KpiCard {
                label: "Avg. Readmission Rate",
                value: format_or_no_data(self.avg_readmission, format_percent),
            },
            KpiCard {
                label: "Available Beds",
                value: format_or_no_data(self.available_beds, |beds| beds.to_string()),
            },
        ]
    }
}

/// Available beds of the last row in the view's current ordering
pub fn last_available_beds(view: &[&Observation]) -> Option<u32> {
    view.last().map(|o| o.available_beds)
}

fn mean(view: &[&Observation], field: impl Fn(&Observation) -> f64) -> Option<f64> {
    if view.is_empty() {
        return None;
    }
    let total: f64 = view.iter().map(|o| field(*o)).sum();
    Some(total / view.len() as f64)
}

/// Whole minutes, e.g. `"63 min"`
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.0} min", minutes)
}

/// Fraction as a two-decimal percentage, e.g. `0.7512` -> `"75.12%"`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn format_or_no_data<T>(value: Option<T>, format: impl Fn(T) -> String) -> String {
    value.map(format).unwrap_or_else(|| NO_DATA.to_string())
}
