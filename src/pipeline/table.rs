//! Upcoming appointments listing

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::{Department, Observation, Physician};

/// Maximum rows shown in the appointments table
pub const APPOINTMENT_LIMIT: usize = 10;

/// Date format used when a table is rendered as text
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Projection of an observation onto the table columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "Department")]
    pub department: Department,
    #[serde(rename = "Physician")]
    pub physician: Physician,
}

impl AppointmentRow {
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl From<&Observation> for AppointmentRow {
    fn from(observation: &Observation) -> Self {
        Self {
            date: observation.date,
            department: observation.department,
            physician: observation.physician,
        }
    }
}

/// Earliest [`APPOINTMENT_LIMIT`] rows of the view, ascending by date.
///
/// The sort is stable, so rows sharing a date keep their view order.
pub fn upcoming_appointments(view: &[&Observation]) -> Vec<AppointmentRow> {
    let mut rows: Vec<AppointmentRow> = view.iter().map(|o| AppointmentRow::from(*o)).collect();
    rows.sort_by_key(|row| row.date);
    rows.truncate(APPOINTMENT_LIMIT);
    rows
}
