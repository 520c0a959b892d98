//! Type definitions for observation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hospital department an observation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Cardiology,
    Neurology,
    Oncology,
    Pediatrics,
}

impl Department {
    /// Every department, in selector order
    pub const ALL: [Department; 4] = [
        Department::Cardiology,
        Department::Neurology,
        Department::Oncology,
        Department::Pediatrics,
    ];

    /// Display name used in selectors, tables and chart labels
    pub fn name(self) -> &'static str {
        match self {
            Department::Cardiology => "Cardiology",
            Department::Neurology => "Neurology",
            Department::Oncology => "Oncology",
            Department::Pediatrics => "Pediatrics",
        }
    }

    /// Exact-match lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attending physician of an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Physician {
    #[serde(rename = "Dr. Smith")]
    Smith,
    #[serde(rename = "Dr. Johnson")]
    Johnson,
    #[serde(rename = "Dr. Williams")]
    Williams,
    #[serde(rename = "Dr. Brown")]
    Brown,
}

impl Physician {
    /// Every physician, in selector order
    pub const ALL: [Physician; 4] = [
        Physician::Smith,
        Physician::Johnson,
        Physician::Williams,
        Physician::Brown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Physician::Smith => "Dr. Smith",
            Physician::Johnson => "Dr. Johnson",
            Physician::Williams => "Dr. Williams",
            Physician::Brown => "Dr. Brown",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Physician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One simulated hospital event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Department")]
    pub department: Department,
    #[serde(rename = "Physician")]
    pub physician: Physician,
    /// Minutes, in `[5, 120)`
    #[serde(rename = "Patient Wait Time")]
    pub patient_wait_time: u32,
    /// Fraction, in `[0.5, 1.0)`
    #[serde(rename = "Bed Occupancy Rate")]
    pub bed_occupancy_rate: f64,
    /// Fraction, in `[0.05, 0.2)`
    #[serde(rename = "Readmission Rate")]
    pub readmission_rate: f64,
    /// In `[0, 20)`
    #[serde(rename = "Available Beds")]
    pub available_beds: u32,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}
