//! Chart models and SVG rendering
//!
//! Builders turn a filtered view into serializable chart models; [`svg`]
//! draws those models. Points and bars keep the view's order, nothing is
//! re-sorted here.

pub mod svg;

pub use svg::{render_bar_svg, render_line_svg, render_pie_svg, ChartError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::{Department, Observation};

pub const WAIT_TIME_TITLE: &str = "Patient Wait Times Over Time";
pub const OCCUPANCY_TITLE: &str = "Bed Occupancy Rates Over Time";
pub const DEMOGRAPHICS_TITLE: &str = "Patient Demographics by Department";

/// One dated value of a line or bar chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Connected line, one point per row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub points: Vec<SeriesPoint>,
}

/// One bar per row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: usize,
}

/// Row counts per department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// The three charts of a dashboard pass, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub wait_times: TimeSeriesChart,
    pub occupancy: BarChart,
    pub demographics: PieChart,
}

impl ChartSet {
    pub fn build(view: &[&Observation]) -> Self {
        Self {
            wait_times: wait_time_series(view),
            occupancy: occupancy_bars(view),
            demographics: department_pie(view),
        }
    }
}

pub fn wait_time_series(view: &[&Observation]) -> TimeSeriesChart {
    TimeSeriesChart {
        title: WAIT_TIME_TITLE,
        y_label: "Patient Wait Time",
        points: view
            .iter()
            .map(|o| SeriesPoint {
                date: o.date,
                value: f64::from(o.patient_wait_time),
            })
            .collect(),
    }
}

pub fn occupancy_bars(view: &[&Observation]) -> BarChart {
    BarChart {
        title: OCCUPANCY_TITLE,
        y_label: "Bed Occupancy Rate",
        bars: view
            .iter()
            .map(|o| SeriesPoint {
                date: o.date,
                value: o.bed_occupancy_rate,
            })
            .collect(),
    }
}

/// One slice per distinct department, in order of first appearance
pub fn department_pie(view: &[&Observation]) -> PieChart {
    let mut counts: Vec<(Department, usize)> = Vec::new();
    for observation in view {
        match counts.iter_mut().find(|(d, _)| *d == observation.department) {
            Some((_, count)) => *count += 1,
            None => counts.push((observation.department, 1)),
        }
    }

    PieChart {
        title: DEMOGRAPHICS_TITLE,
        slices: counts
            .into_iter()
            .map(|(department, count)| PieSlice {
                label: department.name(),
                count,
            })
            .collect(),
    }
}
