//! Dashboard pipeline
//!
//! One pass takes a freshly generated dataset and a [`Selection`] and
//! derives everything the page shows:
//!
//! ```text
//! observations -> filter -> ( KPIs, alerts, charts, appointments )
//! ```
//!
//! Each stage is a plain function over a borrowed view, so a pass has no
//! hidden state and independent passes can run side by side.

pub mod alert;
pub mod filter;
pub mod kpi;
pub mod orchestrator;
pub mod table;

pub use alert::{
    evaluate_alerts, Alert, AlertLevel, LOW_BED_THRESHOLD, LOW_BED_URGENT, LOW_BED_WARNING,
};
pub use filter::{filter_observations, Category, Selection, Selector, ALL_SENTINEL};
pub use kpi::{KpiCard, KpiSummary, NO_DATA};
pub use orchestrator::{Orchestrator, OrchestratorState, SelectorChange};
pub use table::{upcoming_appointments, AppointmentRow, APPOINTMENT_LIMIT};

use serde::Serialize;

use crate::charts::ChartSet;
use crate::data::{Department, Observation, Physician};
use crate::logging::generate_run_id;

/// Values offered by both selector controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOptions {
    pub departments: Vec<&'static str>,
    pub physicians: Vec<&'static str>,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            departments: Selector::<Department>::options(),
            physicians: Selector::<Physician>::options(),
        }
    }
}

/// Everything rendered by one dashboard pass
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Correlation ID of the pass, also recorded on its log span
    pub run_id: String,
    pub selection: Selection,
    pub options: SelectorOptions,
    /// Rows in the generated dataset
    pub total_rows: usize,
    /// Rows left after filtering
    pub filtered_rows: usize,
    pub kpis: KpiSummary,
    pub kpi_cards: Vec<KpiCard>,
    pub alerts: Vec<Alert>,
    pub charts: ChartSet,
    pub appointments: Vec<AppointmentRow>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.filtered_rows == 0
    }
}

/// Run every stage over `observations` for one selection.
///
/// An empty filtered view is a normal result: KPIs read "No data", charts
/// are blank, the table is empty and no alert fires.
pub fn run_pipeline(observations: &[Observation], selection: &Selection) -> DashboardView {
    let run_id = generate_run_id();
    let span = tracing::debug_span!(
        "dashboard_pass",
        run_id = %run_id,
        department = selection.department.label(),
        physician = selection.physician.label(),
    );
    let _guard = span.enter();

    let view = filter_observations(observations, selection);
    tracing::debug!(
        total_rows = observations.len(),
        filtered_rows = view.len(),
        "Filtered observations"
    );

    let kpis = KpiSummary::compute(&view);
    let alerts = evaluate_alerts(kpis.available_beds);
    for alert in &alerts {
        tracing::info!(
            alert_level = ?alert.level,
            available_beds = ?kpis.available_beds,
            "{}",
            alert.message
        );
    }

    DashboardView {
        run_id,
        selection: *selection,
        options: SelectorOptions::default(),
        total_rows: observations.len(),
        filtered_rows: view.len(),
        kpi_cards: kpis.cards(),
        kpis,
        alerts,
        charts: ChartSet::build(&view),
        appointments: upcoming_appointments(&view),
    }
}
