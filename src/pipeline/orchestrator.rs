//! Page orchestration
//!
//! Holds the two selector values and re-runs the whole pipeline whenever
//! one of them changes. The dataset is regenerated on every pass and never
//! kept between passes.

use serde::Serialize;

use super::{run_pipeline, DashboardView, Selection, Selector};
use crate::data::{Department, ObservationSource, Physician};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestratorState {
    /// Showing the output of the last pass
    Idle,
    /// A pass is in progress
    Recomputing,
}

/// A user interaction with one of the selector controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorChange {
    Department(Selector<Department>),
    Physician(Selector<Physician>),
}

pub struct Orchestrator<S> {
    source: S,
    selection: Selection,
    state: OrchestratorState,
}

impl<S: ObservationSource> Orchestrator<S> {
    /// Start idle with both selectors on "All"
    pub fn new(source: S) -> Self {
        Self::with_selection(source, Selection::default())
    }

    pub fn with_selection(source: S, selection: Selection) -> Self {
        Self {
            source,
            selection,
            state: OrchestratorState::Idle,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    /// Apply a selector change and recompute
    pub fn apply(&mut self, change: SelectorChange) -> DashboardView {
        match change {
            SelectorChange::Department(department) => self.selection.department = department,
            SelectorChange::Physician(physician) => self.selection.physician = physician,
        }
        tracing::debug!(?change, "Selector changed");
        self.refresh()
    }

    /// Regenerate the dataset and run a full pass for the current selection
    pub fn refresh(&mut self) -> DashboardView {
        self.state = OrchestratorState::Recomputing;
        let observations = self.source.generate();
        let view = run_pipeline(&observations, &self.selection);
        self.state = OrchestratorState::Idle;
        view
    }
}
