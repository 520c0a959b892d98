//! Type definitions for dashboard requests

use serde::Deserialize;

use crate::pipeline::Selection;

/// Query string accepted by the page and JSON endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub department: Option<String>,
    pub physician: Option<String>,
}

impl DashboardQuery {
    /// Collect selector values from raw query pairs.
    ///
    /// Unknown keys are ignored. A key repeated with one value keeps it;
    /// a key repeated with conflicting values is dropped, which means "All".
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            department: single_value(pairs, "department"),
            physician: single_value(pairs, "physician"),
        }
    }

    /// Resolve to a selection; missing or unknown values mean "All"
    pub fn selection(&self) -> Selection {
        Selection::from_params(self.department.as_deref(), self.physician.as_deref())
    }
}

fn single_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
    let first = values.next()?;
    if values.all(|v| v == first) {
        Some(first.clone())
    } else {
        tracing::warn!(key, "Conflicting values for selector, using All");
        None
    }
}
