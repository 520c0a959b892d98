//! Department and physician selectors

use serde::{Serialize, Serializer};
use std::fmt;

use crate::data::{Department, Observation, Physician};

/// Sentinel selector value meaning "no filtering on this dimension"
pub const ALL_SENTINEL: &str = "All";

/// A category that can appear in a selector control
pub trait Category: Copy + PartialEq + fmt::Debug + 'static {
    /// Selector dimension, for log fields
    const DIMENSION: &'static str;

    fn all() -> &'static [Self];
    fn name(self) -> &'static str;
    fn from_name(name: &str) -> Option<Self>;
}

impl Category for Department {
    const DIMENSION: &'static str = "department";

    fn all() -> &'static [Self] {
        &Department::ALL
    }

    fn name(self) -> &'static str {
        Department::name(self)
    }

    fn from_name(name: &str) -> Option<Self> {
        Department::from_name(name)
    }
}

impl Category for Physician {
    const DIMENSION: &'static str = "physician";

    fn all() -> &'static [Self] {
        &Physician::ALL
    }

    fn name(self) -> &'static str {
        Physician::name(self)
    }

    fn from_name(name: &str) -> Option<Self> {
        Physician::from_name(name)
    }
}

/// Current value of one selector control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Category> Selector<T> {
    /// Parse a selector value submitted by a client.
    ///
    /// Known names select that category. The "All" sentinel, an empty value,
    /// and anything out of domain all fall back to [`Selector::All`].
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_SENTINEL {
            return Selector::All;
        }
        match T::from_name(value) {
            Some(category) => Selector::Only(category),
            None => {
                tracing::warn!(
                    dimension = T::DIMENSION,
                    value = %value,
                    "Unknown selector value, falling back to All"
                );
                Selector::All
            }
        }
    }

    /// Values offered by the selector control: the sentinel then every category
    pub fn options() -> Vec<&'static str> {
        std::iter::once(ALL_SENTINEL)
            .chain(T::all().iter().map(|c| c.name()))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Selector::All => ALL_SENTINEL,
            Selector::Only(category) => category.name(),
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(category) => *category == value,
        }
    }
}

impl<T: Category> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Both selector values for one dashboard pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub department: Selector<Department>,
    pub physician: Selector<Physician>,
}

impl Selection {
    pub fn new(department: Selector<Department>, physician: Selector<Physician>) -> Self {
        Self {
            department,
            physician,
        }
    }

    /// Build a selection from raw client values; missing values mean "All"
    pub fn from_params(department: Option<&str>, physician: Option<&str>) -> Self {
        Self {
            department: department.map(Selector::parse).unwrap_or_default(),
            physician: physician.map(Selector::parse).unwrap_or_default(),
        }
    }

    pub fn matches(&self, observation: &Observation) -> bool {
        self.department.matches(observation.department)
            && self.physician.matches(observation.physician)
    }
}

/// Borrow the observations matching both selectors, keeping collection order
pub fn filter_observations<'a>(
    observations: &'a [Observation],
    selection: &Selection,
) -> Vec<&'a Observation> {
    observations
        .iter()
        .filter(|o| selection.matches(o))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_sample_data;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Vec<Observation> {
        generate_sample_data(&mut StdRng::seed_from_u64(21), chrono::Utc::now())
    }

    #[test]
    fn test_parse_known_department() {
        assert_eq!(
            Selector::<Department>::parse("Cardiology"),
            Selector::Only(Department::Cardiology)
        );
    }

    #[test]
    fn test_parse_sentinel_and_empty() {
        assert_eq!(Selector::<Department>::parse("All"), Selector::All);
        assert_eq!(Selector::<Physician>::parse(""), Selector::All);
    }

    #[test]
    fn test_parse_out_of_domain_falls_back_to_all() {
        assert_eq!(Selector::<Department>::parse("Radiology"), Selector::All);
        assert_eq!(Selector::<Physician>::parse("Dr. Who"), Selector::All);
    }

    #[test]
    fn test_options_lead_with_sentinel() {
        assert_eq!(
            Selector::<Department>::options(),
            vec!["All", "Cardiology", "Neurology", "Oncology", "Pediatrics"]
        );
        assert_eq!(
            Selector::<Physician>::options(),
            vec!["All", "Dr. Smith", "Dr. Johnson", "Dr. Williams", "Dr. Brown"]
        );
    }

    #[test]
    fn test_all_all_keeps_everything_in_order() {
        let rows = sample();
        let view = filter_observations(&rows, &Selection::default());
        assert_eq!(view.len(), rows.len());
        for (kept, original) in view.iter().zip(rows.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_department_only() {
        let rows = sample();
        let selection = Selection::from_params(Some("Cardiology"), Some("All"));
        let view = filter_observations(&rows, &selection);

        let expected = rows
            .iter()
            .filter(|r| r.department == Department::Cardiology)
            .count();
        assert_eq!(view.len(), expected);
        assert!(view.iter().all(|r| r.department == Department::Cardiology));
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let rows = sample();
        let selection = Selection::new(
            Selector::Only(Department::Neurology),
            Selector::Only(Physician::Brown),
        );
        let view = filter_observations(&rows, &selection);

        assert!(view
            .iter()
            .all(|r| r.department == Department::Neurology && r.physician == Physician::Brown));
        let expected = rows
            .iter()
            .filter(|r| r.department == Department::Neurology && r.physician == Physician::Brown)
            .count();
        assert_eq!(view.len(), expected);
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let rows: Vec<Observation> = sample()
            .into_iter()
            .filter(|r| r.department != Department::Oncology)
            .collect();
        let selection = Selection::from_params(Some("Oncology"), None);
        assert!(filter_observations(&rows, &selection).is_empty());
    }

    #[test]
    fn test_selection_serializes_labels() {
        let selection = Selection::new(Selector::All, Selector::Only(Physician::Smith));
        let value = serde_json::to_value(selection).unwrap();
        assert_eq!(value["department"], "All");
        assert_eq!(value["physician"], "Dr. Smith");
    }
}
