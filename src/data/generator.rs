//! Sample data generation
//!
//! Produces the fixed-shape synthetic dataset the dashboard renders. Row `i`
//! is dated `i` days before "now", so row 0 is the most recent.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Arc;

use super::types::{Department, Observation, Physician};

/// Number of observations in every generated dataset
pub const SAMPLE_SIZE: usize = 100;

/// Patient wait time in minutes
pub const WAIT_TIME_RANGE: Range<u32> = 5..120;

pub const BED_OCCUPANCY_RANGE: Range<f64> = 0.5..1.0;

pub const READMISSION_RANGE: Range<f64> = 0.05..0.2;

pub const AVAILABLE_BEDS_RANGE: Range<u32> = 0..20;

/// Generate [`SAMPLE_SIZE`] observations dated backwards from `now`.
///
/// Every field except the date is drawn independently and uniformly from
/// its range.
///
/// # Examples
///
/// ```
/// use hospital::data::{generate_sample_data, SAMPLE_SIZE};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let rows = generate_sample_data(&mut rng, chrono::Utc::now());
/// assert_eq!(rows.len(), SAMPLE_SIZE);
/// assert!(rows[0].date > rows[1].date);
/// ```
pub fn generate_sample_data<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<Observation> {
    (0..SAMPLE_SIZE)
        .map(|day| Observation {
            department: *Department::ALL
                .choose(rng)
                .unwrap_or(&Department::Cardiology),
            physician: *Physician::ALL.choose(rng).unwrap_or(&Physician::Smith),
            patient_wait_time: rng.gen_range(WAIT_TIME_RANGE),
            bed_occupancy_rate: rng.gen_range(BED_OCCUPANCY_RANGE),
            readmission_rate: rng.gen_range(READMISSION_RANGE),
            available_beds: rng.gen_range(AVAILABLE_BEDS_RANGE),
            date: now - Duration::days(day as i64),
        })
        .collect()
}

/// Something that can produce a fresh observation set on demand.
///
/// Implementations hold no dataset between calls: each call returns a new,
/// caller-owned collection so concurrent dashboard passes never share rows.
pub trait ObservationSource: Send + Sync {
    fn generate(&self) -> Vec<Observation>;
}

impl<T: ObservationSource + ?Sized> ObservationSource for Arc<T> {
    fn generate(&self) -> Vec<Observation> {
        (**self).generate()
    }
}

/// Default source backed by `rand`
///
/// Unseeded sources draw from OS entropy and vary run to run. A seeded
/// source rebuilds its RNG from the seed on every call, so each pass sees
/// the same values (only the dates move with the clock).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSource {
    seed: Option<u64>,
}

impl RandomSource {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl ObservationSource for RandomSource {
    fn generate(&self) -> Vec<Observation> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate_sample_data(&mut rng, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_generates_exactly_sample_size_rows() {
        let mut rng = StdRng::seed_from_u64(1);
        let rows = generate_sample_data(&mut rng, fixed_now());
        assert_eq!(rows.len(), 100);
    }

    #[test]
    fn test_field_ranges() {
        let mut rng = StdRng::seed_from_u64(2);
        for row in generate_sample_data(&mut rng, fixed_now()) {
            assert!(WAIT_TIME_RANGE.contains(&row.patient_wait_time));
            assert!(BED_OCCUPANCY_RANGE.contains(&row.bed_occupancy_rate));
            assert!(READMISSION_RANGE.contains(&row.readmission_rate));
            assert!(AVAILABLE_BEDS_RANGE.contains(&row.available_beds));
        }
    }

    #[test]
    fn test_dates_step_back_one_day_per_row() {
        let now = fixed_now();
        let mut rng = StdRng::seed_from_u64(3);
        let rows = generate_sample_data(&mut rng, now);

        assert_eq!(rows[0].date, now);
        assert_eq!(rows[99].date, now - Duration::days(99));
        for pair in rows.windows(2) {
            assert_eq!(pair[0].date - pair[1].date, Duration::days(1));
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = generate_sample_data(&mut StdRng::seed_from_u64(99), fixed_now());
        let b = generate_sample_data(&mut StdRng::seed_from_u64(99), fixed_now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_sample_data(&mut StdRng::seed_from_u64(1), fixed_now());
        let b = generate_sample_data(&mut StdRng::seed_from_u64(2), fixed_now());
        assert_ne!(a, b);
    }

    #[test]
    fn test_every_department_drawn_over_many_rows() {
        let mut rng = StdRng::seed_from_u64(5);
        let rows = generate_sample_data(&mut rng, fixed_now());
        for department in Department::ALL {
            assert!(rows.iter().any(|r| r.department == department));
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let source = RandomSource::seeded(11);
        let a = source.generate();
        let b = source.generate();

        assert_eq!(a.len(), SAMPLE_SIZE);
        let values = |rows: &[Observation]| -> Vec<(u32, u32)> {
            rows.iter()
                .map(|r| (r.patient_wait_time, r.available_beds))
                .collect()
        };
        assert_eq!(values(&a), values(&b));
    }

    #[test]
    fn test_unseeded_source_reports_no_seed() {
        assert_eq!(RandomSource::new().seed(), None);
        assert_eq!(RandomSource::from_seed(Some(4)).seed(), Some(4));
        assert_eq!(RandomSource::new().generate().len(), SAMPLE_SIZE);
    }
}
