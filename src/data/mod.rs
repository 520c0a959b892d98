//! Synthetic hospital observations
//!
//! Each dashboard pass works on its own freshly generated set of
//! [`Observation`]s. Generation goes through the [`ObservationSource`] trait
//! so tests and the `--seed` flag can swap in a reproducible source.

pub mod generator;
pub mod types;

pub use generator::{
    generate_sample_data, ObservationSource, RandomSource, AVAILABLE_BEDS_RANGE,
    BED_OCCUPANCY_RANGE, READMISSION_RANGE, SAMPLE_SIZE, WAIT_TIME_RANGE,
};
pub use types::{Department, Observation, Physician};
