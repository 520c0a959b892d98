//! Shared test utilities for dashboard integration tests.
//!
//! Provides a fixed observation source, router builders and response
//! helpers to reduce duplication across test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use hospital::api::{create_router, AppState};
use hospital::config::DashboardConfig;
use hospital::data::{Department, Observation, ObservationSource, Physician};
use std::sync::Arc;
use tower::Service;

/// UUID v4 string length: "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
pub const UUID_V4_STRING_LEN: usize = 36;

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Build one observation dated `days_back` days before [`fixed_now`].
pub fn make_observation(
    department: Department,
    physician: Physician,
    wait: u32,
    occupancy: f64,
    readmission: f64,
    beds: u32,
    days_back: i64,
) -> Observation {
    Observation {
        department,
        physician,
        patient_wait_time: wait,
        bed_occupancy_rate: occupancy,
        readmission_rate: readmission,
        available_beds: beds,
        date: fixed_now() - Duration::days(days_back),
    }
}

/// Source that returns the same rows on every call.
pub struct FixedSource(pub Vec<Observation>);

impl ObservationSource for FixedSource {
    fn generate(&self) -> Vec<Observation> {
        self.0.clone()
    }
}

/// Three rows with known KPI results:
///
/// - All / All: 3 rows, last row has 4 beds (alert)
/// - Cardiology: rows 0 and 2, avg wait 40 min, occupancy 85.00%, 4 beds
/// - Neurology: row 1 only, 15 beds (no alert)
pub fn scenario_rows() -> Vec<Observation> {
    vec![
        make_observation(Department::Cardiology, Physician::Smith, 30, 0.8, 0.1, 5, 0),
        make_observation(Department::Neurology, Physician::Johnson, 60, 0.6, 0.2, 15, 1),
        make_observation(Department::Cardiology, Physician::Brown, 50, 0.9, 0.05, 4, 2),
    ]
}

/// Create a router over a fixed set of rows.
pub fn make_fixed_router(rows: Vec<Observation>) -> Router {
    let config = Arc::new(DashboardConfig::default());
    let state = Arc::new(AppState::with_source(config, Arc::new(FixedSource(rows))));
    create_router(state)
}

/// Create a router over seeded random data.
pub fn make_seeded_router(seed: u64) -> Router {
    let mut config = DashboardConfig::default();
    config.dashboard.seed = Some(seed);
    create_router(Arc::new(AppState::new(Arc::new(config))))
}

/// Issue a GET and return status plus body text.
pub async fn get(app: &mut Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Issue a GET and parse the body as JSON.
pub async fn get_json(app: &mut Router, uri: &str) -> serde_json::Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "unexpected status for {uri}: {body}");
    serde_json::from_str(&body).unwrap()
}

/// KPI card value by label from a `/api/dashboard` response.
pub fn kpi_value<'a>(view: &'a serde_json::Value, label: &str) -> &'a str {
    view["kpi_cards"]
        .as_array()
        .unwrap()
        .iter()
        .find(|card| card["label"] == label)
        .unwrap_or_else(|| panic!("missing card {label}"))["value"]
        .as_str()
        .unwrap()
}
