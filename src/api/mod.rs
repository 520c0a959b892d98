//! # HTTP surface
//!
//! Routes the dashboard page, its JSON twin, static assets and a health
//! probe.
//!
//! ## Endpoints
//!
//! - `GET /` - Dashboard page for `?department=..&physician=..`
//! - `GET /api/dashboard` - Same pass as JSON
//! - `GET /assets/*path` - Embedded CSS and template assets
//! - `GET /health` - Liveness and uptime
//!
//! ## Example
//!
//! ```no_run
//! use hospital::api::{AppState, create_router};
//! use hospital::config::DashboardConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(DashboardConfig::default());
//! let state = Arc::new(AppState::new(config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8501").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Isolation
//!
//! Every request generates its own dataset through the shared
//! [`ObservationSource`]. No observation outlives the request that created
//! it, so concurrent sessions never see each other's rows.

mod health;

pub use health::HealthResponse;

use crate::config::DashboardConfig;
use crate::dashboard;
use crate::data::{ObservationSource, RandomSource};
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    /// Produces a fresh dataset for every pass
    pub source: Arc<dyn ObservationSource>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the random source described by `config.dashboard.seed`.
    pub fn new(config: Arc<DashboardConfig>) -> Self {
        let source = Arc::new(RandomSource::from_seed(config.dashboard.seed));
        Self::with_source(config, source)
    }

    pub fn with_source(config: Arc<DashboardConfig>, source: Arc<dyn ObservationSource>) -> Self {
        Self {
            config,
            source,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Create the main router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/", get(dashboard::dashboard_handler))
        .route("/api/dashboard", get(dashboard::view_handler))
        .route("/assets/*path", get(dashboard::assets_handler))
        .route("/health", get(health::handle))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
