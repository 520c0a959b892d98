//! HTTP handlers for dashboard routes

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use rust_embed::RustEmbed;
use std::sync::Arc;

use super::render::render_page;
use super::types::DashboardQuery;
use crate::api::AppState;
use crate::pipeline::{DashboardView, Orchestrator};

/// Static assets served under /assets
#[derive(RustEmbed)]
#[folder = "dashboard/"]
pub(crate) struct DashboardAssets;

/// Raw query pairs; repeated or malformed keys never reject the request
type RawQuery = Query<Vec<(String, String)>>;

/// Run one pass for the request's selection on a dataset owned by this request
fn run_pass(state: &AppState, query: &DashboardQuery) -> DashboardView {
    let mut orchestrator = Orchestrator::with_selection(Arc::clone(&state.source), query.selection());
    orchestrator.refresh()
}

/// Serves the dashboard page for the selection in the query string
pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): RawQuery,
) -> Response {
    let view = run_pass(&state, &DashboardQuery::from_pairs(&pairs));

    match render_page(&view, &state.config.dashboard.title) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render dashboard page");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Serves the same pass as JSON
pub async fn view_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): RawQuery,
) -> Json<DashboardView> {
    Json(run_pass(&state, &DashboardQuery::from_pairs(&pairs)))
}

/// Serves static assets (CSS, etc.)
pub async fn assets_handler(Path(path): Path<String>) -> Response {
    match DashboardAssets::get(&path) {
        Some(content) => {
            let body = content.data;
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();

            ([(header::CONTENT_TYPE, mime_type.as_ref())], body).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::SAMPLE_SIZE;
    use crate::pipeline::Selector;

    fn test_state() -> Arc<AppState> {
        let mut config = DashboardConfig::default();
        config.dashboard.seed = Some(7);
        Arc::new(AppState::new(Arc::new(config)))
    }

    #[tokio::test]
    async fn test_dashboard_handler_returns_html() {
        let response = dashboard_handler(State(test_state()), Query(Vec::new())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("should have content-type header");
        assert!(content_type.to_str().unwrap().contains("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Hospital Dashboard"));
        assert!(html.contains("Upcoming Appointments"));
    }

    #[tokio::test]
    async fn test_view_handler_applies_selection() {
        let pairs = vec![("department".to_string(), "Pediatrics".to_string())];
        let Json(view) = view_handler(State(test_state()), Query(pairs)).await;

        assert_eq!(view.total_rows, SAMPLE_SIZE);
        assert!(matches!(view.selection.department, Selector::Only(_)));
        assert_eq!(view.selection.physician, Selector::All);
        assert!(view.filtered_rows <= SAMPLE_SIZE);
    }

    #[tokio::test]
    async fn test_assets_handler_serves_css() {
        let response = assets_handler(Path("styles.css".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let ct = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(ct.contains("css"), "Expected CSS content type, got: {}", ct);
    }

    #[tokio::test]
    async fn test_assets_handler_not_found() {
        let response = assets_handler(Path("nonexistent.js".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_view_handler_conflicting_keys_select_all() {
        let pairs = vec![
            ("department".to_string(), "Cardiology".to_string()),
            ("department".to_string(), "Radiology".to_string()),
        ];
        let Json(view) = view_handler(State(test_state()), Query(pairs)).await;
        assert_eq!(view.selection.department, Selector::All);
        assert_eq!(view.filtered_rows, SAMPLE_SIZE);
    }

    #[tokio::test]
    async fn test_assets_handler_page_template_not_exposed() {
        let response = assets_handler(Path("dashboard.html".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
