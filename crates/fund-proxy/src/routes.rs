//! Proxy routes and the static site fallback
//!
//! The two dataset endpoints pass the upstream CSV body through untouched.
//! An upstream failure becomes a 500 with a plain-text body; the frontend
//! treats that as fatal for the whole render cycle.

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::upstream::Upstream;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
    pub contributions_url: String,
    pub disbursements_url: String,
}

/// Creates the application router: the two dataset proxies plus the static
/// site as fallback.
pub fn create_router(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/api/contributions", get(get_contributions))
        .route("/api/disbursements", get(get_disbursements))
        .fallback_service(ServeDir::new(site_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn get_contributions(State(state): State<AppState>) -> Response {
    proxy_csv(&state, &state.contributions_url, "contributions").await
}

async fn get_disbursements(State(state): State<AppState>) -> Response {
    proxy_csv(&state, &state.disbursements_url, "disbursements").await
}

async fn proxy_csv(state: &AppState, url: &str, dataset: &str) -> Response {
    match state.upstream.fetch_csv(url).await {
        Ok(body) => ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response(),
        Err(e) => {
            error!("Error fetching {dataset}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching {dataset} data"),
            )
                .into_response()
        }
    }
}
