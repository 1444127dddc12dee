// Web server — Axum-based job board frontend.
//
// Pages are rendered server-side (see pages.rs); /classify answers the
// posting form's AJAX request with a plain category-or-error string. The
// classifier and job store are shared read-mostly state: the classifier is
// immutable after startup, the store locks only around its job list.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::classify::JobClassifier;
use crate::jobs::JobStore;

pub mod handlers;
pub mod pages;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
    pub classifier: Arc<JobClassifier>,
}

/// Start the web server and block until it exits.
pub async fn run_server(
    store: Arc<dyn JobStore>,
    classifier: Arc<JobClassifier>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState { store, classifier };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Corkboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so integration tests can drive it with
/// `tower::ServiceExt::oneshot` instead of a live socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/job/{id}", get(handlers::job_listing))
        .route("/category/{category}", get(handlers::category_jobs))
        .route(
            "/post_job",
            get(handlers::post_job_form).post(handlers::post_job_submit),
        )
        .route("/classify", post(handlers::classify))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}
