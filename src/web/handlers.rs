// Route handlers for the job board.
//
// GET  /                 — all listings with category sidebar
// GET  /job/{id}         — single job by webindex, 404 when absent
// GET  /category/{name}  — listings filtered to one category
// GET  /post_job         — posting form
// POST /post_job         — submit a job; classifier suggests the category
// POST /classify         — AJAX endpoint, returns the plain suggestion string

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{error, info};

use crate::jobs::NewJob;
use crate::web::{pages, AppState};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let jobs = state.store.list().await;
    let categories = state.store.categories().await;
    Html(pages::index(&jobs, &categories, None))
}

pub async fn job_listing(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Response {
    let categories = state.store.categories().await;
    match state.store.get(id).await {
        Some(job) => Html(pages::job_detail(&job, &categories)).into_response(),
        None => (StatusCode::NOT_FOUND, "Job not found").into_response(),
    }
}

pub async fn category_jobs(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Html<String> {
    let jobs = state.store.by_category(&category).await;
    let categories = state.store.categories().await;
    Html(pages::index(&jobs, &categories, Some(&category)))
}

pub async fn post_job_form(State(state): State<AppState>) -> Html<String> {
    let categories = state.store.categories().await;
    Html(pages::post_form(&categories, None))
}

#[derive(Deserialize)]
pub struct PostJobForm {
    pub title: String,
    pub company: String,
    pub description: String,
    /// Empty string means "suggest one for me".
    #[serde(default)]
    pub category: Option<String>,
}

pub async fn post_job_submit(
    State(state): State<AppState>,
    Form(form): Form<PostJobForm>,
) -> Response {
    // Store the training-style preprocessed form alongside the raw text;
    // fall back to the raw description when the pipeline is degraded.
    let processed = state
        .classifier
        .preprocessed(&form.description)
        .unwrap_or_else(|| form.description.clone());

    let suggestion = state.classifier.classify_job(&form.description);
    info!(suggestion = %suggestion, title = %form.title, "Classified submitted job");

    let selected = form.category.filter(|c| !c.is_empty());

    // A human-selected category always wins; the suggestion only matters
    // when the user asked for one. A failed suggestion with no selection
    // sends the form back with the error message.
    let category = match (selected, suggestion) {
        (Some(choice), _) => choice,
        (None, s) if s.starts_with("Unable to classify") => {
            let categories = state.store.categories().await;
            return Html(pages::post_form(&categories, Some(&s))).into_response();
        }
        (None, s) => s,
    };

    let new_job = NewJob {
        title: form.title,
        company: form.company,
        category,
        description: form.description,
        processed_description: processed,
    };

    match state.store.add(new_job).await {
        Ok(job) => Redirect::to(&format!("/job/{}", job.webindex)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to save posted job");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save job").into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct ClassifyForm {
    pub description: String,
}

/// Plain-text contract from the original site: the body is either a
/// category label or a string starting with "Unable to classify" — the
/// frontend branches on that prefix.
pub async fn classify(
    State(state): State<AppState>,
    Form(form): Form<ClassifyForm>,
) -> String {
    state.classifier.classify_job(&form.description)
}
