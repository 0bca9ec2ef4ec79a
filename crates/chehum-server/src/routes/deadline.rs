//! Review-deadline estimation and site-pattern routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::state::AppState;
use chehum_core::Campaign;
use chehum_deadline::{site_display_name, ReviewDeadline, SitePatternUpdate};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/review-deadline", post(review_deadline))
        .route("/site-patterns", get(list_site_patterns))
        .route(
            "/site-patterns/{name}",
            get(get_site_pattern).patch(update_site_pattern),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDeadlineBody {
    campaign: Campaign,
    #[serde(default)]
    selection_date: Option<NaiveDate>,
}

async fn review_deadline(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReviewDeadlineBody>,
) -> Json<ReviewDeadline> {
    Json(
        state
            .estimator
            .resolve_review_deadline(&body.campaign, body.selection_date),
    )
}

async fn list_site_patterns(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let patterns = state.site_patterns.list();
    Json(serde_json::json!({
        "patterns": patterns,
        "count": patterns.len(),
    }))
}

async fn get_site_pattern(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.site_patterns.lookup(&name) {
        Some(pattern) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "pattern": pattern,
                "displayName": site_display_name(&name),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Site pattern not found" })),
        ),
    }
}

async fn update_site_pattern(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(update): Json<SitePatternUpdate>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.site_patterns.update(&name, update) {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "pattern": state.site_patterns.lookup(&name),
            })),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Site pattern not found" })),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}
