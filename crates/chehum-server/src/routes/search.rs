//! Search query parsing routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use chehum_search::{
    detailed_region_keyword, region_level, DateWindow, DeadlineBucket, ExtractedFilters,
    ParsedQuery, DEADLINE_DISPLAY_MAP, TYPE_DISPLAY_MAP,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search/parse", get(parse_query))
        .route("/search/extract", get(extract_filters))
        .route("/search/window", get(deadline_window))
        .route("/search/labels", get(labels))
        .route("/search/region/{name}", get(region_info))
}

#[derive(Deserialize)]
struct QueryParams {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize)]
struct WindowParams {
    bucket: DeadlineBucket,
}

async fn parse_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Json<ParsedQuery> {
    Json(state.parser.parse(&params.q))
}

async fn extract_filters(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Json<ExtractedFilters> {
    Json(state.parser.extract_filters(&params.q))
}

async fn deadline_window(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WindowParams>,
) -> Json<DateWindow> {
    Json(params.bucket.window(state.estimator.today()))
}

async fn labels() -> Json<serde_json::Value> {
    let deadlines: serde_json::Map<String, serde_json::Value> = DEADLINE_DISPLAY_MAP
        .iter()
        .map(|(bucket, label)| (bucket.code().to_string(), (*label).into()))
        .collect();
    let types: serde_json::Map<String, serde_json::Value> = TYPE_DISPLAY_MAP
        .iter()
        .map(|(kind, label)| (kind.code().to_string(), (*label).into()))
        .collect();
    Json(serde_json::json!({
        "deadline": deadlines,
        "type": types,
    }))
}

async fn region_info(Path(name): Path<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "region": name,
        "level": region_level(&name),
        "detailedKeyword": detailed_region_keyword(&name),
    }))
}
