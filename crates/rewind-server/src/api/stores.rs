use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};
use rewind_core::{normalize_decade, parse_style_tags, CombinedResult, Store, StylesInput};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_recommend_error, ApiError, AppState};

const LIST_FAILED: &str = "Failed to fetch stores";
const RECOMMEND_FAILED: &str = "Failed to get AI store suggestions. Please try again.";

#[derive(Debug, Deserialize)]
pub(super) struct StoreListQuery {
    pub decade: Option<String>,
    /// Comma-separated style tags.
    pub styles: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RecommendBody {
    pub decade: Option<String>,
    pub styles: Option<StylesInput>,
}

pub(super) async fn list_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<StoreListQuery>, QueryRejection>,
) -> Result<Json<Vec<Store>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!(request_id = %req_id.0, error = %rejection, "rejected store query string");
        ApiError::bad_request("invalid query string")
    })?;

    let decade = normalize_decade(query.decade.as_deref());
    let style_tags = parse_style_tags(query.styles.as_deref());

    let stores = state
        .engine
        .list_stores(decade.as_deref(), &style_tags)
        .await
        .map_err(|e| map_recommend_error(&req_id.0, &e, LIST_FAILED))?;

    Ok(Json(stores))
}

pub(super) async fn recommend_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<RecommendBody>, JsonRejection>,
) -> Result<Json<CombinedResult>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!(request_id = %req_id.0, error = %rejection, "rejected recommendation body");
        ApiError::bad_request("invalid request body")
    })?;

    let decade = normalize_decade(body.decade.as_deref()).unwrap_or_default();
    let styles = body.styles.map(StylesInput::into_styles).unwrap_or_default();

    let result = state
        .engine
        .recommend(&decade, styles)
        .await
        .map_err(|e| map_recommend_error(&req_id.0, &e, RECOMMEND_FAILED))?;

    Ok(Json(result))
}
