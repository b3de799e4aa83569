mod periods;
mod stores;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rewind_core::{RecommendError, RecommendationEngine};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub engine: RecommendationEngine,
}

/// Error response rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Validation failures keep their message; anything else is replaced by the
/// route's `generic` message.
///
/// The layer that produced a query or assistant failure has already logged
/// it at `error`; this only ties the request id to the 500.
pub(super) fn map_recommend_error(
    request_id: &str,
    error: &RecommendError,
    generic: &str,
) -> ApiError {
    match error {
        RecommendError::Validation(message) => ApiError::bad_request(message.clone()),
        RecommendError::Query(_) => {
            tracing::warn!(request_id, "store query failed, returning 500");
            ApiError::internal(generic)
        }
        RecommendError::Assistant(_) => {
            tracing::warn!(request_id, "ranking assistant failed, returning 500");
            ApiError::internal(generic)
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/stores", get(stores::list_stores))
        .route("/stores/gemini", post(stores::recommend_stores))
        .route("/periods", get(periods::list_periods))
        .route("/periods/{decade}", get(periods::get_period))
}

/// Every route is mounted at the root and again under `/api`.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .nest("/api", routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
