use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use disease_report::{InMemoryResponseCache, ParseError, ResponseCache, parse_report};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::models::{DiseaseInfoResponse, QueryRequest, RawResponse};
use crate::query::{QueryError, fetch_disease_info};
use crate::view::build_response;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;
type ApiError = (StatusCode, Json<Value>);

fn bad_request_error(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn not_found_error(message: &str, name: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": message,
            "name": name
        })),
    )
}

fn upstream_error(message: &str, details: &str) -> ApiError {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({
            "error": message,
            "details": details
        })),
    )
}

fn internal_error(message: &str, details: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "details": details
        })),
    )
}

/// Parse failures go back to the presentation layer as a visible message,
/// with the raw response attached so it can still be revealed to the user.
fn parse_failure_error(err: &ParseError, raw_response: &str) -> ApiError {
    let message = match err {
        ParseError::MalformedDocument(_) => {
            "Failed to decode the response into JSON. Please check the format of the response."
        }
        ParseError::MissingField(_) => "The response is missing required disease information.",
    };

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": message,
            "details": err.to_string(),
            "raw_response": raw_response
        })),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn ResponseCache>,
}

pub fn create_app() -> Router {
    let app_state = AppState {
        cache: Arc::new(InMemoryResponseCache::new()),
    };
    build_router(app_state)
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/disease/query", post(query_disease))
        .route("/disease/{name}/raw", get(get_raw_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "Disease Information Service",
        "version": "0.1.0",
        "description": "Structured disease summaries backed by a text-generation collaborator",
        "endpoints": {
            "POST /disease/query": "Fetch and validate a disease summary",
            "GET /disease/{name}/raw": "Raw collaborator response for a previously queried disease",
            "GET /health": "Health check"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn query_disease(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<DiseaseInfoResponse> {
    let disease = request.name.trim().to_string();
    if disease.is_empty() {
        return Err(bad_request_error("Disease name is required"));
    }

    info!("Fetching disease information for '{}'", disease);

    let fetched = fetch_disease_info(state.cache.as_ref(), &disease)
        .await
        .map_err(|e| match e {
            QueryError::Upstream(_) | QueryError::EmptyResponse => {
                error!("Collaborator call failed for '{}': {}", disease, e);
                upstream_error(
                    "No valid disease information found. Please try again.",
                    &e.to_string(),
                )
            }
            QueryError::Template(_) | QueryError::Cache(_) => {
                error!("Failed to prepare query for '{}': {}", disease, e);
                internal_error("Failed to prepare the disease query", &e.to_string())
            }
        })?;

    match parse_report(&fetched.raw) {
        Ok(report) => Ok(Json(build_response(report, fetched.cached))),
        Err(e) => {
            warn!("Invalid collaborator response for '{}': {}", disease, e);
            Err(parse_failure_error(&e, &fetched.raw))
        }
    }
}

async fn get_raw_response(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<RawResponse> {
    let disease = name.trim().to_string();

    match state.cache.get(&disease).await {
        Ok(Some(raw_response)) => Ok(Json(RawResponse {
            name: disease,
            raw_response,
        })),
        Ok(None) => Err(not_found_error(
            "No cached response for this disease",
            &disease,
        )),
        Err(e) => {
            error!("Failed to read cache for '{}': {}", disease, e);
            Err(internal_error("Failed to read cached response", &e.to_string()))
        }
    }
}
