//! Axum server and routes.

use audit_types::{AuditReport, GenerateRequest, HistoryItem, HistoryStore, ReportGenerator};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    /// `None` when no model credential is configured; generate requests then
    /// fail with a 500 configuration error.
    pub generator: Option<Arc<dyn ReportGenerator>>,
    pub history: Arc<dyn HistoryStore>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/health", get(handle_health))
        .route("/api/generate", post(handle_generate))
        .route(
            "/api/history",
            get(handle_history_list).delete(handle_history_clear),
        )
        .route("/api/history/:id", delete(handle_history_delete))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Plain-text liveness banner for platform health checks.
async fn handle_root() -> &'static str {
    "AI QA Agent backend is running"
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Backend API is operational",
    })
}

async fn handle_generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> (StatusCode, Json<AuditReport>) {
    let url = match req.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(AuditReport::failure("URL is required")),
            );
        }
    };

    let generator = match &state.generator {
        Some(g) => Arc::clone(g),
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuditReport::failure(
                    "Gemini API key is not configured on the server",
                )),
            );
        }
    };

    match generator.generate_report(&url, req.website_type).await {
        Ok(report) => {
            if let Some(item) = HistoryItem::from_report(&url, req.website_type, report.clone()) {
                if let Err(e) = state.history.save(item).await {
                    tracing::warn!(url, error = %e, "failed to record audit in history");
                }
            }
            (StatusCode::OK, Json(report))
        }
        Err(e) => {
            tracing::error!(url, error = %e, "report generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuditReport::failure(
                    "Failed to generate report. Check server logs.",
                )),
            )
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<HistoryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

async fn handle_history_list(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HistoryListResponse>) {
    match state.history.get().await {
        Ok(items) => (
            StatusCode::OK,
            Json(HistoryListResponse {
                success: true,
                data: Some(items),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "failed to read history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HistoryListResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

async fn handle_history_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<StatusResponse>) {
    match state.history.delete(&id).await {
        Ok(true) => (StatusCode::OK, Json(StatusResponse::ok())),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(StatusResponse::err("No history item with that id")),
        ),
        Err(e) => {
            tracing::error!(id, error = %e, "failed to delete history item");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::err(e.to_string())),
            )
        }
    }
}

async fn handle_history_clear(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<StatusResponse>) {
    match state.history.clear().await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::ok())),
        Err(e) => {
            tracing::error!(error = %e, "failed to clear history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::err(e.to_string())),
            )
        }
    }
}
