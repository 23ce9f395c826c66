use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SupportedSignsResponse {
    /// Intent names in catalog order.
    pub signs: Vec<String>,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = RootResponse),
    ),
    tag = "meta",
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Sign Language Detection API".to_string(),
        status: "active".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "meta",
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_key_configured: state.config.api_key_configured,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[utoipa::path(
    get,
    path = "/supported-signs",
    responses(
        (status = 200, description = "Recognizable intents", body = SupportedSignsResponse),
    ),
    tag = "meta",
)]
pub async fn supported_signs(State(state): State<AppState>) -> Json<SupportedSignsResponse> {
    let catalog = state.detector.catalog();

    Json(SupportedSignsResponse {
        signs: catalog.names().map(str::to_string).collect(),
        total: catalog.len(),
    })
}
