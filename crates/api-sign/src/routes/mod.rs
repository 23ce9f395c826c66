pub(crate) mod detect;
pub(crate) mod info;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use hs_sign_detect::SignDetector;

use crate::config::SignApiConfig;
use crate::state::AppState;

pub use detect::DetectResponse;
pub use info::{HealthResponse, RootResponse, SupportedSignsResponse};

pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

pub fn router(detector: Arc<dyn SignDetector>, config: SignApiConfig) -> Router {
    let state = AppState { detector, config };

    Router::new()
        .route("/", get(info::root))
        .route("/health", get(info::health))
        .route("/supported-signs", get(info::supported_signs))
        .route("/detect", post(detect::detect))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
