use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::{DetectResponse, HealthResponse, RootResponse, SupportedSignsResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sign Language Detection API",
        version = "1.0.0",
        description = "Recognizes a small set of communication intents from short sign-language clips"
    ),
    paths(
        crate::routes::info::root,
        crate::routes::info::health,
        crate::routes::info::supported_signs,
        crate::routes::detect::detect,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            SupportedSignsResponse,
            DetectResponse,
            ErrorResponse,
            crate::routes::detect::DetectUpload,
        )
    ),
    tags(
        (name = "detection", description = "Sign detection from uploaded video"),
        (name = "meta", description = "Service status and catalog")
    )
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
