mod config;
mod error;
mod openapi;
mod routes;
mod state;

pub use config::SignApiConfig;
pub use error::{DetectError, ErrorResponse};
pub use openapi::openapi;
pub use routes::router;
pub use routes::{DetectResponse, HealthResponse, RootResponse, SupportedSignsResponse};
