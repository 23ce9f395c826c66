mod env;
mod openapi;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::MatchedPath,
    http::{HeaderValue, Request},
};
use sentry::integrations::tower::{NewSentryLayer, SentryHttpLayer};
use tower::ServiceBuilder;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::prelude::*;

use hs_hand_landmark::{MediaPipeConfig, MediaPipeLandmarker};
use hs_memories::MemoriesClient;
use hs_sign_detect::{Detector, FrameSampler, PollConfig, RemoteTranscriber, SignDetector};
use hs_video_frames::FfmpegDecoder;

use env::{Env, env};

fn detector(env: &Env) -> Arc<dyn SignDetector> {
    let memories = MemoriesClient::builder()
        .api_base(&env.memories_api_base)
        .api_key(&env.memories_api_key)
        .unique_id(&env.memories_unique_id)
        .build()
        .expect("failed to build memories client");

    let landmarker = MediaPipeLandmarker::new(MediaPipeConfig {
        python: env.hand_detector_python.clone(),
        script: env.hand_detector_script.clone(),
        ..Default::default()
    });
    let sampler = FrameSampler::new(FfmpegDecoder::new(&env.ffmpeg_path), landmarker);

    let remote = RemoteTranscriber::new(memories).with_poll_config(PollConfig {
        max_attempts: env.transcription_poll_attempts,
        interval: Duration::from_millis(env.transcription_poll_interval_ms),
    });

    Arc::new(Detector::new(sampler, remote))
}

fn cors_layer(env: &Env) -> CorsLayer {
    let origins: Vec<HeaderValue> = env
        .cors_origins()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "cors_origin_invalid");
                None
            }
        })
        .collect();

    // credentials rule out wildcard methods/headers, so mirror the request
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(cors::AllowMethods::mirror_request())
        .allow_headers(cors::AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn app() -> Router {
    let env = env();

    let config = hs_api_sign::SignApiConfig::new(!env.memories_api_key.trim().is_empty());

    Router::new()
        .route("/openapi.json", axum::routing::get(openapi_json))
        .merge(hs_api_sign::router(detector(env), config))
        .layer(cors_layer(env))
        .layer(
            ServiceBuilder::new()
                .layer(NewSentryLayer::<Request<Body>>::new_from_top())
                .layer(SentryHttpLayer::new().enable_transaction())
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let path = request.uri().path();

                            if path == "/health" {
                                return tracing::Span::none();
                            }

                            let method = request.method();
                            let matched_path = request
                                .extensions()
                                .get::<MatchedPath>()
                                .map(MatchedPath::as_str)
                                .unwrap_or(path);

                            tracing::info_span!(
                                "http_request",
                                method = %method,
                                http.route = %matched_path,
                                otel.name = %format!("{} {}", method, matched_path),
                                span.op = "http.server",
                            )
                        })
                        .on_request(|request: &Request<Body>, _span: &tracing::Span| {
                            if request.uri().path() == "/health" {
                                return;
                            }
                            tracing::info!(
                                method = %request.method(),
                                path = %request.uri().path(),
                                "http_request_started"
                            );
                        })
                        .on_response(
                            |response: &axum::http::Response<axum::body::Body>,
                             latency: std::time::Duration,
                             span: &tracing::Span| {
                                if span.is_disabled() {
                                    return;
                                }
                                tracing::info!(
                                    parent: span,
                                    http_status = %response.status().as_u16(),
                                    latency_ms = %latency.as_millis(),
                                    "http_request_finished"
                                );
                            },
                        )
                        .on_failure(
                            |failure_class: ServerErrorsFailureClass,
                             latency: std::time::Duration,
                             span: &tracing::Span| {
                                if span.is_disabled() {
                                    return;
                                }
                                tracing::error!(
                                    parent: span,
                                    failure_class = ?failure_class,
                                    latency_ms = %latency.as_millis(),
                                    "http_request_failed"
                                );
                            },
                        ),
                ),
        )
}

fn main() -> std::io::Result<()> {
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("failed to install rustls crypto provider");

    let _ = openapi::write_openapi_json();

    let env = env();

    let _guard = sentry::init(sentry::ClientOptions {
        dsn: env.sentry_dsn.as_ref().and_then(|s| s.parse().ok()),
        release: option_env!("APP_VERSION").map(|v| format!("sign-api@{}", v).into()),
        environment: Some(
            if cfg!(debug_assertions) {
                "development"
            } else {
                "production"
            }
            .into(),
        ),
        traces_sample_rate: 1.0,
        sample_rate: 1.0,
        attach_stacktrace: true,
        max_breadcrumbs: 100,
        ..Default::default()
    });

    sentry::configure_scope(|scope| {
        scope.set_tag("service", "sign-api");
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(sentry::integrations::tracing::layer())
        .init();

    tracing::info!(
        memories_api_base = %env.memories_api_base,
        ffmpeg = %env.ffmpeg_path,
        hand_detector = %env.hand_detector_script.display(),
        "detector_configured"
    );

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let addr = SocketAddr::from(([0, 0, 0, 0], env.port));
            tracing::info!(addr = %addr, "server_listening");

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app())
                .with_graceful_shutdown(shutdown_signal())
                .await
        })?;

    if let Some(client) = sentry::Hub::current().client() {
        client.close(Some(Duration::from_secs(2)));
    }

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    tracing::info!("shutdown_signal_received");
}

async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(openapi::openapi())
}
