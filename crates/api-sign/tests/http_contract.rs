use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use api_sign::{SignApiConfig, router};
use bytes::Bytes;
use hs_sign_detect::{
    BoxFuture, Catalog, Detection, DetectionPath, Error as DetectorError, SignDetector,
};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Answers with a fixed phrase and records what it was asked to analyze.
#[derive(Default)]
struct StubDetector {
    fail: bool,
    seen: Mutex<Vec<(usize, String)>>,
}

impl StubDetector {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<(usize, String)> {
        self.seen.lock().unwrap().clone()
    }
}

impl SignDetector for StubDetector {
    fn detect<'a>(
        &'a self,
        video: Bytes,
        content_type: &'a str,
    ) -> BoxFuture<'a, Result<Detection, DetectorError>> {
        Box::pin(async move {
            self.seen
                .lock()
                .unwrap()
                .push((video.len(), content_type.to_string()));

            if self.fail {
                return Err(DetectorError::Io(std::io::Error::other("decoder crashed")));
            }

            Ok(Detection {
                result: "I want water".to_string(),
                path: DetectionPath::Fused,
                elapsed: Duration::from_millis(1234),
            })
        })
    }

    fn catalog(&self) -> &'static Catalog {
        Catalog::reference()
    }
}

async fn start_server(detector: Arc<StubDetector>, config: SignApiConfig) -> SocketAddr {
    let app = router(detector, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn video_form(data: &'static [u8], mime: &str) -> Form {
    let part = Part::bytes(data).file_name("clip.mp4").mime_str(mime).unwrap();
    Form::new().part("file", part)
}

async fn post_detect(addr: SocketAddr, form: Form) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/detect"))
        .multipart(form)
        .send()
        .await
        .expect("failed to send detect request");

    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn detect_returns_phrase_and_timing() {
    let detector = Arc::new(StubDetector::default());
    let addr = start_server(detector.clone(), SignApiConfig::default()).await;

    let (status, body) = post_detect(addr, video_form(b"fake-mp4-bytes", "video/mp4")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "I want water");
    assert_eq!(body["success"], true);
    assert_eq!(body["processing_time"], 1.23);
    assert!(
        chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok(),
        "timestamp should be ISO 8601: {body}"
    );
    assert_eq!(detector.calls(), [(14, "video/mp4".to_string())]);
}

#[tokio::test]
async fn detect_accepts_video_content_type_with_parameters() {
    let detector = Arc::new(StubDetector::default());
    let addr = start_server(detector.clone(), SignApiConfig::default()).await;

    let (status, _) = post_detect(addr, video_form(b"webm", "video/webm; codecs=vp9")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detector.calls().len(), 1);
}

#[tokio::test]
async fn detect_rejects_non_video_uploads() {
    let detector = Arc::new(StubDetector::default());
    let addr = start_server(detector.clone(), SignApiConfig::default()).await;

    let (status, body) = post_detect(addr, video_form(b"hello", "text/plain")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "File must be a video");
    assert!(detector.calls().is_empty());
}

#[tokio::test]
async fn detect_rejects_empty_uploads() {
    let detector = Arc::new(StubDetector::default());
    let addr = start_server(detector.clone(), SignApiConfig::default()).await;

    let (status, body) = post_detect(addr, video_form(b"", "video/mp4")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Empty file");
    assert!(detector.calls().is_empty());
}

#[tokio::test]
async fn detect_requires_file_field() {
    let detector = Arc::new(StubDetector::default());
    let addr = start_server(detector.clone(), SignApiConfig::default()).await;

    let form = Form::new().text("note", "no clip attached");
    let (status, body) = post_detect(addr, form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(detector.calls().is_empty());
}

#[tokio::test]
async fn detector_failure_is_a_server_error() {
    let addr = start_server(Arc::new(StubDetector::failing()), SignApiConfig::default()).await;

    let (status, body) = post_detect(addr, video_form(b"fake-mp4-bytes", "video/mp4")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Detection failed: decoder crashed");
}

#[tokio::test]
async fn supported_signs_lists_catalog_in_order() {
    let addr = start_server(Arc::new(StubDetector::default()), SignApiConfig::default()).await;

    let body: Value = reqwest::get(format!("http://{addr}/supported-signs"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 10);
    assert_eq!(
        body["signs"],
        serde_json::json!([
            "water", "food", "help", "bathroom", "pain", "yes", "no", "please", "thank_you",
            "more"
        ])
    );
}

#[tokio::test]
async fn health_reports_credential_state() {
    for configured in [true, false] {
        let addr = start_server(
            Arc::new(StubDetector::default()),
            SignApiConfig::new(configured),
        )
        .await;

        let body: Value = reqwest::get(format!("http://{addr}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["api_key_configured"], configured);
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn root_banner() {
    let addr = start_server(Arc::new(StubDetector::default()), SignApiConfig::default()).await;

    let body: Value = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        serde_json::json!({"message": "Sign Language Detection API", "status": "active"})
    );
}
