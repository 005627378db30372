#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use linkdeck_engine::{ProbeError, ProbeSettings, Prober, RecordSettings, RestRecordSource};
use linkdeck_server::runner::Dashboard;
use linkdeck_server::state::AppState;

/// Probes always succeed instantly; the dashboard's first-batch delay is set
/// long enough that reload-triggered probes stay pending for the duration of
/// a test, keeping `checking` observable.
struct AlwaysAlive;

#[async_trait::async_trait]
impl Prober for AlwaysAlive {
    async fn probe(&self, _url: &str) -> Result<(), ProbeError> {
        Ok(())
    }
}

pub fn test_state(settings: RecordSettings) -> AppState {
    let probe = ProbeSettings {
        probe_gap: Duration::ZERO,
        first_batch_delay: Duration::from_secs(60),
        ..ProbeSettings::default()
    };
    let dashboard = Dashboard::new(probe, Arc::new(AlwaysAlive));
    AppState {
        records: Arc::new(RestRecordSource::new(settings.clone()).expect("build record source")),
        settings,
        dashboard,
    }
}

/// No token configured: the server transparently serves the mock listing.
pub fn mock_settings() -> RecordSettings {
    RecordSettings::default()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body")
}

pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
