// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sluggable::application::services::ApplicationServices;
use sluggable::domain::article::Article;
use sluggable::domain::record::RecordStore;
use sluggable::infrastructure::repositories::InMemoryRecordStore;
use sluggable::infrastructure::util::DefaultSlugGenerator;
use sluggable::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{DummyClock, SequenceTokens};

pub fn build_services(store: Arc<dyn RecordStore<Article>>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        store,
        Arc::new(DummyClock),
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequenceTokens::default()),
    ))
}

pub fn make_test_router() -> axum::Router {
    let store: Arc<dyn RecordStore<Article>> = Arc::new(InMemoryRecordStore::<Article>::new());
    build_router(HttpState {
        services: build_services(store),
    })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Split a response into its status and decoded JSON body.
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}
