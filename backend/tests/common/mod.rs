//! Helpers shared by the API integration tests

use std::sync::Arc;

use agrosense_server::{create_app, AppState, Config};
use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use shared::{Catalog, FixedSampleData};
use tower::ServiceExt; // for oneshot

/// App over the built-in catalog with constant sample data
pub fn test_app() -> Router {
    create_app(test_state())
}

pub fn test_state() -> AppState {
    AppState::from_config(Config::default())
        .unwrap()
        .with_sample_data(Arc::new(FixedSampleData::midpoints()))
}

pub fn app_with_catalog(catalog: Catalog) -> Router {
    create_app(test_state().with_catalog(catalog))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub const BOUNDARY: &str = "agrosense-test-boundary";

/// Multipart body with a single file field
pub fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn json_response(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}
