//! Monitoring, market, advisory and threat API tests

mod common;

use agrosense_server::services::threat::MAX_IMAGE_BYTES;
use axum::http::StatusCode;
use serde_json::json;

use common::{get, json_response, multipart_body, post_multipart, test_app};

// ============================================================================
// Monitoring & market
// ============================================================================

#[tokio::test]
async fn test_sensor_readings_wide() {
    let response = get(test_app(), "/api/v1/sensors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["date"], "2023-10-26");
    assert_eq!(rows[0]["disease_risk"], 3);
}

#[tokio::test]
async fn test_sensor_readings_long() {
    let response = get(test_app(), "/api/v1/sensors?format=long").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 20);
    assert_eq!(points[0]["variable"], "Moisture");
    assert_eq!(points[19]["variable"], "Disease_Risk");
}

#[tokio::test]
async fn test_market_prices() {
    let response = get(test_app(), "/api/v1/market/prices").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body[0]["prices"][0], json!({"crop": "Rice", "price_per_ton": 1200.0}));

    let response = get(test_app(), "/api/v1/market/prices?format=long").await;
    let body = json_response(response).await;
    assert_eq!(body.as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn test_invalid_series_format() {
    let response = get(test_app(), "/api/v1/sensors?format=tall").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// ============================================================================
// Disaster & waste management
// ============================================================================

#[tokio::test]
async fn test_weather_alerts() {
    let response = get(test_app(), "/api/v1/weather/alerts?location=Chennai").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["alerts"].as_array().unwrap().len(), 1);

    let response = get(test_app(), "/api/v1/weather/alerts?location=Delhi").await;
    let body = json_response(response).await;
    assert_eq!(body["alerts"], json!([]));
    assert!(body["message"].is_string());

    let response = get(test_app(), "/api/v1/weather/alerts").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_waste_recommendations() {
    let response = get(test_app(), "/api/v1/waste/recommendations?waste_type=Rice%20Husk").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["waste_type"], "Rice Husk");
    assert_eq!(
        body["recommendation"]["options"],
        json!(["Composting", "Biofuel production", "Animal feed"])
    );

    let response =
        get(test_app(), "/api/v1/waste/recommendations?waste_type=Cotton%20Stalks").await;
    let body = json_response(response).await;
    assert!(body["recommendation"].is_null());

    let response = get(test_app(), "/api/v1/waste/recommendations?waste_type=Sawdust").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Threat management
// ============================================================================

#[tokio::test]
async fn test_detect_threats_upload() {
    let body = multipart_body("image", "leaf.jpg", "image/jpeg", b"\xFF\xD8\xFF\xE0fake");
    let response = post_multipart(test_app(), "/api/v1/threats/detect", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["threat_detected"], true);
    assert_eq!(body["message"], "Disease detected! Consider applying treatment.");
    assert!(body["request_id"].is_string());
}

#[tokio::test]
async fn test_detect_threats_rejects_wrong_type() {
    let body = multipart_body("image", "leaf.bmp", "image/bmp", b"BMfake");
    let response = post_multipart(test_app(), "/api/v1/threats/detect", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_detect_threats_missing_field() {
    let body = multipart_body("photo", "leaf.png", "image/png", b"\x89PNG");
    let response = post_multipart(test_app(), "/api/v1/threats/detect", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["field"], "image");
}

#[tokio::test]
async fn test_detect_threats_rejects_oversized_image() {
    // Past the route body limit: rejected while the multipart stream is read
    let image = vec![0u8; MAX_IMAGE_BYTES + 200 * 1024];
    let body = multipart_body("image", "leaf.jpg", "image/jpeg", &image);
    let response = post_multipart(test_app(), "/api/v1/threats/detect", body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");

    // Within the body limit but over the image cap
    let image = vec![0u8; MAX_IMAGE_BYTES + 1];
    let body = multipart_body("image", "leaf.jpg", "image/jpeg", &image);
    let response = post_multipart(test_app(), "/api/v1/threats/detect", body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_detect_threats_requires_multipart() {
    let response = common::post_json(test_app(), "/api/v1/threats/detect", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "INVALID_UPLOAD");
}
