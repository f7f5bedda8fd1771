//! Route definitions for the AgroSense API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, services::threat::MAX_IMAGE_BYTES, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Crop selection & analysis, yield prediction
        .nest("/crops", crop_routes())
        .route("/recommendations", post(handlers::recommend_crops))
        .route("/yield-predictions", post(handlers::predict_yield))
        // Crop monitoring
        .route("/sensors", get(handlers::get_sensor_readings))
        // Market analysis
        .route("/market/prices", get(handlers::get_market_prices))
        // Disaster management
        .route("/weather/alerts", get(handlers::get_weather_alerts))
        // Waste management
        .route("/waste/recommendations", get(handlers::get_waste_recommendations))
        // Threat management
        .nest("/threats", threat_routes())
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:name", get(handlers::get_crop))
}

/// Threat detection routes
fn threat_routes() -> Router<AppState> {
    Router::new()
        .route("/detect", post(handlers::detect_threats))
        // Leave headroom for multipart framing around the image
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 64 * 1024))
}
