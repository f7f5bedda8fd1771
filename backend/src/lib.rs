//! AgroSense - Smart Agriculture Dashboard Server
//!
//! Serves the crop catalog, crop recommendations, yield predictions and the
//! sample monitoring, market and advisory panels as a JSON API.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::{Catalog, SampleDataSource, SeededSampleData, YieldEstimator};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::{PlaceholderThreatDetector, ThreatDetector};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub estimator: YieldEstimator,
    pub sample_data: Arc<dyn SampleDataSource>,
    pub threat_detector: Arc<dyn ThreatDetector>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state from configuration with the built-in catalog
    pub fn from_config(config: Config) -> AppResult<Self> {
        let estimator = YieldEstimator::with_crop_weight(config.yield_model.crop_weight)?;

        Ok(Self {
            catalog: Arc::new(Catalog::default_crops()),
            estimator,
            sample_data: Arc::new(SeededSampleData::new(config.sample_data.seed)),
            threat_detector: Arc::new(PlaceholderThreatDetector),
            config: Arc::new(config),
        })
    }

    /// Replace the sample data source
    pub fn with_sample_data(mut self, source: Arc<dyn SampleDataSource>) -> Self {
        self.sample_data = source;
        self
    }

    /// Replace the crop catalog
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Comprehensive AgroSense - Smart Agriculture Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
