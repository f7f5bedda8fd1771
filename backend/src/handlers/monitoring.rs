//! HTTP handlers for sensor monitoring and market prices

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{MarketPricePoint, SensorReading};

use crate::error::AppResult;
use crate::services::monitoring::{MonitoringService, Series, SeriesFormat};
use crate::AppState;

/// Query parameters for series endpoints
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    #[serde(default)]
    pub format: SeriesFormat,
}

/// Get sensor readings
pub async fn get_sensor_readings(
    State(state): State<AppState>,
    query: Result<Query<SeriesQuery>, QueryRejection>,
) -> AppResult<Json<Series<SensorReading>>> {
    let Query(query) = query?;
    let service = MonitoringService::new(state.sample_data);
    Ok(Json(service.sensor_readings(query.format)))
}

/// Get market prices
pub async fn get_market_prices(
    State(state): State<AppState>,
    query: Result<Query<SeriesQuery>, QueryRejection>,
) -> AppResult<Json<Series<MarketPricePoint>>> {
    let Query(query) = query?;
    let service = MonitoringService::new(state.sample_data);
    Ok(Json(service.market_prices(query.format)))
}
