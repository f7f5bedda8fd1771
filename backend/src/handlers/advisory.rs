//! HTTP handlers for weather alerts and waste management

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::advisory::{AdvisoryService, WasteResult, WeatherAlertsResult};

/// Query parameters for weather alerts
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    #[serde(default)]
    pub location: String,
}

/// Get weather alerts for a location
pub async fn get_weather_alerts(
    query: Result<Query<AlertQuery>, QueryRejection>,
) -> AppResult<Json<WeatherAlertsResult>> {
    let Query(query) = query?;
    let result = AdvisoryService::new().weather_alerts(&query.location)?;
    Ok(Json(result))
}

/// Query parameters for waste recommendations
#[derive(Debug, Deserialize)]
pub struct WasteQuery {
    pub waste_type: String,
}

/// Get waste management recommendations
pub async fn get_waste_recommendations(
    query: Result<Query<WasteQuery>, QueryRejection>,
) -> AppResult<Json<WasteResult>> {
    let Query(query) = query?;
    let result = AdvisoryService::new().waste_recommendations(&query.waste_type)?;
    Ok(Json(result))
}
