//! Disaster and waste management advisory service

use serde::Serialize;
use shared::{waste_recommendations, weather_alerts, CropWaste, WasteRecommendation, WeatherAlert};

use crate::error::{AppError, AppResult};

/// Advisory service for the canned alert and waste rules
#[derive(Clone, Default)]
pub struct AdvisoryService;

/// Weather alerts for a location
#[derive(Debug, Clone, Serialize)]
pub struct WeatherAlertsResult {
    pub location: String,
    pub alerts: Vec<WeatherAlert>,
    pub message: Option<String>,
}

/// Waste management recommendations for a waste type
#[derive(Debug, Clone, Serialize)]
pub struct WasteResult {
    pub waste_type: CropWaste,
    pub recommendation: Option<WasteRecommendation>,
    pub message: Option<String>,
}

impl AdvisoryService {
    pub fn new() -> Self {
        Self
    }

    /// Weather alerts for a location entered by the user
    pub fn weather_alerts(&self, location: &str) -> AppResult<WeatherAlertsResult> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::Validation {
                field: "location".to_string(),
                message: "Location is required".to_string(),
            });
        }

        let alerts = weather_alerts(location);
        tracing::debug!(location, alerts = alerts.len(), "Weather alerts checked");

        let message = alerts
            .is_empty()
            .then(|| "No weather alerts for your location at this time.".to_string());

        Ok(WeatherAlertsResult {
            location: location.to_string(),
            alerts,
            message,
        })
    }

    /// Waste management options for a crop waste type name
    pub fn waste_recommendations(&self, waste_type: &str) -> AppResult<WasteResult> {
        let waste: CropWaste = waste_type.parse().map_err(|message| AppError::Validation {
            field: "waste_type".to_string(),
            message,
        })?;

        let recommendation = waste_recommendations(waste);
        let message = recommendation.is_none().then(|| {
            "No specific recommendations available for this crop waste type yet.".to_string()
        });

        Ok(WasteResult {
            waste_type: waste,
            recommendation,
            message,
        })
    }
}
