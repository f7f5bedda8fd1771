//! Crop selection and yield prediction service

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::{
    recommend, Catalog, CropProfile, GrowingConditions, SoilCategory, WeatherObservation,
    YieldEstimator, YieldPrediction,
};
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// Crop service over the reference catalog
#[derive(Clone)]
pub struct CropService {
    catalog: Arc<Catalog>,
    estimator: YieldEstimator,
}

/// Input for crop recommendations
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendationInput {
    pub soil_type: SoilCategory,
    #[validate(custom = "form_temperature")]
    pub temperature: f64,
    #[validate(custom = "form_rainfall")]
    pub rainfall: f64,
}

/// Crop recommendations for a soil type and weather
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub soil_type: SoilCategory,
    pub weather: WeatherObservation,
    pub crops: Vec<String>,
    pub message: String,
}

/// Input for yield prediction
#[derive(Debug, Deserialize, Validate)]
pub struct YieldPredictionInput {
    #[validate(length(min = 1, message = "Crop is required"))]
    pub crop: String,
    #[validate(custom = "form_moisture")]
    pub moisture: f64,
    #[validate(custom = "form_temperature")]
    pub temperature: f64,
    #[validate(custom = "form_rainfall")]
    pub rainfall: f64,
}

// Form ranges come from `shared::validation`, the same bounds the WASM
// bindings apply.
fn form_temperature(temperature: f64) -> Result<(), ValidationError> {
    shared::validate_temperature(temperature).map_err(out_of_range)
}

fn form_rainfall(rainfall: f64) -> Result<(), ValidationError> {
    shared::validate_rainfall(rainfall).map_err(out_of_range)
}

fn form_moisture(moisture: f64) -> Result<(), ValidationError> {
    shared::validate_moisture(moisture).map_err(out_of_range)
}

fn out_of_range(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("range");
    error.message = Some(message.into());
    error
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(catalog: Arc<Catalog>, estimator: YieldEstimator) -> Self {
        Self { catalog, estimator }
    }

    /// List the catalog in insertion order
    pub fn list_crops(&self) -> Vec<CropProfile> {
        self.catalog.crops().to_vec()
    }

    /// Get a crop by name
    pub fn get_crop(&self, name: &str) -> AppResult<CropProfile> {
        self.catalog
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Crop {}", name)))
    }

    /// Recommend crops for the given soil type and weather
    pub fn recommend(&self, input: RecommendationInput) -> AppResult<RecommendationResult> {
        input.validate()?;

        let weather = WeatherObservation::new(input.temperature, input.rainfall);
        let crops = recommend(&self.catalog, &input.soil_type, &weather);

        if !input.soil_type.is_known() {
            tracing::debug!(soil_type = %input.soil_type, "Unrecognised soil type, nothing to match");
        }
        tracing::debug!(
            soil_type = %input.soil_type,
            temperature = weather.temperature,
            rainfall = weather.rainfall,
            matches = crops.len(),
            "Crop recommendation evaluated"
        );

        let message = if crops.is_empty() {
            "No crops recommended based on current conditions. Consider adjusting soil type or weather."
                .to_string()
        } else {
            format!("Recommended crops: {}", crops.join(", "))
        };

        Ok(RecommendationResult {
            soil_type: input.soil_type,
            weather,
            crops,
            message,
        })
    }

    /// Predict yield for a crop at the given field conditions
    pub fn predict_yield(&self, input: YieldPredictionInput) -> AppResult<YieldPrediction> {
        input.validate()?;

        let conditions = GrowingConditions::new(input.moisture, input.temperature, input.rainfall);
        let prediction = self
            .estimator
            .predict(&self.catalog, &input.crop, &conditions)?;

        tracing::debug!(
            crop = %prediction.crop,
            predicted = prediction.predicted_yield,
            baseline = prediction.baseline_yield,
            "Yield predicted"
        );

        Ok(prediction)
    }
}
