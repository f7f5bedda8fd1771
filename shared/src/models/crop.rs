//! Crop reference models

use serde::{Deserialize, Serialize};

/// A crop species with its yield baseline and optimal growing conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub name: String,
    /// Baseline yield in tons per hectare
    pub baseline_yield: f64,
    /// Market price per ton
    pub price_per_ton: f64,
    /// Optimal soil moisture in %
    pub optimal_moisture: f64,
    /// Optimal air temperature in °C
    pub optimal_temperature: f64,
    /// Optimal rainfall in mm
    pub optimal_rainfall: f64,
}

impl CropProfile {
    pub fn new(
        name: impl Into<String>,
        baseline_yield: f64,
        price_per_ton: f64,
        optimal_moisture: f64,
        optimal_temperature: f64,
        optimal_rainfall: f64,
    ) -> Self {
        Self {
            name: name.into(),
            baseline_yield,
            price_per_ton,
            optimal_moisture,
            optimal_temperature,
            optimal_rainfall,
        }
    }

    /// Regression predictors in (moisture, temperature, rainfall) order
    pub(crate) fn optimal_predictors(&self) -> [f64; 3] {
        [
            self.optimal_moisture,
            self.optimal_temperature,
            self.optimal_rainfall,
        ]
    }

    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("baseline_yield", self.baseline_yield),
            ("price_per_ton", self.price_per_ton),
            ("optimal_moisture", self.optimal_moisture),
            ("optimal_temperature", self.optimal_temperature),
            ("optimal_rainfall", self.optimal_rainfall),
        ]
    }
}

/// Outcome of a yield prediction, paired with the crop's catalog baseline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldPrediction {
    pub crop: String,
    /// Predicted yield in tons per hectare
    pub predicted_yield: f64,
    /// Catalog baseline yield in tons per hectare
    pub baseline_yield: f64,
}

impl YieldPrediction {
    /// Predicted minus baseline, in tons per hectare
    pub fn deviation(&self) -> f64 {
        self.predicted_yield - self.baseline_yield
    }
}
