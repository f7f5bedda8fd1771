//! Crop recommendation by soil category and observed weather

use crate::catalog::Catalog;
use crate::types::{SoilCategory, WeatherObservation};

/// Maximum |observed - optimal| temperature difference, in °C
pub const TEMPERATURE_TOLERANCE_C: f64 = 5.0;

/// Maximum |observed - optimal| rainfall difference, in mm
pub const RAINFALL_TOLERANCE_MM: f64 = 3.0;

/// Recommend catalog crops whose optimal conditions are within tolerance of
/// the observed weather.
///
/// Only loamy soil is evaluated; every other category, including values
/// outside the form's choices, yields no recommendation. Results keep
/// catalog order.
pub fn recommend(
    catalog: &Catalog,
    soil: &SoilCategory,
    weather: &WeatherObservation,
) -> Vec<String> {
    if *soil != SoilCategory::Loamy {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|crop| {
            (weather.temperature - crop.optimal_temperature).abs() <= TEMPERATURE_TOLERANCE_C
                && (weather.rainfall - crop.optimal_rainfall).abs() <= RAINFALL_TOLERANCE_MM
        })
        .map(|crop| crop.name.clone())
        .collect()
}

/// Same as [`recommend`] but takes the soil category as free text
pub fn recommend_for(catalog: &Catalog, soil: &str, weather: &WeatherObservation) -> Vec<String> {
    recommend(catalog, &SoilCategory::parse(soil), weather)
}
