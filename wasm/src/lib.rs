//! WebAssembly module for the AgroSense dashboard
//!
//! Provides client-side computation for:
//! - Crop recommendations
//! - Yield predictions
//! - Form input validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{Catalog, GrowingConditions, YieldEstimator};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("AgroSense WASM module loaded"));
}

/// The built-in crop catalog as JSON
#[wasm_bindgen]
pub fn crop_catalog_json() -> Result<String, JsValue> {
    serde_json::to_string(&Catalog::default_crops())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize catalog: {}", e)))
}

/// Crop names for the crop selection box
#[wasm_bindgen]
pub fn crop_names() -> js_sys::Array {
    Catalog::default_crops().names().map(JsValue::from_str).collect()
}

/// Recommend crops, returned as a JSON array of crop names
#[wasm_bindgen]
pub fn recommend_crops(soil_type: &str, temperature: f64, rainfall: f64) -> Result<String, JsValue> {
    let weather = WeatherObservation::new(temperature, rainfall);
    validate_weather(&weather).map_err(JsValue::from_str)?;

    let crops = shared::recommend_for(&Catalog::default_crops(), soil_type, &weather);
    serde_json::to_string(&crops)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize crops: {}", e)))
}

/// Predict crop yield in tons per hectare
#[wasm_bindgen]
pub fn predict_crop_yield(
    crop: &str,
    moisture: f64,
    temperature: f64,
    rainfall: f64,
) -> Result<f64, JsValue> {
    let conditions = GrowingConditions::new(moisture, temperature, rainfall);
    validate_conditions(&conditions).map_err(JsValue::from_str)?;

    YieldEstimator::pooled()
        .predict(&Catalog::default_crops(), crop, &conditions)
        .map(|prediction| prediction.predicted_yield)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a weather form entry without predicting anything
#[wasm_bindgen]
pub fn is_valid_weather_input(temperature: f64, rainfall: f64) -> bool {
    validate_weather(&WeatherObservation::new(temperature, rainfall)).is_ok()
}

/// Format a yield the way the dashboard displays it
#[wasm_bindgen]
pub fn format_predicted_yield(crop: &str, predicted_yield: f64) -> String {
    format!(
        "Predicted Yield for {}: {:.2} tons/hectare",
        crop, predicted_yield
    )
}
