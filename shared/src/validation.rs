//! Validation of dashboard form inputs
//!
//! The core accepts any float; these bounds mirror what the input forms
//! allow and are applied at the edges (HTTP handlers, WASM bindings).

use crate::types::{GrowingConditions, WeatherObservation};

/// Temperature input bounds, in °C
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 40.0);

/// Rainfall input bounds, in mm
pub const RAINFALL_RANGE: (f64, f64) = (0.0, 50.0);

/// Soil moisture input bounds, in %
pub const MOISTURE_RANGE: (f64, f64) = (0.0, 100.0);

fn within((min, max): (f64, f64), value: f64) -> bool {
    value >= min && value <= max
}

pub fn validate_temperature(temperature: f64) -> Result<(), &'static str> {
    if !within(TEMPERATURE_RANGE, temperature) {
        return Err("Temperature must be between 0 and 40 °C");
    }
    Ok(())
}

pub fn validate_rainfall(rainfall: f64) -> Result<(), &'static str> {
    if !within(RAINFALL_RANGE, rainfall) {
        return Err("Rainfall must be between 0 and 50 mm");
    }
    Ok(())
}

pub fn validate_moisture(moisture: f64) -> Result<(), &'static str> {
    if !within(MOISTURE_RANGE, moisture) {
        return Err("Moisture must be between 0 and 100%");
    }
    Ok(())
}

pub fn validate_weather(weather: &WeatherObservation) -> Result<(), &'static str> {
    validate_temperature(weather.temperature)?;
    validate_rainfall(weather.rainfall)
}

pub fn validate_conditions(conditions: &GrowingConditions) -> Result<(), &'static str> {
    validate_moisture(conditions.moisture)?;
    validate_temperature(conditions.temperature)?;
    validate_rainfall(conditions.rainfall)
}

/// Accepted crop image extensions for threat checks
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Validate an uploaded image file name by extension (case-insensitive)
pub fn validate_image_filename(filename: &str) -> Result<(), &'static str> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or("Image file name has no extension")?;

    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Image must be a jpg, jpeg or png file");
    }
    Ok(())
}
