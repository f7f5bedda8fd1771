//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Soil categories offered by the crop selection form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum SoilCategory {
    #[default]
    Loamy,
    Sandy,
    Clayey,
    /// Any value outside the form's fixed choices
    Other(String),
}

impl SoilCategory {
    /// The categories presented to the user, in form order
    pub const CHOICES: [SoilCategory; 3] =
        [SoilCategory::Loamy, SoilCategory::Sandy, SoilCategory::Clayey];

    pub fn parse(value: &str) -> Self {
        match value {
            "Loamy" => SoilCategory::Loamy,
            "Sandy" => SoilCategory::Sandy,
            "Clayey" => SoilCategory::Clayey,
            other => SoilCategory::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SoilCategory::Other(_))
    }
}

impl std::fmt::Display for SoilCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilCategory::Loamy => write!(f, "Loamy"),
            SoilCategory::Sandy => write!(f, "Sandy"),
            SoilCategory::Clayey => write!(f, "Clayey"),
            SoilCategory::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for SoilCategory {
    fn from(value: String) -> Self {
        SoilCategory::parse(&value)
    }
}

impl From<SoilCategory> for String {
    fn from(value: SoilCategory) -> Self {
        value.to_string()
    }
}

/// Observed weather used to match crops against their optimal conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    /// Air temperature in °C
    pub temperature: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

impl WeatherObservation {
    pub fn new(temperature: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            rainfall,
        }
    }
}

/// Field conditions at which a yield prediction is evaluated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GrowingConditions {
    /// Soil moisture in %
    pub moisture: f64,
    /// Air temperature in °C
    pub temperature: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

impl GrowingConditions {
    pub fn new(moisture: f64, temperature: f64, rainfall: f64) -> Self {
        Self {
            moisture,
            temperature,
            rainfall,
        }
    }

    pub(crate) fn as_predictors(&self) -> [f64; 3] {
        [self.moisture, self.temperature, self.rainfall]
    }
}
