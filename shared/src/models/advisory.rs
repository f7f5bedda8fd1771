//! Disaster and waste management advisories
//!
//! Both advisories are canned rules; no weather feed or recycling
//! directory sits behind them.

use serde::{Deserialize, Serialize};

/// A weather alert for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherAlert {
    pub location: String,
    pub message: String,
}

/// Locations with a canned alert, and the alert text
const CANNED_ALERTS: &[(&str, &str)] = &[(
    "Chennai",
    "Heavy rain expected in the next 24 hours. Take precautions.",
)];

/// Look up weather alerts for a location (exact, case-sensitive match)
pub fn weather_alerts(location: &str) -> Vec<WeatherAlert> {
    CANNED_ALERTS
        .iter()
        .filter(|(place, _)| *place == location)
        .map(|(place, message)| WeatherAlert {
            location: place.to_string(),
            message: message.to_string(),
        })
        .collect()
}

/// Crop waste types offered by the waste management panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CropWaste {
    #[serde(rename = "Rice Husk")]
    RiceHusk,
    #[serde(rename = "Wheat Straw")]
    WheatStraw,
    #[serde(rename = "Cotton Stalks")]
    CottonStalks,
}

impl CropWaste {
    pub const ALL: [CropWaste; 3] = [
        CropWaste::RiceHusk,
        CropWaste::WheatStraw,
        CropWaste::CottonStalks,
    ];
}

impl std::fmt::Display for CropWaste {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropWaste::RiceHusk => write!(f, "Rice Husk"),
            CropWaste::WheatStraw => write!(f, "Wheat Straw"),
            CropWaste::CottonStalks => write!(f, "Cotton Stalks"),
        }
    }
}

impl std::str::FromStr for CropWaste {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropWaste::ALL
            .into_iter()
            .find(|waste| waste.to_string() == s)
            .ok_or_else(|| format!("Unknown crop waste type: {}", s))
    }
}

/// Recycling options and partner businesses for a waste type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WasteRecommendation {
    pub waste: CropWaste,
    pub options: Vec<String>,
    pub businesses: Vec<String>,
}

/// Recommend waste handling; only rice husk has entries so far
pub fn waste_recommendations(waste: CropWaste) -> Option<WasteRecommendation> {
    match waste {
        CropWaste::RiceHusk => Some(WasteRecommendation {
            waste,
            options: vec![
                "Composting".to_string(),
                "Biofuel production".to_string(),
                "Animal feed".to_string(),
            ],
            businesses: vec![
                "ABC Compost".to_string(),
                "Green Energy Solutions".to_string(),
            ],
        }),
        CropWaste::WheatStraw | CropWaste::CottonStalks => None,
    }
}
