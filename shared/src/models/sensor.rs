//! Field sensor models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily sensor reading shown on the monitoring panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub date: NaiveDate,
    /// Soil moisture in %
    pub moisture: f64,
    /// Air temperature in °C
    pub temperature: f64,
    /// Light intensity in lux
    pub light: f64,
    /// Disease risk on a 1-5 scale
    pub disease_risk: u8,
}

/// One point of a long-format series, as consumed by line charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub variable: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, variable: impl Into<String>, value: f64) -> Self {
        Self {
            date,
            variable: variable.into(),
            value,
        }
    }
}

/// Flatten readings into one point per (date, metric), grouped by metric
pub fn sensor_chart_points(readings: &[SensorReading]) -> Vec<ChartPoint> {
    let metrics: [(&str, fn(&SensorReading) -> f64); 4] = [
        ("Moisture", |r| r.moisture),
        ("Temperature", |r| r.temperature),
        ("Light", |r| r.light),
        ("Disease_Risk", |r| f64::from(r.disease_risk)),
    ];

    metrics
        .iter()
        .flat_map(|(name, value)| {
            readings
                .iter()
                .map(move |r| ChartPoint::new(r.date, *name, value(r)))
        })
        .collect()
}
