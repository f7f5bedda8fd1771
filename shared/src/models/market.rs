//! Market price models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ChartPoint;

/// Prices per ton for each catalog crop on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPricePoint {
    pub date: NaiveDate,
    /// (crop name, price per ton) in catalog order
    pub prices: Vec<CropPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropPrice {
    pub crop: String,
    pub price_per_ton: f64,
}

impl MarketPricePoint {
    pub fn price_of(&self, crop: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|p| p.crop == crop)
            .map(|p| p.price_per_ton)
    }
}

/// Flatten a price table into one point per (date, crop), grouped by crop
pub fn market_chart_points(series: &[MarketPricePoint]) -> Vec<ChartPoint> {
    let Some(first) = series.first() else {
        return Vec::new();
    };

    first
        .prices
        .iter()
        .flat_map(|column| {
            series.iter().filter_map(move |row| {
                row.price_of(&column.crop)
                    .map(|price| ChartPoint::new(row.date, column.crop.clone(), price))
            })
        })
        .collect()
}
