//! Sample series for the monitoring and market panels
//!
//! The dashboard has no sensor network or market feed, so both panels are
//! fed from a [`SampleDataSource`]. The seeded source draws a fresh series
//! on every call, like a page refresh, but the draws are fully determined
//! by the seed and the call count.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CropPrice, MarketPricePoint, SensorReading};

/// Number of daily rows in every sample series
pub const SERIES_DAYS: u64 = 5;

/// First day of every sample series
pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 26).unwrap_or_default()
}

/// Price band per crop (low inclusive, high exclusive), in catalog order
pub const MARKET_PRICE_BANDS: [(&str, f64, f64); 5] = [
    ("Rice", 1100.0, 1300.0),
    ("Wheat", 900.0, 1100.0),
    ("Maize", 1400.0, 1600.0),
    ("Cotton", 1000.0, 1200.0),
    ("Soybean", 1200.0, 1400.0),
];

/// Source of display-only sample series
pub trait SampleDataSource: Send + Sync {
    fn sensor_readings(&self) -> Vec<SensorReading>;

    fn market_prices(&self) -> Vec<MarketPricePoint>;
}

fn series_dates() -> impl Iterator<Item = NaiveDate> {
    let start = series_start();
    (0..SERIES_DAYS).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
}

/// Pseudo-random sample data drawn from a seeded generator
#[derive(Debug)]
pub struct SeededSampleData {
    seed: u64,
    draws: AtomicU64,
}

impl SeededSampleData {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: AtomicU64::new(0),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn next_rng(&self) -> StdRng {
        let draw = self.draws.fetch_add(1, Ordering::Relaxed);
        StdRng::seed_from_u64(self.seed.wrapping_add(draw.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }
}

impl SampleDataSource for SeededSampleData {
    fn sensor_readings(&self) -> Vec<SensorReading> {
        let mut rng = self.next_rng();
        series_dates()
            .map(|date| SensorReading {
                date,
                moisture: rng.gen_range(30.0..60.0),
                temperature: rng.gen_range(20.0..30.0),
                light: rng.gen_range(400.0..800.0),
                disease_risk: rng.gen_range(1..6),
            })
            .collect()
    }

    fn market_prices(&self) -> Vec<MarketPricePoint> {
        let mut rng = self.next_rng();
        series_dates()
            .map(|date| MarketPricePoint {
                date,
                prices: MARKET_PRICE_BANDS
                    .iter()
                    .map(|(crop, low, high)| CropPrice {
                        crop: crop.to_string(),
                        price_per_ton: rng.gen_range(*low..*high),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Constant sample data, for tests and screenshots
#[derive(Debug, Clone, Default)]
pub struct FixedSampleData {
    pub sensor_readings: Vec<SensorReading>,
    pub market_prices: Vec<MarketPricePoint>,
}

impl FixedSampleData {
    /// Mid-band values on every day of the series
    pub fn midpoints() -> Self {
        let sensor_readings = series_dates()
            .map(|date| SensorReading {
                date,
                moisture: 45.0,
                temperature: 25.0,
                light: 600.0,
                disease_risk: 3,
            })
            .collect();

        let market_prices = series_dates()
            .map(|date| MarketPricePoint {
                date,
                prices: MARKET_PRICE_BANDS
                    .iter()
                    .map(|(crop, low, high)| CropPrice {
                        crop: crop.to_string(),
                        price_per_ton: (low + high) / 2.0,
                    })
                    .collect(),
            })
            .collect();

        Self {
            sensor_readings,
            market_prices,
        }
    }
}

impl SampleDataSource for FixedSampleData {
    fn sensor_readings(&self) -> Vec<SensorReading> {
        self.sensor_readings.clone()
    }

    fn market_prices(&self) -> Vec<MarketPricePoint> {
        self.market_prices.clone()
    }
}
