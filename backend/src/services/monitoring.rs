//! Crop monitoring and market analysis service
//!
//! Both panels display sample series only; nothing here is measured.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::{
    market_chart_points, sensor_chart_points, ChartPoint, MarketPricePoint, SampleDataSource,
    SensorReading,
};

/// Series layout requested by the client
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeriesFormat {
    /// One row per day, one column per metric
    #[default]
    Wide,
    /// One row per (day, metric), for line charts
    Long,
}

/// Series in the requested layout
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Series<T> {
    Wide(Vec<T>),
    Long(Vec<ChartPoint>),
}

impl<T> Series<T> {
    pub fn len(&self) -> usize {
        match self {
            Series::Wide(rows) => rows.len(),
            Series::Long(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Monitoring service backed by a sample data source
#[derive(Clone)]
pub struct MonitoringService {
    source: Arc<dyn SampleDataSource>,
}

impl MonitoringService {
    /// Create a new MonitoringService instance
    pub fn new(source: Arc<dyn SampleDataSource>) -> Self {
        Self { source }
    }

    /// Current sensor readings
    pub fn sensor_readings(&self, format: SeriesFormat) -> Series<SensorReading> {
        let readings = self.source.sensor_readings();
        tracing::debug!(rows = readings.len(), ?format, "Sensor readings sampled");

        match format {
            SeriesFormat::Wide => Series::Wide(readings),
            SeriesFormat::Long => Series::Long(sensor_chart_points(&readings)),
        }
    }

    /// Current market prices
    pub fn market_prices(&self, format: SeriesFormat) -> Series<MarketPricePoint> {
        let prices = self.source.market_prices();
        tracing::debug!(rows = prices.len(), ?format, "Market prices sampled");

        match format {
            SeriesFormat::Wide => Series::Wide(prices),
            SeriesFormat::Long => Series::Long(market_chart_points(&prices)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FixedSampleData;

    fn service() -> MonitoringService {
        MonitoringService::new(Arc::new(FixedSampleData::midpoints()))
    }

    #[test]
    fn test_wide_sensor_rows() {
        let series = service().sensor_readings(SeriesFormat::Wide);
        assert!(matches!(series, Series::Wide(ref rows) if rows.len() == 5));
    }

    #[test]
    fn test_long_sensor_points() {
        // 5 days x 4 metrics
        assert_eq!(service().sensor_readings(SeriesFormat::Long).len(), 20);
    }

    #[test]
    fn test_long_market_points() {
        // 5 days x 5 crops
        let series = service().market_prices(SeriesFormat::Long);
        match series {
            Series::Long(points) => {
                assert_eq!(points.len(), 25);
                assert_eq!(points[0].variable, "Rice");
                assert_eq!(points[0].value, 1200.0);
            }
            Series::Wide(_) => panic!("expected long format"),
        }
    }

    #[test]
    fn test_empty_source() {
        let service = MonitoringService::new(Arc::new(FixedSampleData::default()));
        assert!(service.market_prices(SeriesFormat::Long).is_empty());
    }
}
