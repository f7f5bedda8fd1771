//! Yield estimation by least-squares regression over the catalog
//!
//! The model maps a crop's optimal (moisture, temperature, rainfall) to its
//! baseline yield, using every catalog row as a training example, and is
//! evaluated at the caller's field conditions. The fit is redone on every
//! call. With five rows and four parameters it is close to interpolating
//! the catalog, which is fine for a demonstration but not an agronomic
//! model.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::YieldPrediction;
use crate::types::GrowingConditions;

/// Predictors plus intercept
const PARAMETERS: usize = 4;

/// Pivots below this fraction of the largest normal-matrix entry are zero
const SINGULAR_EPSILON: f64 = 1e-10;

/// Yield estimation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Cannot fit yield model: {reason}")]
    SingularFit { reason: String },

    #[error("Crop weight must be a positive finite number, got {0}")]
    InvalidWeight(f64),
}

/// Fitted linear model `yield = intercept + Σ coefficient·predictor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel {
    pub intercept: f64,
    /// Coefficients for (moisture, temperature, rainfall)
    pub coefficients: [f64; 3],
}

impl LinearModel {
    /// Weighted least-squares fit of `(predictors, response, weight)` samples
    pub fn fit(samples: &[([f64; 3], f64, f64)]) -> Result<Self, EstimatorError> {
        if samples.len() < PARAMETERS {
            return Err(EstimatorError::SingularFit {
                reason: format!(
                    "{} training rows, at least {} required",
                    samples.len(),
                    PARAMETERS
                ),
            });
        }

        // Normal equations (XᵀWX)β = XᵀWy as an augmented matrix
        let mut system = [[0.0f64; PARAMETERS + 1]; PARAMETERS];
        for (predictors, response, weight) in samples {
            let row = [1.0, predictors[0], predictors[1], predictors[2]];
            for i in 0..PARAMETERS {
                for j in 0..PARAMETERS {
                    system[i][j] += weight * row[i] * row[j];
                }
                system[i][PARAMETERS] += weight * row[i] * response;
            }
        }

        let beta = solve(system)?;
        Ok(Self {
            intercept: beta[0],
            coefficients: [beta[1], beta[2], beta[3]],
        })
    }

    pub fn predict(&self, conditions: &GrowingConditions) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(conditions.as_predictors())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// Gauss-Jordan elimination with partial pivoting
fn solve(
    mut system: [[f64; PARAMETERS + 1]; PARAMETERS],
) -> Result<[f64; PARAMETERS], EstimatorError> {
    let scale = system
        .iter()
        .flat_map(|row| row[..PARAMETERS].iter())
        .fold(0.0f64, |acc, v| acc.max(v.abs()));

    for col in 0..PARAMETERS {
        let pivot_row = (col..PARAMETERS)
            .max_by(|&a, &b| system[a][col].abs().total_cmp(&system[b][col].abs()))
            .unwrap_or(col);

        if !(system[pivot_row][col].abs() > SINGULAR_EPSILON * scale) {
            return Err(EstimatorError::SingularFit {
                reason: "predictor columns are collinear".to_string(),
            });
        }
        system.swap(col, pivot_row);

        let pivot = system[col];
        for (r, row) in system.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col] / pivot[col];
            for (value, p) in row.iter_mut().zip(pivot.iter()) {
                *value -= factor * p;
            }
        }
    }

    let mut beta = [0.0; PARAMETERS];
    for (i, b) in beta.iter_mut().enumerate() {
        *b = system[i][PARAMETERS] / system[i][i];
    }
    Ok(beta)
}

/// Yield estimator over a catalog.
///
/// `crop_weight` is the regression weight of the catalog row for the crop
/// being predicted; every other row has weight 1. The default of 1 gives
/// the pooled fit, which is the same model whatever crop is asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldEstimator {
    crop_weight: f64,
}

impl Default for YieldEstimator {
    fn default() -> Self {
        Self::pooled()
    }
}

impl YieldEstimator {
    pub fn pooled() -> Self {
        Self { crop_weight: 1.0 }
    }

    pub fn with_crop_weight(crop_weight: f64) -> Result<Self, EstimatorError> {
        if !crop_weight.is_finite() || crop_weight <= 0.0 {
            return Err(EstimatorError::InvalidWeight(crop_weight));
        }
        Ok(Self { crop_weight })
    }

    pub fn crop_weight(&self) -> f64 {
        self.crop_weight
    }

    /// Fit the model used for predictions about `crop_name`
    pub fn fit(&self, catalog: &Catalog, crop_name: &str) -> Result<LinearModel, EstimatorError> {
        if catalog.get(crop_name).is_none() {
            return Err(EstimatorError::UnknownCrop(crop_name.to_string()));
        }

        let samples: Vec<([f64; 3], f64, f64)> = catalog
            .iter()
            .map(|crop| {
                let weight = if crop.name == crop_name {
                    self.crop_weight
                } else {
                    1.0
                };
                (crop.optimal_predictors(), crop.baseline_yield, weight)
            })
            .collect();

        LinearModel::fit(&samples)
    }

    pub fn predict(
        &self,
        catalog: &Catalog,
        crop_name: &str,
        conditions: &GrowingConditions,
    ) -> Result<YieldPrediction, EstimatorError> {
        let model = self.fit(catalog, crop_name)?;
        let baseline_yield = catalog
            .get(crop_name)
            .map(|crop| crop.baseline_yield)
            .ok_or_else(|| EstimatorError::UnknownCrop(crop_name.to_string()))?;

        Ok(YieldPrediction {
            crop: crop_name.to_string(),
            predicted_yield: model.predict(conditions),
            baseline_yield,
        })
    }
}

/// Predict yield in tons per hectare with the pooled model
pub fn predict_yield(
    catalog: &Catalog,
    crop_name: &str,
    moisture: f64,
    temperature: f64,
    rainfall: f64,
) -> Result<f64, EstimatorError> {
    YieldEstimator::pooled()
        .predict(
            catalog,
            crop_name,
            &GrowingConditions::new(moisture, temperature, rainfall),
        )
        .map(|prediction| prediction.predicted_yield)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropProfile;
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_pooled_coefficients() {
        let model = YieldEstimator::pooled()
            .fit(&Catalog::default_crops(), "Rice")
            .unwrap();

        assert!((model.intercept - 7.020588235).abs() < EPS);
        assert!((model.coefficients[0] - 0.225294118).abs() < EPS);
        assert!((model.coefficients[1] - -0.591911765).abs() < EPS);
        assert!((model.coefficients[2] - 0.361029412).abs() < EPS);
    }

    #[test]
    fn test_predict_default_form_values() {
        let catalog = Catalog::default_crops();
        let predicted = predict_yield(&catalog, "Rice", 50.0, 25.0, 10.0).unwrap();
        assert!((predicted - 7.097794118).abs() < EPS);
    }

    #[test]
    fn test_pooled_model_ignores_crop() {
        let catalog = Catalog::default_crops();
        let rice = predict_yield(&catalog, "Rice", 42.0, 23.0, 9.0).unwrap();
        let maize = predict_yield(&catalog, "Maize", 42.0, 23.0, 9.0).unwrap();
        assert_eq!(rice, maize);
    }

    #[test]
    fn test_deterministic() {
        let catalog = Catalog::default_crops();
        let first = predict_yield(&catalog, "Cotton", 33.0, 21.0, 7.5).unwrap();
        let second = predict_yield(&catalog, "Cotton", 33.0, 21.0, 7.5).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_residuals_sum_to_zero() {
        let catalog = Catalog::default_crops();
        let model = YieldEstimator::pooled().fit(&catalog, "Rice").unwrap();
        let residual_sum: f64 = catalog
            .iter()
            .map(|crop| {
                let conditions = GrowingConditions::new(
                    crop.optimal_moisture,
                    crop.optimal_temperature,
                    crop.optimal_rainfall,
                );
                model.predict(&conditions) - crop.baseline_yield
            })
            .sum();
        assert!(residual_sum.abs() < EPS);
    }

    #[test]
    fn test_own_optimum_closer_than_far_point() {
        let catalog = Catalog::default_crops();
        let rice = catalog.get("Rice").unwrap();

        let at_optimum = predict_yield(&catalog, "Rice", 40.0, 25.0, 10.0).unwrap();
        let far_away = predict_yield(&catalog, "Rice", 1000.0, -50.0, 400.0).unwrap();

        assert!((at_optimum - 4.844852941).abs() < EPS);
        assert!((at_optimum - rice.baseline_yield).abs() < (far_away - rice.baseline_yield).abs());
    }

    #[test]
    fn test_unknown_crop_fails_fast() {
        let catalog = Catalog::default_crops();
        assert_eq!(
            predict_yield(&catalog, "Barley", 50.0, 25.0, 10.0),
            Err(EstimatorError::UnknownCrop("Barley".to_string()))
        );
    }

    #[test]
    fn test_too_few_rows_is_singular() {
        let catalog = Catalog::new(vec![
            CropProfile::new("Rice", 5.5, 1200.0, 40.0, 25.0, 10.0),
            CropProfile::new("Wheat", 4.8, 1000.0, 35.0, 20.0, 5.0),
            CropProfile::new("Maize", 7.2, 1500.0, 50.0, 28.0, 15.0),
        ])
        .unwrap();

        assert!(matches!(
            predict_yield(&catalog, "Rice", 50.0, 25.0, 10.0),
            Err(EstimatorError::SingularFit { .. })
        ));
    }

    #[test]
    fn test_collinear_columns_are_singular() {
        // Moisture is always twice the temperature
        let catalog = Catalog::new(vec![
            CropProfile::new("A", 5.5, 1200.0, 50.0, 25.0, 10.0),
            CropProfile::new("B", 4.8, 1000.0, 40.0, 20.0, 5.0),
            CropProfile::new("C", 7.2, 1500.0, 56.0, 28.0, 15.0),
            CropProfile::new("D", 3.5, 1100.0, 44.0, 22.0, 8.0),
            CropProfile::new("E", 5.0, 1300.0, 54.0, 27.0, 12.0),
        ])
        .unwrap();

        assert!(matches!(
            predict_yield(&catalog, "A", 50.0, 25.0, 10.0),
            Err(EstimatorError::SingularFit { .. })
        ));
    }

    #[test]
    fn test_crop_weight_pulls_towards_baseline() {
        let catalog = Catalog::default_crops();
        let rice = catalog.get("Rice").unwrap();
        let optimum = GrowingConditions::new(40.0, 25.0, 10.0);

        let pooled = YieldEstimator::pooled()
            .predict(&catalog, "Rice", &optimum)
            .unwrap();
        let weighted = YieldEstimator::with_crop_weight(50.0)
            .unwrap()
            .predict(&catalog, "Rice", &optimum)
            .unwrap();

        assert_eq!(weighted.baseline_yield, rice.baseline_yield);
        assert!(weighted.deviation().abs() < pooled.deviation().abs());
    }

    #[test]
    fn test_invalid_weights() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(YieldEstimator::with_crop_weight(weight).is_err());
        }
        assert_eq!(YieldEstimator::default().crop_weight(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_prediction_finite_for_form_ranges(
            moisture in 0.0f64..100.0,
            temperature in 0.0f64..40.0,
            rainfall in 0.0f64..50.0,
        ) {
            let catalog = Catalog::default_crops();
            let predicted = predict_yield(&catalog, "Soybean", moisture, temperature, rainfall).unwrap();
            prop_assert!(predicted.is_finite());
        }
    }
}
