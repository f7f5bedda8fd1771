//! Reference crop catalog
//!
//! The catalog is the fixed table of crop species used both for matching
//! observed weather and as training data for the yield estimator. It is
//! built once and only ever read afterwards.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::models::CropProfile;

/// Catalog construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one crop")]
    Empty,

    #[error("Duplicate crop name: {0}")]
    DuplicateName(String),

    #[error("Crop {crop} has invalid {field}: {value}")]
    InvalidValue {
        crop: String,
        field: &'static str,
        value: f64,
    },
}

/// Immutable, insertion-ordered set of crop profiles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    crops: Vec<CropProfile>,
}

impl Catalog {
    /// Build a catalog, checking name uniqueness and numeric sanity
    pub fn new(crops: Vec<CropProfile>) -> Result<Self, CatalogError> {
        if crops.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for crop in &crops {
            if !seen.insert(crop.name.as_str()) {
                return Err(CatalogError::DuplicateName(crop.name.clone()));
            }

            for (field, value) in crop.numeric_fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidValue {
                        crop: crop.name.clone(),
                        field,
                        value,
                    });
                }
            }

            // Yield and price are strictly positive
            for (field, value) in [
                ("baseline_yield", crop.baseline_yield),
                ("price_per_ton", crop.price_per_ton),
            ] {
                if value == 0.0 {
                    return Err(CatalogError::InvalidValue {
                        crop: crop.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }

        Ok(Self { crops })
    }

    /// The built-in sample catalog
    pub fn default_crops() -> Self {
        Self {
            crops: vec![
                CropProfile::new("Rice", 5.5, 1200.0, 40.0, 25.0, 10.0),
                CropProfile::new("Wheat", 4.8, 1000.0, 35.0, 20.0, 5.0),
                CropProfile::new("Maize", 7.2, 1500.0, 50.0, 28.0, 15.0),
                CropProfile::new("Cotton", 3.5, 1100.0, 30.0, 22.0, 8.0),
                CropProfile::new("Soybean", 5.0, 1300.0, 45.0, 27.0, 12.0),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropProfile> {
        self.crops.iter()
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.crops.iter().find(|crop| crop.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.crops.iter().map(|crop| crop.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_crops()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CropProfile;
    type IntoIter = std::slice::Iter<'a, CropProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.crops.iter()
    }
}
