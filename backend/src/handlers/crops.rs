//! HTTP handlers for crop selection and yield prediction

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use shared::{CropProfile, YieldPrediction};

use crate::error::AppResult;
use crate::services::crop::{
    CropService, RecommendationInput, RecommendationResult, YieldPredictionInput,
};
use crate::AppState;

/// List the crop catalog
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropProfile>> {
    let service = CropService::new(state.catalog, state.estimator);
    Json(service.list_crops())
}

/// Get a crop by name
pub async fn get_crop(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CropProfile>> {
    let service = CropService::new(state.catalog, state.estimator);
    let crop = service.get_crop(&name)?;
    Ok(Json(crop))
}

/// Recommend crops for a soil type and weather
pub async fn recommend_crops(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationInput>, JsonRejection>,
) -> AppResult<Json<RecommendationResult>> {
    let Json(input) = payload?;
    let service = CropService::new(state.catalog, state.estimator);
    let result = service.recommend(input)?;
    Ok(Json(result))
}

/// Predict the yield of a crop
pub async fn predict_yield(
    State(state): State<AppState>,
    payload: Result<Json<YieldPredictionInput>, JsonRejection>,
) -> AppResult<Json<YieldPrediction>> {
    let Json(input) = payload?;
    let service = CropService::new(state.catalog, state.estimator);
    let prediction = service.predict_yield(input)?;
    Ok(Json(prediction))
}
