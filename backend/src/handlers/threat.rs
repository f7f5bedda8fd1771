//! HTTP handlers for crop threat detection

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::external::ThreatAssessment;
use crate::services::threat::ThreatService;
use crate::AppState;

/// Multipart field carrying the crop image
const IMAGE_FIELD: &str = "image";

/// Check an uploaded crop image for threats
pub async fn detect_threats(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ThreatAssessment>> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        let service = ThreatService::new(state.threat_detector.clone());
        let assessment = service.check_image(&filename, &bytes)?;
        return Ok(Json(assessment));
    }

    Err(AppError::Validation {
        field: IMAGE_FIELD.to_string(),
        message: "Upload Crop Image is required".to_string(),
    })
}
