//! Threat management service for uploaded crop images

use std::sync::Arc;

use shared::validate_image_filename;

use crate::error::{AppError, AppResult};
use crate::external::{ThreatAssessment, ThreatDetector, DISEASE_SENTINEL};

/// Largest accepted upload, in bytes
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Service that checks uploaded crop images for threats
#[derive(Clone)]
pub struct ThreatService {
    detector: Arc<dyn ThreatDetector>,
}

impl ThreatService {
    /// Create a new ThreatService instance
    pub fn new(detector: Arc<dyn ThreatDetector>) -> Self {
        Self { detector }
    }

    /// Check an uploaded image.
    ///
    /// The image bytes are only checked for presence and size; the detector
    /// receives the disease sentinel in their place.
    pub fn check_image(&self, filename: &str, image: &[u8]) -> AppResult<ThreatAssessment> {
        validate_image_filename(filename).map_err(|message| AppError::Validation {
            field: "image".to_string(),
            message: message.to_string(),
        })?;

        if image.is_empty() {
            return Err(AppError::InvalidUpload("Image file is empty".to_string()));
        }
        if image.len() > MAX_IMAGE_BYTES {
            return Err(AppError::PayloadTooLarge(format!(
                "Image exceeds {} bytes",
                MAX_IMAGE_BYTES
            )));
        }

        let assessment = self.detector.detect(DISEASE_SENTINEL)?;
        tracing::info!(
            request_id = %assessment.request_id,
            filename,
            bytes = image.len(),
            threat_detected = assessment.threat_detected,
            "Crop image checked"
        );

        Ok(assessment)
    }
}
