//! Crop threat detection
//!
//! There is no image recognition model behind this yet. Uploaded images are
//! replaced by a sentinel string before they reach the detector, and the
//! placeholder detector only recognises that sentinel.

use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;

/// Sentinel forwarded in place of an uploaded image
pub const DISEASE_SENTINEL: &str = "image_with_disease";

const DISEASE_MESSAGE: &str = "Disease detected! Consider applying treatment.";
const CLEAR_MESSAGE: &str = "No threats detected.";

/// Result of a threat check
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThreatAssessment {
    pub request_id: Uuid,
    pub threat_detected: bool,
    pub message: String,
}

/// A crop threat detector
pub trait ThreatDetector: Send + Sync {
    fn detect(&self, image: &str) -> AppResult<ThreatAssessment>;
}

/// Detector that answers from the sentinel alone
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderThreatDetector;

impl ThreatDetector for PlaceholderThreatDetector {
    fn detect(&self, image: &str) -> AppResult<ThreatAssessment> {
        let threat_detected = image == DISEASE_SENTINEL;
        let message = if threat_detected {
            DISEASE_MESSAGE
        } else {
            CLEAR_MESSAGE
        };

        Ok(ThreatAssessment {
            request_id: Uuid::new_v4(),
            threat_detected,
            message: message.to_string(),
        })
    }
}
