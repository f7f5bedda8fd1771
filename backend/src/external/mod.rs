//! External service integrations

pub mod threat_detection;

pub use threat_detection::{
    PlaceholderThreatDetector, ThreatAssessment, ThreatDetector, DISEASE_SENTINEL,
};
