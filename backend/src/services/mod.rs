//! Business logic services for the AgroSense dashboard

pub mod advisory;
pub mod crop;
pub mod monitoring;
pub mod threat;

pub use advisory::AdvisoryService;
pub use crop::CropService;
pub use monitoring::MonitoringService;
pub use threat::ThreatService;
