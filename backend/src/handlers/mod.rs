//! HTTP handlers for the AgroSense API

pub mod advisory;
pub mod crops;
pub mod health;
pub mod monitoring;
pub mod threat;

pub use advisory::*;
pub use crops::*;
pub use health::*;
pub use monitoring::*;
pub use threat::*;
