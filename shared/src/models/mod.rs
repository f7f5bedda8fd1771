//! Domain models for the AgroSense dashboard

mod advisory;
mod crop;
mod market;
mod sensor;

pub use advisory::*;
pub use crop::*;
pub use market::*;
pub use sensor::*;
