//! Shared types and computation for the AgroSense dashboard
//!
//! This crate holds the crop catalog, the recommendation filter, the yield
//! estimator and the sample data sources. It is used by the backend server
//! and by the browser bindings (via WASM), and does no I/O.

pub mod catalog;
pub mod estimator;
pub mod models;
pub mod recommendation;
pub mod sample_data;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use estimator::*;
pub use models::*;
pub use recommendation::*;
pub use sample_data::*;
pub use types::*;
pub use validation::*;
