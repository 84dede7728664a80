// Declare modules at the root level
pub mod analysis;
pub mod classifier;
pub mod domain;
pub mod error;
pub mod guides;
pub mod id_generator;
pub mod presets;
pub mod questions;
pub mod recommendations;
pub mod responder;
pub mod season;
pub mod sensor_source;
pub mod sensor_validation;
pub mod thresholds;
pub mod time;
pub mod validators;

// Test utilities module (available in test and integration test builds)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export everything under a shared namespace for external access
pub mod shared {
    pub use super::analysis;
    pub use super::classifier;
    pub use super::domain;
    pub use super::error;
    pub use super::guides;
    pub use super::id_generator;
    pub use super::presets;
    pub use super::questions;
    pub use super::recommendations;
    pub use super::responder;
    pub use super::season;
    pub use super::sensor_source;
    pub use super::sensor_validation;
    pub use super::thresholds;
    pub use super::time;
    pub use super::validators;
}

// Also re-export at root for convenience
pub use analysis::*;
pub use classifier::*;
pub use domain::*;
pub use error::*;
pub use id_generator::*;
pub use presets::*;
pub use questions::*;
pub use recommendations::*;
pub use responder::*;
pub use season::*;
pub use sensor_source::*;
pub use sensor_validation::*;
pub use thresholds::*;
pub use time::*;
pub use validators::*;
