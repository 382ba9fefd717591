//! Typed configuration models loaded from YAML files.

pub mod journey;
pub mod token;

pub use journey::{JourneyConfig, StepConfig};
pub use token::TokenConfig;
