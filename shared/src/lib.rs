//! Shared types and models for the AirSense pollution dashboard
//!
//! This crate contains the AQI classifier, the synthetic series generators
//! and the sample tables shared between the backend, the browser (via WASM),
//! and other components of the system.

pub mod models;
pub mod noise;
pub mod sample;
pub mod series;
pub mod types;
pub mod validation;

pub use models::*;
pub use noise::*;
pub use sample::*;
pub use series::*;
pub use types::*;
pub use validation::*;
