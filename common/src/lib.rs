//! Domain models for the car price estimator.
//!
//! This crate contains pure data structures representing the core
//! concepts in our application. Models have no business logic - they're
//! just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **common** (this crate): Pure data structures and the wire schema
//! - **estimator-core**: Business logic operating on models
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod error;
pub mod http_status;
pub mod prediction;
pub mod price;
pub mod schema;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use prediction::{PredictionRequest, PredictionResponse};
pub use price::Price;
