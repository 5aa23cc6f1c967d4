//! Mock Payment Authorizer shared library.
//!
//! This crate contains the card classifier, the weighted outcome
//! simulator, template loading, configuration, and logging setup used
//! across all API handlers.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod classifier;
pub mod config;
pub mod data;
pub mod endpoint;
pub mod error;
pub mod json;
pub mod latency;
pub mod models;
pub mod report;
pub mod simulator;
pub mod telemetry;
pub mod templates;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
