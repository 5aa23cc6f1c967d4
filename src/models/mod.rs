//! Domain models for the mock authorization API.
//!
//! These types are shared across all modules: classifier, simulator,
//! templates, data, and report.

pub mod card;
pub mod outcome;
pub mod report;
pub mod request;
