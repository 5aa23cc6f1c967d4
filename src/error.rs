//! Error types surfaced by the configuration stage.
//!
//! The authorization core itself is total and has no error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::outcome::Outcome;

/// Failure to load one of the canned response templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read {outcome} template from {}: {source}", .path.display())]
    Io {
        outcome: Outcome,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{outcome} template is not valid JSON: {source}")]
    Parse {
        outcome: Outcome,
        #[source]
        source: serde_json::Error,
    },

    #[error("{outcome} template must be a JSON object, found {found}")]
    NotAnObject { outcome: Outcome, found: &'static str },
}

impl TemplateError {
    /// The outcome whose template failed to load.
    pub fn outcome(&self) -> Outcome {
        match self {
            TemplateError::Io { outcome, .. }
            | TemplateError::Parse { outcome, .. }
            | TemplateError::NotAnObject { outcome, .. } => *outcome,
        }
    }
}
