//! Canned response templates, one per outcome.
//!
//! Templates are loaded once per process and then only ever read. The
//! built-in set is compiled from `responses/*.json`; setting `TEMPLATE_DIR`
//! swaps in a directory holding files with the same names.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

use crate::config::Settings;
use crate::error::TemplateError;
use crate::models::outcome::Outcome;

/// A template body: field name to JSON value.
pub type ResponseTemplate = Map<String, Value>;

const BUILTIN_SUCCESS: &str = include_str!("../../responses/success.json");
const BUILTIN_INVALID_CARD: &str = include_str!("../../responses/invalid_card.json");
const BUILTIN_INSUFFICIENT_FUNDS: &str = include_str!("../../responses/insufficient_funds.json");
const BUILTIN_SERVER_ERROR: &str = include_str!("../../responses/server_error.json");

/// File name of the template for an outcome.
pub fn file_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "success.json",
        Outcome::InvalidCard => "invalid_card.json",
        Outcome::InsufficientFunds => "insufficient_funds.json",
        Outcome::InternalError => "server_error.json",
    }
}

/// The four response templates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTemplates {
    pub success: ResponseTemplate,
    pub invalid_card: ResponseTemplate,
    pub insufficient_funds: ResponseTemplate,
    pub server_error: ResponseTemplate,
}

impl ResponseTemplates {
    /// Templates bundled with the crate.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_sources(|outcome| {
            Ok(match outcome {
                Outcome::Success => BUILTIN_SUCCESS,
                Outcome::InvalidCard => BUILTIN_INVALID_CARD,
                Outcome::InsufficientFunds => BUILTIN_INSUFFICIENT_FUNDS,
                Outcome::InternalError => BUILTIN_SERVER_ERROR,
            }
            .to_string())
        })
    }

    /// Reads all four templates from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, TemplateError> {
        Self::from_sources(|outcome| {
            let path = dir.join(file_name(outcome));
            std::fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                outcome,
                path,
                source,
            })
        })
    }

    /// Loads from the configured directory, or falls back to the built-ins.
    pub fn load(settings: &Settings) -> Result<Self, TemplateError> {
        match &settings.template_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "loading response templates");
                Self::load_from_dir(dir)
            }
            None => Self::builtin(),
        }
    }

    /// Read-only template for an outcome.
    pub fn template_for(&self, outcome: Outcome) -> &ResponseTemplate {
        match outcome {
            Outcome::Success => &self.success,
            Outcome::InvalidCard => &self.invalid_card,
            Outcome::InsufficientFunds => &self.insufficient_funds,
            Outcome::InternalError => &self.server_error,
        }
    }

    fn from_sources<F>(mut read: F) -> Result<Self, TemplateError>
    where
        F: FnMut(Outcome) -> Result<String, TemplateError>,
    {
        let mut load = |outcome| parse_template(outcome, &read(outcome)?);
        Ok(ResponseTemplates {
            success: load(Outcome::Success)?,
            invalid_card: load(Outcome::InvalidCard)?,
            insufficient_funds: load(Outcome::InsufficientFunds)?,
            server_error: load(Outcome::InternalError)?,
        })
    }
}

fn parse_template(outcome: Outcome, text: &str) -> Result<ResponseTemplate, TemplateError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| TemplateError::Parse { outcome, source })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(TemplateError::NotAnObject {
            outcome,
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
