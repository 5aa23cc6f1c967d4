use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::card::CardNetwork;

/// The four simulated gateway outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Payment approved.
    Success,
    /// Card rejected, either by validation or by the draw.
    InvalidCard,
    /// Card declined for lack of funds.
    InsufficientFunds,
    /// Gateway failure.
    InternalError,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::Success,
        Outcome::InvalidCard,
        Outcome::InsufficientFunds,
        Outcome::InternalError,
    ];

    /// HTTP status code the outcome is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Success => 200,
            Outcome::InvalidCard => 400,
            Outcome::InsufficientFunds => 402,
            Outcome::InternalError => 500,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::InvalidCard => write!(f, "invalid_card"),
            Outcome::InsufficientFunds => write!(f, "insufficient_funds"),
            Outcome::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Result of one simulated authorization.
///
/// The body is a fresh copy of the outcome's template with the
/// request-derived fields merged in; it never aliases the template.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationResponse {
    /// Outcome chosen for this request.
    pub outcome: Outcome,
    /// Network the card was classified as.
    pub card_type: CardNetwork,
    /// JSON body to send back to the caller.
    pub body: Map<String, Value>,
}

impl AuthorizationResponse {
    pub fn status_code(&self) -> u16 {
        self.outcome.status_code()
    }

    /// True when the card never reached the probabilistic branch.
    pub fn is_card_rejected(&self) -> bool {
        self.outcome == Outcome::InvalidCard && !self.card_type.is_known()
    }

    /// Consumes the response, returning the body as a JSON value.
    pub fn into_json(self) -> Value {
        Value::Object(self.body)
    }
}
