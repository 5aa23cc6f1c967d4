//! Authorization simulator: classifies the card, then picks a weighted
//! outcome and builds the response body from that outcome's template.
//!
//! Templates are borrowed read-only; every response body is a fresh copy.

pub mod config;
pub mod random;

pub use random::{FixedDraw, RandomSource, RngSource, ScriptedDraws};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::classifier::{classify, extract_card_number, mask, normalize};
use crate::json::is_truthy;
use crate::models::card::CardNetwork;
use crate::models::outcome::{AuthorizationResponse, Outcome};
use crate::models::request::AuthorizationRequest;
use crate::templates::{ResponseTemplate, ResponseTemplates};

pub const ORDER_ID_FIELD: &str = "OrderId";
pub const AUTHORIZED_AMOUNT_FIELD: &str = "AuthorizedAmount";
pub const CARD_TYPE_FIELD: &str = "CardType";
pub const REASON_FIELD: &str = "Reason";

/// Generated order ids take the form `ORDER-<0..=9999>`.
const GENERATED_ORDER_ID_SPAN: f64 = 10_000.0;

const MISSING_CARD_REASON: &str = "Card number is missing";
const UNRECOGNIZED_CARD_REASON: &str =
    "Card number does not match a supported network (VISA, MASTERCARD, AMEX, DISCOVER)";

/// Simulates a payment gateway over a set of canned response templates.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationSimulator<'t> {
    templates: &'t ResponseTemplates,
}

impl<'t> AuthorizationSimulator<'t> {
    /// Creates a simulator that reads from the given templates.
    pub fn new(templates: &'t ResponseTemplates) -> Self {
        AuthorizationSimulator { templates }
    }

    /// Simulate the gateway authorizing one request.
    ///
    /// Missing or unrecognised cards are rejected as invalid before any
    /// draw is taken. Otherwise one draw from `rng` picks the outcome, and
    /// a second draw is taken only when an order id has to be generated.
    pub fn authorize<R>(&self, request: &AuthorizationRequest, rng: &mut R) -> AuthorizationResponse
    where
        R: RandomSource + ?Sized,
    {
        let raw = extract_card_number(request.card_details.as_ref());
        let digits = normalize(&raw);
        let network = classify(&digits);
        debug!(card = %mask(&digits), card_type = %network, "classified card");

        let response = if raw.is_empty() || !network.is_known() {
            self.reject_card(request, raw.is_empty(), rng)
        } else {
            let outcome = config::outcome_for_draw(rng.next_f64());
            AuthorizationResponse {
                outcome,
                card_type: network,
                body: self.build_body(outcome, network, request, rng),
            }
        };

        info!(
            order_id = ?response.body.get(ORDER_ID_FIELD),
            card_type = %response.card_type,
            outcome = %response.outcome,
            status = response.status_code(),
            "authorization simulated"
        );
        response
    }

    fn reject_card<R>(
        &self,
        request: &AuthorizationRequest,
        missing: bool,
        rng: &mut R,
    ) -> AuthorizationResponse
    where
        R: RandomSource + ?Sized,
    {
        let template = self.templates.template_for(Outcome::InvalidCard);
        let mut body = template.clone();
        body.insert(ORDER_ID_FIELD.to_string(), order_id(request, template, rng));
        body.insert(
            CARD_TYPE_FIELD.to_string(),
            Value::from(CardNetwork::Unknown.as_str()),
        );
        let reason = if missing { MISSING_CARD_REASON } else { UNRECOGNIZED_CARD_REASON };
        body.insert(REASON_FIELD.to_string(), Value::from(reason));

        AuthorizationResponse {
            outcome: Outcome::InvalidCard,
            card_type: CardNetwork::Unknown,
            body,
        }
    }

    fn build_body<R>(
        &self,
        outcome: Outcome,
        network: CardNetwork,
        request: &AuthorizationRequest,
        rng: &mut R,
    ) -> Map<String, Value>
    where
        R: RandomSource + ?Sized,
    {
        let template = self.templates.template_for(outcome);
        let mut body = template.clone();
        match outcome {
            Outcome::Success => {
                body.insert(ORDER_ID_FIELD.to_string(), order_id(request, template, rng));
                body.insert(
                    AUTHORIZED_AMOUNT_FIELD.to_string(),
                    authorized_amount(request, template),
                );
            }
            Outcome::InvalidCard | Outcome::InsufficientFunds => {
                body.insert(ORDER_ID_FIELD.to_string(), order_id(request, template, rng));
            }
            Outcome::InternalError => {}
        }
        body.insert(CARD_TYPE_FIELD.to_string(), Value::from(network.as_str()));
        body
    }
}

/// Request order id, else the template's, else a generated one.
fn order_id<R>(request: &AuthorizationRequest, template: &ResponseTemplate, rng: &mut R) -> Value
where
    R: RandomSource + ?Sized,
{
    if let Some(id) = request.order_id.as_deref().filter(|id| !id.is_empty()) {
        return Value::from(id);
    }
    if let Some(default) = template.get(ORDER_ID_FIELD).filter(|v| is_truthy(v)) {
        return default.clone();
    }
    Value::from(generate_order_id(rng))
}

/// Requested amount, else the template's, else 0. A requested amount of 0
/// counts as absent.
fn authorized_amount(request: &AuthorizationRequest, template: &ResponseTemplate) -> Value {
    request
        .requested_amount
        .clone()
        .map(Value::Number)
        .filter(is_truthy)
        .or_else(|| {
            template
                .get(AUTHORIZED_AMOUNT_FIELD)
                .filter(|v| is_truthy(v))
                .cloned()
        })
        .unwrap_or_else(|| Value::from(0))
}

fn generate_order_id<R>(rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let suffix = (rng.next_f64() * GENERATED_ORDER_ID_SPAN).floor().clamp(0.0, 9_999.0) as u32;
    format!("ORDER-{suffix}")
}
