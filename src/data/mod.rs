//! Sample request generation for batch simulations.
//!
//! Generates authorization requests the way a client under test sends
//! them: every supported network, unknown and missing cards, raw and
//! structured card details, and the occasional missing order id or
//! amount. Uses seeded RNG for reproducible batches across runs.
//!
//! # Data Distribution
//! - Card category rotates VISA, MASTERCARD, AMEX, DISCOVER, unsupported
//! - Unsupported slots alternate between unknown numbers and no card at all
//! - ~15% of requests omit `OrderId`, ~10% omit `RequestedAmount`
//! - Amount range: 5.00–2500.00

use crate::classifier::CARD_NUMBER_FIELDS;
use crate::models::request::{AuthorizationRequest, CardDetails};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Number, Value};

/// Well-known test numbers per network.
pub const VISA_CARDS: [&str; 4] = [
    "4111111111111111",
    "4012888888881881",
    "4222222222222",
    "4111111111111111003",
];
pub const MASTERCARD_CARDS: [&str; 4] = [
    "5555555555554444",
    "5105105105105100",
    "2221000000000009",
    "2720999999999996",
];
pub const AMEX_CARDS: [&str; 3] = ["378282246310005", "371449635398431", "340000000000009"];
pub const DISCOVER_CARDS: [&str; 3] = ["6011111111111117", "6011000990139424", "6500000000000002"];
/// Numbers no supported network matches (JCB, Diners, truncated, garbage).
pub const UNKNOWN_CARDS: [&str; 4] = ["3530111333300000", "30569309025904", "411111", "0000"];

/// Data seed for reproducible generation.
const DATA_SEED: u64 = 42;

/// Size of the canonical sample batch.
const SAMPLE_SIZE: usize = 200;

/// Generate a batch of sample requests.
pub fn generate_sample_requests(count: usize) -> Vec<AuthorizationRequest> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    let mut requests = Vec::with_capacity(count);

    for i in 0..count {
        let card = match i % 5 {
            0 => Some(pick(&mut rng, &VISA_CARDS)),
            1 => Some(pick(&mut rng, &MASTERCARD_CARDS)),
            2 => Some(pick(&mut rng, &AMEX_CARDS)),
            3 => Some(pick(&mut rng, &DISCOVER_CARDS)),
            // Unsupported slot: alternate unknown numbers and missing details
            _ if (i / 5) % 2 == 0 => Some(pick(&mut rng, &UNKNOWN_CARDS)),
            _ => None,
        };
        let card_details = card.map(|number| card_details(&mut rng, number));

        let order_id = if rng.gen_bool(0.15) {
            None
        } else {
            Some(format!("ORD-{:05}", i + 1))
        };

        let requested_amount = if rng.gen_bool(0.10) {
            None
        } else {
            Number::from_f64(round_to_cents(rng.gen_range(5.0..2500.0)))
        };

        requests.push(AuthorizationRequest {
            order_id,
            requested_amount,
            card_details,
        });
    }

    requests
}

/// Get the canonical sample batch of 200 requests.
///
/// Always returns the same data (seeded RNG).
pub fn get_sample_dataset() -> Vec<AuthorizationRequest> {
    generate_sample_requests(SAMPLE_SIZE)
}

fn pick<'a>(rng: &mut StdRng, cards: &[&'a str]) -> &'a str {
    cards[rng.gen_range(0..cards.len())]
}

/// Wrap a card number in one of the accepted `CardDetails` shapes.
///
/// Half of the raw strings are printed in groups of four, the way users
/// type them into checkout forms.
fn card_details(rng: &mut StdRng, number: &str) -> CardDetails {
    let shape = rng.gen_range(0..CARD_NUMBER_FIELDS.len() + 2);
    match shape {
        0 => CardDetails::Raw(number.to_string()),
        1 => CardDetails::Raw(group_digits(number)),
        n => {
            let mut fields = Map::new();
            fields.insert(CARD_NUMBER_FIELDS[n - 2].to_string(), Value::from(number));
            fields.insert("expiry".to_string(), Value::from("12/30"));
            CardDetails::Structured(fields)
        }
    }
}

fn group_digits(number: &str) -> String {
    number
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round a float to 2 decimal places (cents).
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
