//! Card classifier: pulls a card number out of the request and decides
//! which network it belongs to.
//!
//! Classification is structural only (prefix and length). No Luhn check is
//! performed, so well-formed test numbers with bad check digits still
//! classify.

pub mod extract;

pub use extract::{extract_card_number, CARD_NUMBER_FIELDS};

use crate::models::card::CardNetwork;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored pattern per network, in the order they are tried.
static NETWORK_PATTERNS: Lazy<Vec<(CardNetwork, Regex)>> = Lazy::new(|| {
    [
        // 13, 16 or 19 digits
        (CardNetwork::Visa, r"^4\d{12}(?:\d{3}){0,2}$"),
        // 51-55, or the 2-series BINs 2221-2720
        (
            CardNetwork::Mastercard,
            r"^(?:5[1-5]\d{14}|2(?:22[1-9]\d{12}|2[3-9]\d{13}|[3-6]\d{14}|7(?:[01]\d{2}|20\d)\d{11}))$",
        ),
        (CardNetwork::Amex, r"^3[47]\d{13}$"),
        (CardNetwork::Discover, r"^6(?:011|5\d{2})\d{12}$"),
    ]
    .into_iter()
    .map(|(network, pattern)| {
        let regex = Regex::new(pattern).expect("card network pattern must compile");
        (network, regex)
    })
    .collect()
});

/// Strips every non-digit character.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Classifies a normalized digit string. First matching pattern wins.
///
/// Total: empty or unrecognised input yields [`CardNetwork::Unknown`].
pub fn classify(digits: &str) -> CardNetwork {
    NETWORK_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(digits))
        .map(|(network, _)| *network)
        .unwrap_or(CardNetwork::Unknown)
}

/// Masks all but the last four digits, for logging.
pub fn mask(digits: &str) -> String {
    let visible = digits.len().saturating_sub(4);
    format!("{}{}", "*".repeat(visible), &digits[visible..])
}
