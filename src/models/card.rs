use serde::{Deserialize, Serialize};

/// Card networks the classifier can recognise from a card number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Discover,
    /// Empty, malformed, or unrecognised card number.
    Unknown,
}

impl CardNetwork {
    /// Every network, in classification order.
    pub const ALL: [CardNetwork; 5] = [
        CardNetwork::Visa,
        CardNetwork::Mastercard,
        CardNetwork::Amex,
        CardNetwork::Discover,
        CardNetwork::Unknown,
    ];

    /// Wire name used for the `CardType` response field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "VISA",
            CardNetwork::Mastercard => "MASTERCARD",
            CardNetwork::Amex => "AMEX",
            CardNetwork::Discover => "DISCOVER",
            CardNetwork::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CardNetwork::Unknown)
    }
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
