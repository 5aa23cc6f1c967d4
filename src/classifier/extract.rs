//! Card number extraction from the accepted `CardDetails` shapes.

use crate::json::{is_truthy, scalar_text};
use crate::models::request::CardDetails;

/// Fields checked on structured card details, highest priority first.
pub const CARD_NUMBER_FIELDS: [&str; 4] = ["cardNumber", "CardNumber", "number", "pan"];

/// Returns the card number exactly as supplied, without normalizing it.
///
/// Missing details, or an object with none of the checked fields holding a
/// usable string or number, yield an empty string. Fields holding
/// booleans, arrays, or objects are skipped.
pub fn extract_card_number(details: Option<&CardDetails>) -> String {
    match details {
        None => String::new(),
        Some(CardDetails::Raw(raw)) => raw.clone(),
        Some(CardDetails::Structured(fields)) => CARD_NUMBER_FIELDS
            .iter()
            .filter_map(|name| fields.get(*name))
            .filter(|value| is_truthy(value))
            .map(scalar_text)
            .find(|text| !text.is_empty())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn structured(value: Value) -> CardDetails {
        match value {
            Value::Object(map) => CardDetails::Structured(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_absent_details_yield_empty() {
        assert_eq!(extract_card_number(None), "");
    }

    #[test]
    fn test_raw_string_is_unchanged() {
        let details = CardDetails::Raw(" 4111-1111-1111-1111 ".to_string());
        assert_eq!(extract_card_number(Some(&details)), " 4111-1111-1111-1111 ");
    }

    #[test]
    fn test_each_field_is_checked() {
        for field in CARD_NUMBER_FIELDS {
            let details = structured(json!({ field: "6011111111111117" }));
            assert_eq!(extract_card_number(Some(&details)), "6011111111111117", "{field}");
        }
    }

    #[test]
    fn test_field_priority_order() {
        let details = structured(json!({
            "pan": "4",
            "number": "3",
            "CardNumber": "2",
            "cardNumber": "1"
        }));
        assert_eq!(extract_card_number(Some(&details)), "1");

        let details = structured(json!({ "pan": "4", "number": "3" }));
        assert_eq!(extract_card_number(Some(&details)), "3");
    }

    #[test]
    fn test_falsy_fields_fall_through() {
        let details = structured(json!({
            "cardNumber": "",
            "CardNumber": null,
            "pan": "378282246310005"
        }));
        assert_eq!(extract_card_number(Some(&details)), "378282246310005");
    }

    #[test]
    fn test_numeric_card_number() {
        let details = structured(json!({ "number": 5555555555554444u64 }));
        assert_eq!(extract_card_number(Some(&details)), "5555555555554444");
    }

    #[test]
    fn test_object_without_known_fields_yields_empty() {
        let details = CardDetails::Structured(Map::new());
        assert_eq!(extract_card_number(Some(&details)), "");

        let details = structured(json!({ "card_number": "4111111111111111" }));
        assert_eq!(extract_card_number(Some(&details)), "");
    }

    #[test]
    fn test_non_scalar_fields_fall_through() {
        let details = structured(json!({
            "cardNumber": { "value": "4111111111111111" },
            "CardNumber": true,
            "number": ["5555555555554444"],
            "pan": "6011111111111117"
        }));
        assert_eq!(extract_card_number(Some(&details)), "6011111111111117");

        let details = structured(json!({ "cardNumber": true }));
        assert_eq!(extract_card_number(Some(&details)), "");
    }
}
