use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tracing::warn;

/// API request body for the /api/authorize endpoint.
///
/// Every field is optional; missing or unusable values degrade to the
/// invalid-card outcome instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationRequest {
    /// Caller's order identifier, echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Amount to authorize. Kept as a JSON number so it echoes verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_amount: Option<Number>,
    /// Card number, either bare or wrapped in an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardDetails>,
}

/// The two accepted shapes of `CardDetails`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CardDetails {
    /// `"CardDetails": "4111 1111 1111 1111"`
    Raw(String),
    /// `"CardDetails": { "cardNumber": "4111111111111111", ... }`
    Structured(Map<String, Value>),
}

impl AuthorizationRequest {
    /// Reads a raw request body.
    ///
    /// Fields are read one at a time, so a field of the wrong type is
    /// dropped on its own instead of discarding the whole request. Bodies
    /// that are blank or not JSON become an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_json(&value),
            Err(err) => {
                warn!(error = %err, "authorization request is not JSON, treating as empty");
                Self::default()
            }
        }
    }

    /// Reads an already-parsed JSON body, field by field.
    pub fn from_json(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            warn!("authorization request is not a JSON object, treating as empty");
            return Self::default();
        };

        AuthorizationRequest {
            order_id: read_field(fields, "OrderId", order_id_text),
            requested_amount: read_field(fields, "RequestedAmount", |value| match value {
                Value::Number(n) => Some(n.clone()),
                _ => None,
            }),
            card_details: read_field(fields, "CardDetails", CardDetails::from_json),
        }
    }
}

impl CardDetails {
    /// Strings and objects map to their variants. A bare JSON number is
    /// taken as a raw card number; anything else is unusable.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(raw) => Some(CardDetails::Raw(raw.clone())),
            Value::Number(n) => Some(CardDetails::Raw(n.to_string())),
            Value::Object(fields) => Some(CardDetails::Structured(fields.clone())),
            _ => None,
        }
    }
}

/// Numeric order ids are echoed as text.
fn order_id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn read_field<T>(
    fields: &Map<String, Value>,
    name: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = fields.get(name).filter(|v| !v.is_null())?;
    let parsed = read(value);
    if parsed.is_none() {
        warn!(field = name, "ignoring request field of unexpected type");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_structured_card_details() {
        let request: AuthorizationRequest = serde_json::from_value(json!({
            "OrderId": "X1",
            "RequestedAmount": 75,
            "CardDetails": { "cardNumber": "4111111111111111", "expiry": "12/30" }
        }))
        .unwrap();

        assert_eq!(request.order_id.as_deref(), Some("X1"));
        assert_eq!(request.requested_amount, Some(Number::from(75)));
        match request.card_details {
            Some(CardDetails::Structured(map)) => {
                assert_eq!(map["cardNumber"], json!("4111111111111111"));
            }
            other => panic!("expected structured card details, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_raw_card_details() {
        let request: AuthorizationRequest =
            serde_json::from_value(json!({ "CardDetails": "3782-822463-10005" })).unwrap();
        assert_eq!(
            request.card_details,
            Some(CardDetails::Raw("3782-822463-10005".to_string()))
        );
        assert!(request.order_id.is_none());
        assert!(request.requested_amount.is_none());
    }

    #[test]
    fn test_empty_body_is_an_empty_request() {
        let request: AuthorizationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, AuthorizationRequest::default());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let request: AuthorizationRequest = serde_json::from_value(json!({
            "OrderId": null,
            "RequestedAmount": null,
            "CardDetails": null
        }))
        .unwrap();
        assert_eq!(request, AuthorizationRequest::default());
    }

    #[test]
    fn test_body_keeps_card_when_order_id_is_numeric() {
        let body = br#"{"OrderId":12345,"RequestedAmount":75,"CardDetails":"4111111111111111"}"#;
        let request = AuthorizationRequest::from_body(body);

        assert_eq!(request.order_id.as_deref(), Some("12345"));
        assert_eq!(request.requested_amount, Some(Number::from(75)));
        assert_eq!(
            request.card_details,
            Some(CardDetails::Raw("4111111111111111".to_string()))
        );
    }

    #[test]
    fn test_body_drops_only_a_string_amount() {
        let body = br#"{"OrderId":"X1","RequestedAmount":"75","CardDetails":{"pan":"378282246310005"}}"#;
        let request = AuthorizationRequest::from_body(body);

        assert_eq!(request.order_id.as_deref(), Some("X1"));
        assert!(request.requested_amount.is_none());
        assert!(matches!(request.card_details, Some(CardDetails::Structured(_))));
    }

    #[test]
    fn test_body_with_unusable_fields() {
        let request = AuthorizationRequest::from_json(&json!({
            "OrderId": ["A"],
            "RequestedAmount": true,
            "CardDetails": false
        }));
        assert_eq!(request, AuthorizationRequest::default());

        let request = AuthorizationRequest::from_json(&json!({ "CardDetails": 6011111111111117u64 }));
        assert_eq!(
            request.card_details,
            Some(CardDetails::Raw("6011111111111117".to_string()))
        );
    }

    #[test]
    fn test_blank_and_non_json_bodies_are_empty_requests() {
        let bodies: [&[u8]; 5] = [b"", b"  \n\t", b"{ not json", b"[1, 2]", b"\"4111111111111111\""];
        for body in bodies {
            assert_eq!(
                AuthorizationRequest::from_body(body),
                AuthorizationRequest::default(),
                "{}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_body_matches_typed_parse_for_well_formed_requests() {
        let value = json!({
            "OrderId": "X1",
            "RequestedAmount": 19.99,
            "CardDetails": { "cardNumber": "4111111111111111" }
        });
        let typed: AuthorizationRequest = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(AuthorizationRequest::from_json(&value), typed);
    }
}
