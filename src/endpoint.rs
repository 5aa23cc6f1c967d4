//! Request handling behind `POST /api/authorize`, independent of the
//! serverless runtime. The handler binary only adds the synthetic delay
//! and converts [`EndpointResponse`] into an HTTP response.

use http::Method;
use serde_json::{json, Value};
use tracing::error;

use crate::error::TemplateError;
use crate::models::request::AuthorizationRequest;
use crate::simulator::{AuthorizationSimulator, RandomSource};
use crate::templates::ResponseTemplates;

/// Status code and JSON body to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: Value,
}

/// Only POST is accepted; anything else gets a 405 body.
pub fn check_method(method: &Method) -> Result<(), EndpointResponse> {
    if *method == Method::POST {
        return Ok(());
    }
    Err(EndpointResponse {
        status: 405,
        body: json!({
            "error": "Method not allowed",
            "message": "Use POST to submit an order for authorization"
        }),
    })
}

/// 500 body for a template set that failed to load.
pub fn templates_unavailable(err: &TemplateError) -> EndpointResponse {
    error!(error = %err, outcome = %err.outcome(), "failed to load response templates");
    EndpointResponse {
        status: 500,
        body: json!({
            "error": "Response templates unavailable",
            "status": 500
        }),
    }
}

/// Reads the body leniently and runs it through the simulator.
pub fn authorize<R>(templates: &ResponseTemplates, body: &[u8], rng: &mut R) -> EndpointResponse
where
    R: RandomSource + ?Sized,
{
    let request = AuthorizationRequest::from_body(body);
    let response = AuthorizationSimulator::new(templates).authorize(&request, rng);
    EndpointResponse {
        status: response.status_code(),
        body: response.into_json(),
    }
}
