use once_cell::sync::{Lazy, OnceCell};
use vercel_runtime::{run, Body, Error, Request, Response};

use mock_payment_authorizer::config::Settings;
use mock_payment_authorizer::endpoint::{self, EndpointResponse};
use mock_payment_authorizer::simulator::RngSource;
use mock_payment_authorizer::templates::ResponseTemplates;
use mock_payment_authorizer::{latency, telemetry};

/// Read once per cold start.
static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);
/// Loaded on first request, then shared read-only.
static TEMPLATES: OnceCell<ResponseTemplates> = OnceCell::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init(&SETTINGS);
    run(handler).await
}

/// POST /api/authorize: simulate a payment gateway authorizing an order.
///
/// Waits a random synthetic delay, then classifies the card and draws one
/// of the weighted outcomes. The outcome's status code is the HTTP status.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if let Err(rejected) = endpoint::check_method(req.method()) {
        return json_response(rejected);
    }

    let templates = match TEMPLATES.get_or_try_init(|| ResponseTemplates::load(&SETTINGS)) {
        Ok(templates) => templates,
        Err(err) => return json_response(endpoint::templates_unavailable(&err)),
    };

    latency::simulate(&SETTINGS.delay_range()).await;

    let payload: &[u8] = req.body();
    json_response(endpoint::authorize(templates, payload, &mut RngSource::thread()))
}

fn json_response(response: EndpointResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(response.status)
        .header("Content-Type", "application/json")
        .body(Body::Text(response.body.to_string()))?)
}
