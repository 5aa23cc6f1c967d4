use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

use mock_payment_authorizer::config::Settings;
use mock_payment_authorizer::{telemetry, version};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init(&Settings::from_env());
    run(handler).await
}

/// GET /api/health: liveness check.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = json!({
        "status": "ok",
        "version": version(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
