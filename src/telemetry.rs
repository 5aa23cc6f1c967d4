//! Structured logging setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, Settings};

/// Filter used when `RUST_LOG` is unset. Covers the library and every
/// binary target, whose events carry the binary's crate name.
pub const DEFAULT_FILTER: &str =
    "mock_payment_authorizer=info,authorize=info,health=info,generate_outputs=info";

/// Installs the global subscriber. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match settings.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(format = ?settings.log_format, "logging initialised");
    }
}
