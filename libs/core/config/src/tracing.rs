//! Logging and error-report setup for the marketplace binary.

use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Crates whose spans and events make up the service's own logs.
const SERVICE_TARGETS: [&str; 5] = [
    "marketplace_api",
    "domain_products",
    "domain_users",
    "axum_helpers",
    "database",
];

/// Install the color-eyre report hook. Later calls are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is unset.
///
/// Service crates log at `info` in production and `debug` in development.
/// Everything else, the MongoDB driver included, stays quieter.
pub fn default_directives(environment: &Environment) -> String {
    let (service, http, driver, rest) = if environment.is_production() {
        ("info", "info", "warn", "warn")
    } else {
        ("debug", "debug", "info", "info")
    };

    let mut directives = vec![rest.to_string()];
    directives.extend(SERVICE_TARGETS.iter().map(|t| format!("{t}={service}")));
    directives.push(format!("tower_http={http}"));
    directives.push(format!("mongodb={driver}"));
    directives.join(",")
}

/// Install the global subscriber: flattened JSON events in production,
/// pretty multi-line output in development. Both carry an `ErrorLayer` so
/// eyre reports include the active span trace.
///
/// `RUST_LOG` overrides [`default_directives`]. A second call leaves the
/// first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let installed = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match installed {
        Ok(()) => tracing::info!(?environment, "Tracing initialized"),
        Err(_) => tracing::debug!("Tracing already initialized"),
    }
}
