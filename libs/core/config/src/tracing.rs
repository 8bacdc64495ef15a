use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install the color-eyre report hook.
///
/// Call it first thing in `main`. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default directives when `RUST_LOG` is unset.
fn default_filter(environment: Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("warn,tower_http=info")
    } else {
        EnvFilter::new("debug,tower_http=debug")
    }
}

/// Install the global tracing subscriber.
///
/// - **Production**: flattened JSON events, no module targets.
/// - **Development**: pretty, human-readable output.
///
/// Both include [`tracing_error::ErrorLayer`] so eyre reports carry span traces.
/// `RUST_LOG` overrides the default filter. Calling this more than once (as
/// tests do) leaves the first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(*environment));

    let result = if environment.is_production() {
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
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
