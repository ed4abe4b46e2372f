use tracing_subscriber::{fmt, EnvFilter};

/// Install the tracing subscriber for the server process.
///
/// Filter comes from `RUST_LOG` when set, otherwise a sensible default that
/// keeps sqlx query spam at warn. `try_init` is used because the hosting
/// framework may have already installed a subscriber; losing that race is
/// fine and not an error.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn"));

    if fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        eprintln!("[telemetry] subscriber already installed, skipping");
    }
}
