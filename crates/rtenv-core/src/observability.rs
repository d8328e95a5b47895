//! Tracing initialization.
//!
//! Uses `config::ObservabilityConfig` for RTENV_QUIET, RTENV_LOG_LEVEL and
//! RTENV_LOG_JSON. Logs go to stderr so stdout stays machine readable.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call once at process startup; later calls are ignored.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.effective_level()));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    };
}
