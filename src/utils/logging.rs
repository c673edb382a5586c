//! Logging initialization
//!
//! Standard tracing setup for hosts and tools that do not bring their own
//! subscriber:
//! - Respects the `RUST_LOG` environment variable
//! - Falls back to a filter from configuration if provided
//! - Defaults to "info"
//! - Honors `NO_COLOR`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `filter` is an optional directive string from configuration (e.g.
/// "debug", "modhost=debug"). `RUST_LOG` always takes precedence over it.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or("info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(env_filter)
        .init();
}
