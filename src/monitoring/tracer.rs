/*!
 * Structured Tracing
 * Subscriber setup for the simulator's tracing events
 */

use crate::core::limits::TRACE_JSON_ENV;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Output goes to stderr so reports on stdout stay machine-readable.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - FCFS_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json_requested(std::env::var(TRACE_JSON_ENV).ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    };

    // A subscriber may already be installed (tests, embedding hosts)
    if installed.is_ok() {
        info!("Structured tracing initialized");
    }
}

fn json_requested(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}
