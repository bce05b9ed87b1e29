// * Telemetry - JSON Logging
// * Structured logging for the link engine's debug/trace events

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with JSON formatting
///
/// Honors `RUST_LOG`, falling back to `info`. Returns `false` when a global
/// subscriber was already installed.
///
/// # Example
/// ```ignore
/// use pdf_harvest::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(url = "https://example.com/report.pdf", "Queued link");
/// ```
pub fn init_tracing() -> bool {
    init_tracing_with_level("info")
}

/// Initializes JSON tracing with a custom default level
pub fn init_tracing_with_level(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().json())
        .try_init()
        .is_ok()
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() -> bool {
    tracing_subscriber::registry()
        .with(env_filter("debug"))
        .with(fmt::layer().pretty())
        .try_init()
        .is_ok()
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        // * Only test in this binary that touches the global subscriber
        assert!(init_tracing_with_level("pdf_harvest=trace"));
        assert!(!init_tracing());
        assert!(!init_tracing_pretty());

        // * Events flow through the installed subscriber without panicking
        assert!(crate::looks_like_pdf_url("https://example.com/a.pdf"));
    }
}
