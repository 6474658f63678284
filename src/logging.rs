use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// RUST_LOG takes precedence over `default_filter`. Calling this twice is
/// harmless, the second install is ignored.
pub fn init(default_filter: &str) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(std::env::var("RUST_LOG").ok(), default_filter))
        .with(fmt_layer)
        .try_init()
        .ok();
}

/// Builds the filter from RUST_LOG if set, else from the configured directive.
/// Unparseable directives fall back to `info`.
fn env_filter(rust_log: Option<String>, default_filter: &str) -> EnvFilter {
    let directive = rust_log
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default_filter.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = env_filter(Some("navstack=trace".to_string()), "warn");
        assert_eq!(filter.to_string(), "navstack=trace");
    }

    #[test]
    fn test_blank_rust_log_uses_default() {
        let filter = env_filter(Some("  ".to_string()), "debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_invalid_directive_falls_back() {
        let filter = env_filter(None, "navstack=loud");
        assert_eq!(filter.to_string(), "info");
    }
}
