//! Logging infrastructure for the FAQ Bot.
//!
//! Logs go to stderr so the transcript on stdout stays readable. The
//! interactive surface defaults to `warn`; raise it with `RUST_LOG`,
//! `--log-level` or `--verbose`.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Filter used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Optional filter override (e.g., "debug", "faqbot_llm=trace")
/// * `no_color` - Disable colored output
///
/// # Example
/// ```no_run
/// use faqbot_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let filter_str = resolve_filter(log_level, std::env::var("RUST_LOG").ok());

    let env_filter = EnvFilter::try_new(&filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", filter_str, e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Pick the filter string: explicit level, then `RUST_LOG`, then the default.
fn resolve_filter(log_level: Option<&str>, rust_log: Option<String>) -> String {
    log_level
        .map(str::to_string)
        .or(rust_log)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Check if stderr is a color-capable terminal.
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_filter_precedence() {
        assert_eq!(
            resolve_filter(Some("debug"), Some("info".to_string())),
            "debug"
        );
        assert_eq!(resolve_filter(None, Some("info".to_string())), "info");
        assert_eq!(resolve_filter(None, None), DEFAULT_LOG_LEVEL);
    }
}
