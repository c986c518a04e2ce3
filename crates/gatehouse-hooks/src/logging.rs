// Rust guideline compliant 2026-10-15

//! Logging setup shared by the hook binaries and the CLI.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable selecting the log level when none is given.
pub const ENV_LOG_LEVEL: &str = "GATEHOUSE_LOG";

/// Returns the log level from `GATEHOUSE_LOG`, defaulting to `info`.
pub fn default_level() -> String {
    std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string())
}

/// Returns whether log lines on stdout may carry ANSI colors.
///
/// False when `NO_COLOR` is set or stdout is not a terminal.
pub fn stdout_color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Installs a plain stdout subscriber so progress reads like hook output.
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if `level` is not a recognised log level.
pub fn init_logging(level: &str, ansi: bool) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stdout)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }
}
