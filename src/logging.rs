//! File + stdout logging for debug builds.
//!
//! Release builds leave logging to bevy's `LogPlugin`.

#[cfg(debug_assertions)]
use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILE_NAME};

/// Guard that must stay alive for the file writer to flush
#[cfg(debug_assertions)]
pub type LogGuard = tracing_appender::non_blocking::WorkerGuard;

#[cfg(not(debug_assertions))]
pub type LogGuard = ();

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
pub fn setup_logging() -> Option<LogGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = crate::paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory {:?}", logs_dir);
        return None;
    }

    let log_file_path = logs_dir.join(LOG_FILE_NAME);

    // Mark where this run starts in the shared log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let _ = writeln!(file, "{}", session_banner(chrono::Local::now()));
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .is_err()
    {
        eprintln!("A global tracing subscriber is already installed");
        return None;
    }

    Some(guard)
}

#[cfg(not(debug_assertions))]
pub fn setup_logging() -> Option<LogGuard> {
    None
}

/// Separator written at the top of each session in the log file
pub fn session_banner<Tz>(now: chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let separator = "=".repeat(80);
    format!(
        "\n\n{}\n=== New Session Started at {} ===\n{}\n",
        separator,
        now.format("%Y-%m-%d %H:%M:%S"),
        separator
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_banner_contains_timestamp() {
        let time = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let banner = session_banner(time);
        assert!(banner.contains("=== New Session Started at 2026-03-14 09:26:53 ==="));
        assert_eq!(banner.matches(&"=".repeat(80)).count(), 2);
    }
}
