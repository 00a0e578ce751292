//! Logging Infrastructure
//!
//! Logs go to stderr (stdout carries bridge responses) or, when a log
//! directory is configured, to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "print-bridge");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("log directory {} does not exist, logging to stderr", dir);
    }

    subscriber.with_writer(std::io::stderr).init();
}
