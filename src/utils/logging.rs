use std::env;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system with the specified log level
pub fn init_logging() {
    // Get the log level from environment variable or default to INFO
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Create a custom environment filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Initialize the subscriber with custom formatting; repeated calls
    // (e.g. from several tests) keep the first subscriber
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .try_init()
        .ok();
}

/// Log a Cloudflare API event
pub fn log_cloudflare_event(event_type: &str, success: bool, details: Option<&str>) {
    if success {
        tracing::info!(
            event_type = %event_type,
            success = %success,
            details = ?details,
            timestamp = %chrono::Utc::now()
        );
    } else {
        tracing::error!(
            event_type = %event_type,
            success = %success,
            details = ?details,
            timestamp = %chrono::Utc::now()
        );
    }
}
