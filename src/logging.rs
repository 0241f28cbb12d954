use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::RegistrationError;

/// Initialize structured logging based on verbosity level.
///
/// Logs are written to stderr so they never mix with the menu transcript.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("course_registration=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("course_registration=warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log system information for debugging
pub fn log_system_info() {
    tracing::debug!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "System information"
    );
}

/// Log a successful load of the enrollment file
pub fn log_records_loaded(path: &Path, count: usize) {
    tracing::info!(
        path = %path.display(),
        count = count,
        "Enrollment records loaded"
    );
}

/// Log a successful save of the enrollment file
pub fn log_records_saved(path: &Path, count: usize) {
    tracing::info!(
        path = %path.display(),
        count = count,
        "Enrollment records saved"
    );
}

/// Log an enrollment file that could not be loaded
pub fn log_load_failure(path: &Path, error: &RegistrationError) {
    let detail = error.technical_detail();
    tracing::warn!(
        path = %path.display(),
        category = %detail.category,
        error = %detail.description,
        "Failed to load enrollment records"
    );
}

/// Log an enrollment file that could not be written
pub fn log_save_failure(path: &Path, error: &RegistrationError) {
    let detail = error.technical_detail();
    tracing::warn!(
        path = %path.display(),
        category = %detail.category,
        error = %detail.description,
        "Failed to save enrollment records"
    );
}

/// Log a newly registered student
pub fn log_registration(first_name: &str, last_name: &str, course_name: &str) {
    tracing::debug!(
        first_name = first_name,
        last_name = last_name,
        course_name = course_name,
        "Student registered"
    );
}

/// Log the menu choice the user entered
pub fn log_menu_choice(input: &str, accepted: bool) {
    tracing::debug!(input = input, accepted = accepted, "Menu choice received");
}
