//! Optional on-disk dumps of fetched HTML, toggled by `DEBUG_SAVE_HTML`.

use tracing::warn;

pub fn enabled() -> bool {
    std::env::var("DEBUG_SAVE_HTML")
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

/// Writes a page body to the working directory. Failures are logged and
/// swallowed; dumps never affect request handling.
pub fn save(filename: &str, body: &str) {
    match std::fs::write(filename, body) {
        Ok(()) => tracing::info!(file = filename, "saved debug HTML"),
        Err(e) => warn!(file = filename, error = %e, "failed writing debug HTML"),
    }
}
