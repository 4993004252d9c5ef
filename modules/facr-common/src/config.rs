use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
/// Every knob has a default; the server runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Timeout applied to every outbound fetch (club pages, IS portal, search).
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("FACR_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("FACR_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("FACR_PORT must be a number"),
            fetch_timeout: Duration::from_secs(
                env::var("FACR_FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("FACR_FETCH_TIMEOUT_SECS must be a number"),
            ),
        }
    }
}
