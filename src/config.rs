use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MediSense";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info,tower_http=warn", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/MediSense/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("MediSense")
}

/// Path of the SQLite key-value store backing analysis snapshots and bookings.
pub fn store_path() -> PathBuf {
    app_data_dir().join("medisense.db")
}

/// Address the HTTP API binds to. Overridable via MEDISENSE_BIND.
pub fn bind_addr() -> SocketAddr {
    std::env::var("MEDISENSE_BIND")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)))
}

/// Configuration for the outbound text-generation endpoint.
///
/// The upstream service is interchangeable: anything that accepts a
/// bearer-authenticated prompt POST and returns generated text works.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl GenerationConfig {
    /// Read endpoint configuration from the environment.
    ///
    /// MEDISENSE_GENERATION_URL / MEDISENSE_API_KEY / MEDISENSE_MODEL,
    /// with local-friendly defaults for missing values.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("MEDISENSE_GENERATION_URL")
                .unwrap_or_else(|_| "http://localhost:11434/api/generate".to_string()),
            api_key: std::env::var("MEDISENSE_API_KEY").unwrap_or_default(),
            model: std::env::var("MEDISENSE_MODEL")
                .unwrap_or_else(|_| "medgemma:4b".to_string()),
        }
    }
}
