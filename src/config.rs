use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medidesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "MEDIDESK_API_URL";

/// Backend base URL used when the environment variable is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolve the backend base URL: environment first, compiled default second.
pub fn api_base_url() -> String {
    match std::env::var(API_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => normalize_base_url(&value),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Strip trailing slashes so `base + "/api/..."` never doubles the separator.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get the application data directory
pub fn app_data_dir() -> PathBuf {
    let data = dirs::data_dir().expect("Cannot determine data directory");
    data.join("medidesk")
}

/// Path of the persisted session document (token + cached profile).
pub fn session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "medidesk=info"
}
