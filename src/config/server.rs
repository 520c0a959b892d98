//! Where the dashboard page process listens

use serde::{Deserialize, Serialize};

/// Bind address and request limits for the page and JSON endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Defaults to 8501, the usual dashboard port
    pub port: u16,
    /// Requests still running after this long are answered with 408
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            request_timeout_seconds: 30,
        }
    }
}
