//! Errors raised while loading or validating the dashboard config

use std::path::PathBuf;
use thiserror::Error;

/// Why a dashboard config could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read dashboard config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dashboard config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse dashboard config: {0}")]
    Parse(String),

    #[error("Invalid dashboard setting '{field}': {message}")]
    Validation { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_dashboard_config() {
        let missing = ConfigError::NotFound(PathBuf::from("ward.toml"));
        assert_eq!(missing.to_string(), "Dashboard config file not found: ward.toml");

        let invalid = ConfigError::Validation {
            field: "server.port".to_string(),
            message: "must be non-zero".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid dashboard setting 'server.port': must be non-zero"
        );
    }
}
