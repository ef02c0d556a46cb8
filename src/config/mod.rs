//! Configuration management for the back end
//!
//! Handles loading and validation of the service configuration.

pub mod models;
pub mod validation;

pub use models::{AuthConfig, LoggingConfig, RbacConfig, ServerConfig};
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the back end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication boundary configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();

        if let Ok(host) = std::env::var("FARMAGATE_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("FARMAGATE_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ServiceError::config("FARMAGATE_PORT must be a port number"))?;
        }
        if let Ok(header) = std::env::var("FARMAGATE_ROLE_HEADER") {
            config.auth.role_header = header;
        }
        if let Ok(level) = std::env::var("FARMAGATE_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[tokio::test]
    async fn test_from_file_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 9090\nauth:\n  role_header: x-role").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.auth.role_header, "x-role");
        // Unspecified sections fall back to defaults
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.auth.rbac.enabled);
    }

    #[tokio::test]
    async fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/farmagate.yaml").await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    #[tokio::test]
    async fn test_from_file_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server: [not-a-map").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }
}
