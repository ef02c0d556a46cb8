//! Configuration validation

use crate::config::models::{AuthConfig, LoggingConfig, ServerConfig};
use crate::utils::error::{Result, ServiceError};
use tracing::debug;

/// Validation for configuration sections
pub trait Validate {
    /// Validate the configuration, returning a `Config` error on failure
    fn validate(&self) -> Result<()>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err(ServiceError::config("Server host cannot be empty"));
        }
        if self.port == 0 {
            return Err(ServiceError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating auth configuration");

        if self.role_header.is_empty() {
            return Err(ServiceError::config("Role header name cannot be empty"));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if self.level.is_empty() {
            return Err(ServiceError::config("Log level cannot be empty"));
        }

        Ok(())
    }
}
