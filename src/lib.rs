//! # Farmagate
//!
//! Pharmacy-management back end with a role-based access-control and
//! financial-data redaction core.
//!
//! ## Features
//!
//! - **Closed role model**: roles, modules, and financial permissions
//!   are closed enumerations; the policy table is checked for totality
//!   at startup, so a missing role entry aborts boot instead of
//!   silently denying at request time
//! - **Default-deny decisions**: pure, O(1) set-membership checks over
//!   an immutable, dependency-injected policy registry
//! - **Declarative field sensitivity**: per entity kind, a data table
//!   of public, sensitive, and nested fields drives redaction without
//!   transform code changes
//! - **Fail-closed redaction**: roles without the financial permission
//!   get a projection where sensitive and unclassified fields are
//!   absent, not nulled; lists and nested report aggregates included
//! - **Guarded boundary**: every route scope, reports included, sits
//!   behind an authorization middleware that denies with a uniform 403
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use farmagate::{Backend, Config};
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let backend = Backend::new(config)?;
//!     backend.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library use
//!
//! ```rust
//! use farmagate::auth::{AccessEngine, Module, Role};
//!
//! let engine = AccessEngine::default();
//! assert!(engine.has_module_access(Role::Salesperson, Module::Sales));
//! assert!(!engine.has_module_access(Role::Salesperson, Module::Products));
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{
    AccessEngine, AccessSubject, AuthSystem, EntityKind, FinancialPermission, Module,
    PolicyRegistry, Redactor, Role, SensitivitySchema,
};
pub use config::Config;
pub use utils::error::{Result, ServiceError};

use tracing::info;

/// A minimal back-end assembly: configuration plus HTTP server
pub struct Backend {
    config: Config,
    server: server::HttpServer,
}

impl Backend {
    /// Create a new back-end instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating back-end instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the HTTP server until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting Farmagate back end");
        info!("Listening on {}:{}", self.config.server.host, self.config.server.port);

        self.server.start().await?;

        Ok(())
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "farmagate");
    }
}
