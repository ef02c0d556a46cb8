//! HTTP server implementation
//!
//! Wires the authorization middleware and redaction-aware routes into
//! an actix-web application.

pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

use crate::config::{Config, ServerConfig};
use crate::server::middleware::{RequestId, SubjectExtractor};
use crate::storage::SampleStore;
use crate::utils::error::{Result, ServiceError};
use actix_web::{web, App, HttpServer as ActixHttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server over the built-in policy tables and the
    /// sample data source
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let auth = crate::auth::AuthSystem::builtin();
        let state = AppState::new(config.clone(), auth, Arc::new(SampleStore));

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        let workers = self.config.workers;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || {
            let role_header = state.config.auth.role_header.clone();
            App::new()
                .app_data(state.clone())
                .wrap(TracingLogger::default())
                .wrap(RequestId)
                .wrap(SubjectExtractor::new(role_header))
                .configure(routes::configure)
        })
        .bind(&bind_addr)
        .map_err(|e| ServiceError::config(format!("Failed to bind {}: {}", bind_addr, e)))?;

        if workers > 0 {
            server = server.workers(workers);
        }

        server
            .run()
            .await
            .map_err(|e| ServiceError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
