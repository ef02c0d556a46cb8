//! Shared application state

use std::sync::Arc;

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::storage::DataSource;

/// State shared across all request handlers.
///
/// Everything in here is immutable after startup; handlers clone the
/// `Arc`s, never the tables.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Authorization engine and redactor
    pub auth: Arc<AuthSystem>,
    /// Data retrieval boundary
    pub data: Arc<dyn DataSource>,
}

impl AppState {
    /// Build application state from its parts
    pub fn new(config: Config, auth: AuthSystem, data: Arc<dyn DataSource>) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            data,
        }
    }
}
