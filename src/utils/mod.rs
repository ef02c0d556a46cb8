//! Utility modules shared across the back end

pub mod error;
pub mod logging;

pub use error::{Result, ServiceError};
