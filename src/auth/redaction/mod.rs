//! Financial field redaction
//!
//! Strips financially sensitive fields from response payloads for
//! roles lacking the relevant permission, driven by a declarative
//! sensitivity schema.

pub(crate) mod schema;
mod transform;

pub use schema::{EntityKind, EntityPolicy, SensitivitySchema};
pub use transform::Redactor;
