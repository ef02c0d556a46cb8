//! Authorization system
//!
//! The security core of the back end: role-based module gating,
//! financial permission checks, and response payload redaction. All
//! components are immutable after construction and safe to share
//! across request handlers.

pub mod rbac;
pub mod redaction;
pub mod subject;

pub use rbac::{AccessEngine, FinancialPermission, Module, PolicyRegistry, Role, RolePolicy};
pub use redaction::{EntityKind, Redactor, SensitivitySchema};
pub use subject::AccessSubject;

use std::sync::Arc;
use tracing::info;

/// Bundles the decision engine and redactor built from one registry
/// and schema pair. Constructed once at startup and shared via `Arc`.
#[derive(Debug, Clone)]
pub struct AuthSystem {
    /// Access decision engine
    pub engine: AccessEngine,
    /// Payload redactor
    pub redactor: Redactor,
}

impl AuthSystem {
    /// Build the auth system from explicit tables.
    ///
    /// Table validity is enforced upstream: [`PolicyRegistry::try_new`]
    /// and [`SensitivitySchema::try_new`] reject non-total or duplicate
    /// entries at startup, so a deployment defect aborts boot instead
    /// of degrading into "deny all" at request time.
    pub fn new(registry: PolicyRegistry, schema: SensitivitySchema) -> Self {
        let engine = AccessEngine::new(Arc::new(registry));
        let redactor = Redactor::new(engine.clone(), Arc::new(schema));

        info!("Authorization system initialized");
        Self { engine, redactor }
    }

    /// Build the auth system from the built-in product tables
    pub fn builtin() -> Self {
        let engine = AccessEngine::new(Arc::new(PolicyRegistry::builtin()));
        let redactor = Redactor::new(engine.clone(), Arc::new(SensitivitySchema::builtin()));
        Self { engine, redactor }
    }
}
