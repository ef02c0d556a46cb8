//! Access decision engine
//!
//! Pure predicates over the injected policy registry. Default-deny:
//! absence of a grant is denial, never an error path that could be
//! swallowed.

use std::sync::Arc;

use tracing::debug;

use crate::utils::error::{Result, ServiceError};

use super::registry::PolicyRegistry;
use super::types::{FinancialPermission, Module, Role};

/// Decision engine answering module and financial access questions
#[derive(Debug, Clone)]
pub struct AccessEngine {
    registry: Arc<PolicyRegistry>,
}

impl AccessEngine {
    /// Create an engine over an explicit policy registry
    pub fn new(registry: Arc<PolicyRegistry>) -> Self {
        Self { registry }
    }

    /// Can this role reach the given module?
    pub fn has_module_access(&self, role: Role, module: Module) -> bool {
        let allowed = self.registry.policy_for(role).modules.contains(&module);
        debug!(role = %role, module = %module, allowed, "module access check");
        allowed
    }

    /// Does this role hold the given financial permission?
    pub fn has_financial_access(&self, role: Role, permission: FinancialPermission) -> bool {
        let allowed = self
            .registry
            .policy_for(role)
            .financial_permissions
            .contains(&permission);
        debug!(role = %role, permission = %permission, allowed, "financial access check");
        allowed
    }

    /// Boundary form of [`has_module_access`](Self::has_module_access)
    pub fn check_module(&self, role: Role, module: Module) -> Result<()> {
        if self.has_module_access(role, module) {
            Ok(())
        } else {
            Err(ServiceError::AccessDenied)
        }
    }

    /// Boundary form of [`has_financial_access`](Self::has_financial_access)
    pub fn check_financial(&self, role: Role, permission: FinancialPermission) -> Result<()> {
        if self.has_financial_access(role, permission) {
            Ok(())
        } else {
            Err(ServiceError::AccessDenied)
        }
    }

    /// The registry backing this engine
    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }
}

impl Default for AccessEngine {
    fn default() -> Self {
        Self::new(Arc::new(PolicyRegistry::builtin()))
    }
}
