//! Role policy registry
//!
//! Immutable table mapping every role to its grants. The table is
//! constructed explicitly and injected into the decision engine, so
//! tests can run against alternate policies without global state.

use std::collections::HashMap;

use crate::utils::error::{Result, ServiceError};

use super::types::{FinancialPermission, Module, Role, RolePolicy};

/// Immutable role → policy table, total over [`Role::ALL`]
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    policies: HashMap<Role, RolePolicy>,
}

impl PolicyRegistry {
    /// Build a registry from explicit policies.
    ///
    /// Closed world: every role must appear exactly once. A missing or
    /// duplicated role is a deployment defect and fails construction
    /// instead of silently denying at request time.
    pub fn try_new(policies: Vec<RolePolicy>) -> Result<Self> {
        let mut table: HashMap<Role, RolePolicy> = HashMap::with_capacity(policies.len());

        for policy in policies {
            let role = policy.role;
            if table.insert(role, policy).is_some() {
                return Err(ServiceError::config(format!(
                    "Duplicate policy entry for role '{}'",
                    role
                )));
            }
        }

        for role in Role::ALL {
            if !table.contains_key(&role) {
                return Err(ServiceError::config(format!(
                    "No policy entry for role '{}'",
                    role
                )));
            }
        }

        Ok(Self { policies: table })
    }

    /// The product's built-in policy table
    pub fn builtin() -> Self {
        use FinancialPermission::*;
        use Module::*;

        let policies = vec![
            RolePolicy::new(
                Role::Administrator,
                &[Products, Users, Reports, Sales, Customers, Inventory],
                &[Costs, Margins],
            ),
            RolePolicy::new(
                Role::Manager,
                &[Products, Reports, Sales, Customers, Inventory],
                &[Margins],
            ),
            RolePolicy::new(Role::Pharmacist, &[Products, Inventory, Customers], &[]),
            RolePolicy::new(Role::Salesperson, &[Sales, Customers], &[]),
            RolePolicy::new(Role::PosOperator, &[Sales], &[]),
        ];

        // The built-in table covers every role; try_new cannot fail here
        Self::try_new(policies).expect("built-in policy table must be total")
    }

    /// Look up the policy for a role. Total by construction.
    pub fn policy_for(&self, role: Role) -> &RolePolicy {
        // try_new guarantees an entry for every Role variant
        self.policies
            .get(&role)
            .expect("registry is total over Role")
    }

    /// All registered policies
    pub fn policies(&self) -> impl Iterator<Item = &RolePolicy> {
        self.policies.values()
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
