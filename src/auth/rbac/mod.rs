//! Role-Based Access Control (RBAC)
//!
//! Decides which functional modules and financial permissions a role
//! holds. All state is an immutable policy table built at startup.

mod engine;
mod registry;
mod types;

// Re-export public types and structs
pub use engine::AccessEngine;
pub use registry::PolicyRegistry;
pub use types::{FinancialPermission, Module, Role, RolePolicy};
