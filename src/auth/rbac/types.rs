//! RBAC type definitions
//!
//! Roles, modules, and financial permissions are closed enumerations.
//! Adding a variant forces every policy table and match site to address
//! it, unlike the loose string tables this replaces. Wire strings are
//! the Portuguese names used by the product's REST surface.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// User role resolved by the upstream authenticator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access
    Administrator,
    /// Store manager
    Manager,
    /// Responsible pharmacist
    Pharmacist,
    /// Salesperson
    Salesperson,
    /// Point-of-sale operator
    PosOperator,
}

impl Role {
    /// All roles, in declaration order. Policy tables are checked for
    /// totality against this list.
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Manager,
        Role::Pharmacist,
        Role::Salesperson,
        Role::PosOperator,
    ];

    /// Wire name used on the REST surface
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrador",
            Role::Manager => "gerente",
            Role::Pharmacist => "farmaceutico",
            Role::Salesperson => "vendedor",
            Role::PosOperator => "caixa",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrador" => Ok(Role::Administrator),
            "gerente" => Ok(Role::Manager),
            "farmaceutico" => Ok(Role::Pharmacist),
            "vendedor" => Ok(Role::Salesperson),
            "caixa" => Ok(Role::PosOperator),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Functional module gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Product catalog
    Products,
    /// User administration
    Users,
    /// Management reports
    Reports,
    /// Sales operations
    Sales,
    /// Customer records
    Customers,
    /// Stock control
    Inventory,
}

impl Module {
    /// All modules, in declaration order
    pub const ALL: [Module; 6] = [
        Module::Products,
        Module::Users,
        Module::Reports,
        Module::Sales,
        Module::Customers,
        Module::Inventory,
    ];

    /// Wire name used on the REST surface
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Products => "produtos",
            Module::Users => "usuarios",
            Module::Reports => "relatorios",
            Module::Sales => "vendas",
            Module::Customers => "clientes",
            Module::Inventory => "estoque",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "produtos" => Ok(Module::Products),
            "usuarios" => Ok(Module::Users),
            "relatorios" => Ok(Module::Reports),
            "vendas" => Ok(Module::Sales),
            "clientes" => Ok(Module::Customers),
            "estoque" => Ok(Module::Inventory),
            _ => Err(format!("Unknown module: {}", s)),
        }
    }
}

/// Gate on financially sensitive numeric fields, orthogonal to module
/// access: holding `Reports` does not imply any financial permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialPermission {
    /// Cost prices and cost aggregates
    Costs,
    /// Profit margins
    Margins,
}

impl FinancialPermission {
    /// All financial permissions, in declaration order
    pub const ALL: [FinancialPermission; 2] =
        [FinancialPermission::Costs, FinancialPermission::Margins];

    /// Wire name used on the REST surface
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialPermission::Costs => "custos",
            FinancialPermission::Margins => "margens",
        }
    }
}

impl std::fmt::Display for FinancialPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinancialPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custos" => Ok(FinancialPermission::Costs),
            "margens" => Ok(FinancialPermission::Margins),
            _ => Err(format!("Unknown financial permission: {}", s)),
        }
    }
}

/// Grants held by a single role
#[derive(Debug, Clone)]
pub struct RolePolicy {
    /// The role this policy belongs to
    pub role: Role,
    /// Modules the role may reach
    pub modules: HashSet<Module>,
    /// Financial permissions the role holds
    pub financial_permissions: HashSet<FinancialPermission>,
}

impl RolePolicy {
    /// Build a policy from grant slices
    pub fn new(
        role: Role,
        modules: &[Module],
        financial_permissions: &[FinancialPermission],
    ) -> Self {
        Self {
            role,
            modules: modules.iter().copied().collect(),
            financial_permissions: financial_permissions.iter().copied().collect(),
        }
    }
}
