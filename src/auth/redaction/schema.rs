//! Field sensitivity schema
//!
//! Declarative table describing, per entity kind, which fields are
//! financially sensitive, which are public, and which nested paths
//! carry further redactable entities. The transform consumes this as
//! data; registering a new entity kind never touches transform code.

use std::collections::HashMap;

use crate::auth::rbac::FinancialPermission;
use crate::utils::error::{Result, ServiceError};

/// Kinds of payloads that can cross the serialization boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Catalog product
    Product,
    /// Completed sale
    Sale,
    /// Line item inside a sale
    SaleItem,
    /// Aggregated sales report
    SalesReport,
    /// Aggregated inventory report
    InventoryReport,
    /// Customer record
    Customer,
}

impl EntityKind {
    /// All entity kinds covered by the built-in schema
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Product,
        EntityKind::Sale,
        EntityKind::SaleItem,
        EntityKind::SalesReport,
        EntityKind::InventoryReport,
        EntityKind::Customer,
    ];
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Product => "product",
            EntityKind::Sale => "sale",
            EntityKind::SaleItem => "sale_item",
            EntityKind::SalesReport => "sales_report",
            EntityKind::InventoryReport => "inventory_report",
            EntityKind::Customer => "customer",
        };
        f.write_str(name)
    }
}

/// Field classification for one entity kind.
///
/// Fail-closed: when the owning role lacks `required_permission`, only
/// fields named in `public_fields` or `nested_paths` survive. A field
/// added to the payload but never classified here is stripped, not
/// passed through.
#[derive(Debug, Clone)]
pub struct EntityPolicy {
    /// The entity kind this policy describes
    pub kind: EntityKind,
    /// Permission that unlocks the sensitive fields
    pub required_permission: FinancialPermission,
    /// Fields any role with module access may see
    pub public_fields: Vec<&'static str>,
    /// Financially sensitive fields
    pub sensitive_fields: Vec<&'static str>,
    /// Declared nested paths: field name → entity kind found there.
    /// Redaction recurses only into these, never into arbitrary nesting.
    pub nested_paths: Vec<(&'static str, EntityKind)>,
}

impl EntityPolicy {
    fn new(kind: EntityKind, required_permission: FinancialPermission) -> Self {
        Self {
            kind,
            required_permission,
            public_fields: Vec::new(),
            sensitive_fields: Vec::new(),
            nested_paths: Vec::new(),
        }
    }

    fn public(mut self, fields: &[&'static str]) -> Self {
        self.public_fields = fields.to_vec();
        self
    }

    fn sensitive(mut self, fields: &[&'static str]) -> Self {
        self.sensitive_fields = fields.to_vec();
        self
    }

    fn nested(mut self, field: &'static str, kind: EntityKind) -> Self {
        self.nested_paths.push((field, kind));
        self
    }
}

/// Immutable entity kind → field policy table
#[derive(Debug, Clone)]
pub struct SensitivitySchema {
    entries: HashMap<EntityKind, EntityPolicy>,
}

impl SensitivitySchema {
    /// Build a schema from explicit entries. Duplicate kinds are a
    /// configuration defect and fail construction.
    pub fn try_new(entries: Vec<EntityPolicy>) -> Result<Self> {
        let mut table: HashMap<EntityKind, EntityPolicy> = HashMap::with_capacity(entries.len());

        for entry in entries {
            let kind = entry.kind;
            if table.insert(kind, entry).is_some() {
                return Err(ServiceError::config(format!(
                    "Duplicate sensitivity entry for entity kind '{}'",
                    kind
                )));
            }
        }

        Ok(Self { entries: table })
    }

    /// The product's built-in sensitivity schema
    pub fn builtin() -> Self {
        use EntityKind::*;
        use FinancialPermission::Costs;

        let entries = vec![
            EntityPolicy::new(Product, Costs)
                .public(&[
                    "id",
                    "nome",
                    "descricao",
                    "categoria",
                    "codigoBarras",
                    "precoVenda",
                    "quantidadeEstoque",
                    "validade",
                    "fornecedor",
                ])
                .sensitive(&["precoCusto", "margem"]),
            EntityPolicy::new(SaleItem, Costs)
                .public(&["produtoId", "nome", "quantidade", "precoUnitario", "subtotal"])
                .sensitive(&["custoUnitario", "lucro"]),
            EntityPolicy::new(Sale, Costs)
                .public(&["id", "data", "clienteId", "formaPagamento", "total"])
                .nested("itens", SaleItem),
            EntityPolicy::new(SalesReport, Costs)
                .public(&[
                    "periodo",
                    "totalVendas",
                    "quantidadeVendas",
                    "quantidadeItens",
                ])
                .sensitive(&["custoTotal", "lucroBruto", "margemMedia"])
                .nested("vendas", Sale),
            EntityPolicy::new(InventoryReport, Costs)
                .public(&["totalProdutos", "produtosBaixoEstoque", "valorVendaEstoque"])
                .sensitive(&["valorCustoEstoque"])
                .nested("produtos", Product),
            EntityPolicy::new(Customer, Costs).public(&[
                "id", "nome", "cpf", "telefone", "email", "endereco",
            ]),
        ];

        Self::try_new(entries).expect("built-in sensitivity schema must have unique kinds")
    }

    /// Look up the field policy for an entity kind.
    ///
    /// `None` means the kind was never registered; the transform treats
    /// that as "no sensitive fields" and logs a warning rather than
    /// failing the request.
    pub fn policy_for(&self, kind: EntityKind) -> Option<&EntityPolicy> {
        self.entries.get(&kind)
    }

    /// Kinds covered by this schema
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for SensitivitySchema {
    fn default() -> Self {
        Self::builtin()
    }
}
