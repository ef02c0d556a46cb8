//! Data retrieval boundary
//!
//! Persistence is an external collaborator of the authorization core.
//! [`DataSource`] is the seam to it: handlers receive already-retrieved
//! payloads here and hand them to the redactor before serialization.
//! The in-memory [`SampleStore`] backs the binary and the tests.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::utils::error::{Result, ServiceError};

/// Read-side retrieval boundary consumed by the route handlers.
///
/// Whether an implementation blocks, suspends, or answers from memory
/// is opaque to the authorization core.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All catalog products
    async fn products(&self) -> Result<Value>;

    /// A single product by id
    async fn product(&self, id: u64) -> Result<Value>;

    /// All customer records
    async fn customers(&self) -> Result<Value>;

    /// Sales for the current period
    async fn sales(&self) -> Result<Value>;

    /// Aggregated sales report
    async fn sales_report(&self) -> Result<Value>;

    /// Aggregated inventory report
    async fn inventory_report(&self) -> Result<Value>;
}

/// In-memory data source with representative pharmacy data
#[derive(Debug, Default, Clone)]
pub struct SampleStore;

#[async_trait]
impl DataSource for SampleStore {
    async fn products(&self) -> Result<Value> {
        Ok(json!([
            {
                "id": 1,
                "nome": "Dipirona 500mg",
                "categoria": "analgesico",
                "precoVenda": 12.5,
                "precoCusto": 6.1,
                "margem": 104.9,
                "quantidadeEstoque": 240,
                "validade": "2027-03-01"
            },
            {
                "id": 2,
                "nome": "Amoxicilina 875mg",
                "categoria": "antibiotico",
                "precoVenda": 38.0,
                "precoCusto": 21.5,
                "margem": 76.7,
                "quantidadeEstoque": 85,
                "validade": "2026-11-15"
            }
        ]))
    }

    async fn product(&self, id: u64) -> Result<Value> {
        let products = self.products().await?;
        products
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .find(|item| item["id"] == json!(id))
                    .cloned()
            })
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }

    async fn customers(&self) -> Result<Value> {
        Ok(json!([
            {"id": 1, "nome": "Maria Souza", "telefone": "11 99999-0001"},
            {"id": 2, "nome": "Joao Lima", "telefone": "11 99999-0002"}
        ]))
    }

    async fn sales(&self) -> Result<Value> {
        Ok(json!([
            {
                "id": 101,
                "data": "2026-08-29",
                "clienteId": 1,
                "formaPagamento": "pix",
                "total": 50.5,
                "itens": [
                    {
                        "produtoId": 1,
                        "nome": "Dipirona 500mg",
                        "quantidade": 2,
                        "precoUnitario": 12.5,
                        "subtotal": 25.0,
                        "custoUnitario": 6.1,
                        "lucro": 12.8
                    }
                ]
            }
        ]))
    }

    async fn sales_report(&self) -> Result<Value> {
        Ok(json!({
            "periodo": "2026-08",
            "totalVendas": 18450.0,
            "quantidadeVendas": 412,
            "quantidadeItens": 1093,
            "custoTotal": 10320.0,
            "lucroBruto": 8130.0,
            "margemMedia": 78.8,
            "vendas": self.sales().await?
        }))
    }

    async fn inventory_report(&self) -> Result<Value> {
        Ok(json!({
            "totalProdutos": 2,
            "produtosBaixoEstoque": 1,
            "valorVendaEstoque": 6230.0,
            "valorCustoEstoque": 3291.5,
            "produtos": self.products().await?
        }))
    }
}
