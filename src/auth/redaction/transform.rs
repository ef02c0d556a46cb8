//! Redaction transform
//!
//! Projects a payload to what a role may see before serialization.
//! Never mutates its input; callers keep the full object for paths that
//! legitimately need it (audit logging). Idempotent, so applying it
//! again at another layer is harmless.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::warn;

use crate::auth::rbac::{AccessEngine, Role};

use super::schema::{EntityKind, SensitivitySchema};

/// Role-aware payload redactor
#[derive(Debug, Clone)]
pub struct Redactor {
    engine: AccessEngine,
    schema: Arc<SensitivitySchema>,
}

impl Redactor {
    /// Create a redactor over an engine and a sensitivity schema
    pub fn new(engine: AccessEngine, schema: Arc<SensitivitySchema>) -> Self {
        Self { engine, schema }
    }

    /// Produce the role-appropriate projection of `value`.
    ///
    /// Accepts a single entity object, an array of entities, or a
    /// nested aggregate; arrays are mapped element-wise. Fields are
    /// removed, never nulled, so serialization omits the keys entirely.
    pub fn redact(&self, kind: EntityKind, value: &Value, role: Role) -> Value {
        let policy = match self.schema.policy_for(kind) {
            Some(policy) => policy,
            None => {
                // Unregistered kind: favor availability of the
                // non-sensitive payload over failing the request
                warn!(kind = %kind, "no sensitivity entry for entity kind, passing through");
                return value.clone();
            }
        };

        if self
            .engine
            .has_financial_access(role, policy.required_permission)
        {
            return value.clone();
        }

        self.project(kind, value, role)
    }

    /// Fail-closed projection for a role without the required
    /// permission: keep only fields classified public or nested.
    /// Sensitive and unclassified fields are dropped entirely.
    fn project(&self, kind: EntityKind, value: &Value, role: Role) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.project(kind, item, role))
                    .collect(),
            ),
            Value::Object(fields) => {
                let policy = match self.schema.policy_for(kind) {
                    Some(policy) => policy,
                    None => return value.clone(),
                };

                let mut projected = Map::with_capacity(fields.len());
                for (name, field_value) in fields {
                    if let Some((_, nested_kind)) = policy
                        .nested_paths
                        .iter()
                        .find(|(path, _)| *path == name.as_str())
                    {
                        // Nested kinds carry their own required
                        // permission; re-enter through redact
                        projected.insert(name.clone(), self.redact(*nested_kind, field_value, role));
                    } else if policy.public_fields.iter().any(|f| *f == name.as_str()) {
                        projected.insert(name.clone(), field_value.clone());
                    }
                }
                Value::Object(projected)
            }
            // Scalars carry no field structure to strip
            other => other.clone(),
        }
    }

    /// The schema backing this redactor
    pub fn schema(&self) -> &SensitivitySchema {
        &self.schema
    }
}
