//! Resolver options.

use serde::{Deserialize, Serialize};

/// How an entity set whose type reference matches several entity types is
/// turned into tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingPolicy {
    /// Emit one table per matching entity type.
    #[default]
    CrossProduct,
    /// Fail with [`SchemaError::AmbiguousBinding`](super::SchemaError::AmbiguousBinding).
    Reject,
}

/// Options controlling a [`Model`](super::Model).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelOptions {
    pub binding_policy: BindingPolicy,
}

impl ModelOptions {
    pub fn with_binding_policy(mut self, binding_policy: BindingPolicy) -> Self {
        self.binding_policy = binding_policy;
        self
    }
}
